//! HTTP API integration tests
//!
//! Drives the full router with an in-memory database and a mock model,
//! checking status codes and the exact response body shapes.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use survey_processor::services::model_client::{GenerationParams, GeneratorError, TextGenerator};
use survey_processor::services::{DescriptionGenerator, SurveyPipeline};
use survey_processor::{build_router, AppState};

struct CannedGenerator(&'static str);

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(
        &self,
        _input_text: &str,
        _params: GenerationParams,
    ) -> Result<Vec<String>, GeneratorError> {
        Ok(vec![self.0.to_string()])
    }
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(
        &self,
        _input_text: &str,
        _params: GenerationParams,
    ) -> Result<Vec<String>, GeneratorError> {
        Err(GeneratorError::NetworkError("connection refused".into()))
    }
}

fn write_templates(dir: &TempDir) {
    std::fs::write(
        dir.path().join("the_value_of_short_hair.txt"),
        "Short hair is practical.",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("the_value_of_long_hair.txt"),
        "Long hair is luxurious.",
    )
    .unwrap();
    std::fs::write(dir.path().join("system_prompt.txt"), "Describe this owner.").unwrap();
}

/// Router with in-memory SQLite and the given model; the TempDir must
/// outlive the test so the template files stay readable.
async fn test_app(model: Arc<dyn TextGenerator>) -> (axum::Router, TempDir) {
    let dir = TempDir::new().unwrap();
    write_templates(&dir);

    let pool = sqlx::SqlitePool::connect(":memory:").await.unwrap();
    survey_processor::db::init_tables(&pool).await.unwrap();

    let describer = DescriptionGenerator::new(dir.path(), model);
    let state = AppState::new(SurveyPipeline::new(pool, describer));
    (build_router(state), dir)
}

fn survey_body(values: [i64; 10]) -> Value {
    let results: Vec<Value> = values
        .iter()
        .enumerate()
        .map(|(i, v)| json!({"question_number": i as i64 + 1, "question_value": v}))
        .collect();
    json!({"user_id": "user-123", "survey_results": results})
}

async fn post_survey(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process-survey")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn valid_submission_returns_insight_record() {
    let (app, _dir) = test_app(Arc::new(CannedGenerator("a generated description"))).await;

    let (status, body) = post_survey(app, survey_body([4; 10])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_analysis"], "certain");
    assert_eq!(body["fur_value"], "short");
    assert_eq!(body["description"], "a generated description");
    assert_eq!(body["statistics"]["mean"], 4.0);
    assert_eq!(body["statistics"]["median"], 4.0);
    assert_eq!(body["statistics"]["std_dev"], 0.0);
}

#[tokio::test]
async fn example_submission_labels_dogs_and_unsure() {
    let (app, _dir) = test_app(Arc::new(CannedGenerator("text"))).await;

    // First answer 7, fourth answer 1: both certainty arms fail.
    // Tenth 6 > 5 but ninth 6 > 5: cats condition fails.
    let (status, body) = post_survey(app, survey_body([7, 1, 1, 1, 1, 1, 5, 1, 6, 6])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_analysis"], "unsure");
    assert_eq!(body["cat_dog"], "dogs");
    assert_eq!(body["tail_value"], "long");
}

#[tokio::test]
async fn short_user_id_returns_400_with_error_field() {
    let (app, _dir) = test_app(Arc::new(CannedGenerator("text"))).await;

    let mut body = survey_body([4; 10]);
    body["user_id"] = json!("ab");
    let (status, body) = post_survey(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid user_id: must be a string with at least 5 characters."
    );
}

#[tokio::test]
async fn nine_answers_return_400_shape_error() {
    let (app, _dir) = test_app(Arc::new(CannedGenerator("text"))).await;

    let mut body = survey_body([4; 10]);
    body["survey_results"].as_array_mut().unwrap().pop();
    let (status, body) = post_survey(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid survey_results: must contain exactly 10 objects."
    );
}

#[tokio::test]
async fn duplicate_question_number_names_the_duplicate() {
    let (app, _dir) = test_app(Arc::new(CannedGenerator("text"))).await;

    let mut body = survey_body([4; 10]);
    body["survey_results"][9]["question_number"] = json!(10);
    body["survey_results"][8]["question_number"] = json!(10);
    let (status, body) = post_survey(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Duplicate question_number found: 10.");
}

#[tokio::test]
async fn model_failure_returns_500_internal_error_shape() {
    let (app, _dir) = test_app(Arc::new(FailingGenerator)).await;

    let (status, body) = post_survey(app, survey_body([4; 10])).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["description"], "Internal Server Error");
    assert_eq!(body["status"], 500);
    assert!(body["message"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn missing_templates_return_500() {
    // Build the app, then delete the template dir before the request.
    let (app, dir) = test_app(Arc::new(CannedGenerator("text"))).await;
    let path = dir.path().to_path_buf();
    drop(dir);
    assert!(!path.exists());

    let (status, body) = post_survey(app, survey_body([4; 10])).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["description"], "Internal Server Error");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (app, _dir) = test_app(Arc::new(CannedGenerator("text"))).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "survey-processor");
    assert!(body.get("service").is_none());
}
