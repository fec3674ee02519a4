//! Survey insight pipeline orchestration
//!
//! One strictly sequential pass per submission:
//! validate -> derive insights -> generate description -> persist.
//! The model client and store pool are process-wide resources injected
//! at construction; the pipeline itself holds no mutable state, so one
//! instance serves all concurrent requests. No step is retried; the
//! first failure ends the request. A persistence failure after
//! generation is reported as-is: the generative work is neither rolled
//! back nor cached.

use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::InsightRecord;
use crate::services::description_generator::DescriptionGenerator;
use crate::services::{insight_engine, validator};

/// Orchestrates one submission through the full pipeline
pub struct SurveyPipeline {
    pool: SqlitePool,
    describer: DescriptionGenerator,
}

impl SurveyPipeline {
    pub fn new(pool: SqlitePool, describer: DescriptionGenerator) -> Self {
        Self { pool, describer }
    }

    /// Process a raw submission payload end to end
    ///
    /// Returns the insight record that was persisted, or the first
    /// error encountered (already logged at its point of detection).
    pub async fn process(&self, payload: &Value) -> ApiResult<InsightRecord> {
        let submission = validator::validate(payload).map_err(|e| {
            error!("Invalid submission: {}", e);
            ApiError::from(e)
        })?;

        // Cannot fail: the submission is validated.
        let insights = insight_engine::derive_insights(&submission);

        let description = self
            .describer
            .generate_description(insights.statistics.mean)
            .await?;

        let record = InsightRecord::new(insights, description);

        db::insights::insert_record(&self.pool, &submission.user_id, &record)
            .await
            .map_err(|e| {
                error!("Failed to store data: {}", e);
                ApiError::from(e)
            })?;

        info!(
            user_id = %submission.user_id,
            overall = record.overall_analysis.as_str(),
            "Survey processed"
        );

        Ok(record)
    }
}
