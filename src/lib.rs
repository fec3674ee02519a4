//! survey-processor - Survey Insight Pipeline service
//!
//! Accepts fixed-shape survey submissions over HTTP, validates them,
//! derives categorical and statistical insights, augments them with a
//! model-generated description, and persists the combined record.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::services::SurveyPipeline;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The survey insight pipeline (holds the store pool and model client)
    pub pipeline: Arc<SurveyPipeline>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(pipeline: SurveyPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::survey_routes())
        .merge(api::health_routes())
        .with_state(state)
}
