//! HTTP API handlers for survey-processor

pub mod health;
pub mod survey;

pub use health::health_routes;
pub use survey::survey_routes;
