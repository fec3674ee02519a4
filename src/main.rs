//! survey-processor - Survey Insight Pipeline service
//!
//! Startup order: logging, configuration, database pool (fail-fast
//! connectivity check), model client, then the HTTP server. The model
//! client and store pool live for the whole process and are shared by
//! every request.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use survey_processor::config::Config;
use survey_processor::services::{DescriptionGenerator, HttpTextGenerator, SurveyPipeline};
use survey_processor::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting survey-processor");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;

    let pool = survey_processor::db::init_database_pool(&config.database_path)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            e
        })?;
    info!("Connected to database successfully");

    let model = HttpTextGenerator::new(config.model_endpoint.clone())
        .map_err(|e| anyhow::anyhow!("Failed to build model client: {}", e))?;
    let describer = DescriptionGenerator::new(config.templates_dir.clone(), Arc::new(model));

    let state = AppState::new(SurveyPipeline::new(pool, describer));
    let app = survey_processor::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Listening on http://{}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
