//! Database access for survey-processor
//!
//! The store is write-only from the pipeline's point of view: one
//! insert per successfully processed submission.

pub mod insights;

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool
///
/// Connects (creating the file if missing) and ensures the
/// survey_insights table exists. Failure here is fatal at startup.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the survey_insights table if it doesn't exist
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS survey_insights (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            overall_analysis TEXT NOT NULL,
            cat_dog TEXT NOT NULL,
            fur_value TEXT NOT NULL,
            tail_value TEXT NOT NULL,
            description TEXT NOT NULL,
            mean REAL NOT NULL,
            median REAL NOT NULL,
            std_dev REAL NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables initialized (survey_insights)");

    Ok(())
}
