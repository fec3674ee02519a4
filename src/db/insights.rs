//! Insight record persistence

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::InsightRecord;

/// Insert one insight record tagged with its user_id
pub async fn insert_record(
    pool: &SqlitePool,
    user_id: &str,
    record: &InsightRecord,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO survey_insights
            (user_id, overall_analysis, cat_dog, fur_value, tail_value,
             description, mean, median, std_dev, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(record.overall_analysis.as_str())
    .bind(record.cat_dog.as_str())
    .bind(record.fur_value.as_str())
    .bind(record.tail_value.as_str())
    .bind(&record.description)
    .bind(record.statistics.mean)
    .bind(record.statistics.median)
    .bind(record.statistics.std_dev)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    info!("Stored survey insights for user_id: {}", user_id);
    Ok(())
}
