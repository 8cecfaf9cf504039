use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One uploaded résumé file. The newest row is the "current" résumé.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUploadRow {
    pub id: Uuid,
    pub file_name: String,
    pub s3_key: String,
    pub url: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}
