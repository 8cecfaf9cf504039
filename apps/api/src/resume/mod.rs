//! Résumé upload and retrieval.
//!
//! Files land in the object-store bucket under `resumes/`; each accepted
//! upload is also recorded in Postgres so the newest row is the current résumé.

use axum::{
    extract::{Multipart, State},
    Json,
};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeUploadRow;
use crate::state::AppState;

/// Multipart field the dashboard submits the file under.
const FILE_FIELD: &str = "resume";

const APPLICATION_PDF: &str = "application/pdf";

struct UploadedFile {
    file_name: String,
    content_type: String,
    data: Bytes,
}

/// POST /api/resume/upload (multipart, PDF only)
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?;
        file = Some(UploadedFile {
            file_name,
            content_type,
            data,
        });
    }

    let file = file.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if !is_pdf(&file.content_type) {
        return Err(AppError::Validation(
            "Only PDF files are allowed".to_string(),
        ));
    }

    let key = object_key(Utc::now().timestamp_millis(), &file.file_name);
    let size_bytes = file.data.len() as i64;

    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&key)
        .body(ByteStream::from(file.data.to_vec()))
        .content_type(APPLICATION_PDF)
        .send()
        .await
        .map_err(|e| AppError::Storage(format!("Resume upload failed: {e}")))?;

    let url = public_url(&state.config.s3_endpoint, &state.config.s3_bucket, &key);
    info!("Uploaded resume to s3://{}/{}", state.config.s3_bucket, key);

    sqlx::query(
        r#"
        INSERT INTO resume_uploads (id, file_name, s3_key, url, size_bytes)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&file.file_name)
    .bind(&key)
    .bind(&url)
    .bind(size_bytes)
    .execute(&state.db)
    .await?;

    Ok(Json(json!({
        "message": "Resume uploaded successfully",
        "url": url
    })))
}

/// GET /api/resume returns the most recent upload.
pub async fn handle_latest(
    State(state): State<AppState>,
) -> Result<Json<ResumeUploadRow>, AppError> {
    let row = sqlx::query_as::<_, ResumeUploadRow>(
        "SELECT * FROM resume_uploads ORDER BY uploaded_at DESC LIMIT 1",
    )
    .fetch_optional(&state.db)
    .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound("No resume uploaded yet".to_string()))
}

fn is_pdf(content_type: &str) -> bool {
    content_type == APPLICATION_PDF
}

fn object_key(upload_millis: i64, file_name: &str) -> String {
    format!("resumes/{upload_millis}_{file_name}")
}

fn public_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_content_type_is_accepted() {
        assert!(is_pdf("application/pdf"));
    }

    #[test]
    fn test_non_pdf_content_types_are_rejected() {
        assert!(!is_pdf("application/msword"));
        assert!(!is_pdf("image/png"));
        assert!(!is_pdf("text/plain"));
        assert!(!is_pdf(""));
    }

    #[test]
    fn test_object_key_shape() {
        assert_eq!(
            object_key(1700000000000, "cv.pdf"),
            "resumes/1700000000000_cv.pdf"
        );
    }

    #[test]
    fn test_public_url_handles_trailing_slash() {
        assert_eq!(
            public_url("http://localhost:9000/", "portfolio", "resumes/1_cv.pdf"),
            "http://localhost:9000/portfolio/resumes/1_cv.pdf"
        );
        assert_eq!(
            public_url("http://localhost:9000", "portfolio", "resumes/1_cv.pdf"),
            "http://localhost:9000/portfolio/resumes/1_cv.pdf"
        );
    }
}
