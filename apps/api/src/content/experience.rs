use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::ExperienceRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    pub title: String,
    pub company: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Option<Vec<String>>,
}

impl ExperiencePayload {
    fn responsibilities_or_empty(&self) -> Vec<String> {
        self.responsibilities.clone().unwrap_or_default()
    }
}

/// GET /api/experience, most recent role first (descending start date).
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExperienceRow>>, AppError> {
    let rows = sqlx::query_as::<_, ExperienceRow>(
        "SELECT * FROM experience ORDER BY start_date DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// POST /api/experience
pub async fn handle_create(
    State(state): State<AppState>,
    Json(payload): Json<ExperiencePayload>,
) -> Result<(StatusCode, Json<ExperienceRow>), AppError> {
    let row = sqlx::query_as::<_, ExperienceRow>(
        r#"
        INSERT INTO experience (id, title, company, start_date, end_date, description, responsibilities)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.title)
    .bind(&payload.company)
    .bind(&payload.start_date)
    .bind(&payload.end_date)
    .bind(&payload.description)
    .bind(payload.responsibilities_or_empty())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/experience/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExperiencePayload>,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE experience
        SET title = $1, company = $2, start_date = $3, end_date = $4,
            description = $5, responsibilities = $6, updated_at = NOW()
        WHERE id = $7
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.company)
    .bind(&payload.start_date)
    .bind(&payload.end_date)
    .bind(&payload.description)
    .bind(payload.responsibilities_or_empty())
    .bind(id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Experience {id} not found")));
    }
    Ok(Json(json!({ "message": "Experience updated successfully" })))
}

/// DELETE /api/experience/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query("DELETE FROM experience WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Experience {id} not found")));
    }
    Ok(Json(json!({ "message": "Experience deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_responsibilities_default_to_empty() {
        let p: ExperiencePayload = serde_json::from_str(
            r#"{"title":"Developer","company":"Acme","startDate":"2023-03","description":"apps"}"#,
        )
        .unwrap();
        assert!(p.responsibilities_or_empty().is_empty());
        assert!(p.end_date.is_none());
    }

    #[test]
    fn test_camel_case_dates_deserialize() {
        let p: ExperiencePayload = serde_json::from_str(
            r#"{"title":"Intern","company":"TechNova","startDate":"2022-06","endDate":"2022-09","description":"client apps","responsibilities":["UI work"]}"#,
        )
        .unwrap();
        assert_eq!(p.start_date, "2022-06");
        assert_eq!(p.end_date.as_deref(), Some("2022-09"));
        assert_eq!(p.responsibilities_or_empty(), vec!["UI work".to_string()]);
    }
}
