use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::ProjectRow;
use crate::state::AppState;

/// Asset served when a project is created without a screenshot.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tech: Option<Vec<String>>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

impl ProjectPayload {
    /// Missing or empty image falls back to the placeholder asset.
    fn image_or_placeholder(&self) -> String {
        match self.image.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    fn tech_or_empty(&self) -> Vec<String> {
        self.tech.clone().unwrap_or_default()
    }
}

/// GET /api/projects, newest first.
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<ProjectRow>>, AppError> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// POST /api/projects
pub async fn handle_create(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<ProjectRow>), AppError> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        INSERT INTO projects (id, title, description, image, tech, github, demo)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(payload.image_or_placeholder())
    .bind(payload.tech_or_empty())
    .bind(&payload.github)
    .bind(&payload.demo)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/projects/:id replaces the writable fields and refreshes updated_at.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE projects
        SET title = $1, description = $2, image = $3, tech = $4,
            github = $5, demo = $6, updated_at = NOW()
        WHERE id = $7
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(payload.image_or_placeholder())
    .bind(payload.tech_or_empty())
    .bind(&payload.github)
    .bind(&payload.demo)
    .bind(id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Project {id} not found")));
    }
    Ok(Json(json!({ "message": "Project updated successfully" })))
}

/// DELETE /api/projects/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Project {id} not found")));
    }
    Ok(Json(json!({ "message": "Project deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(image: Option<&str>, tech: Option<Vec<&str>>) -> ProjectPayload {
        ProjectPayload {
            title: "Gas Level Monitor".to_string(),
            description: "IoT gas monitoring".to_string(),
            image: image.map(String::from),
            tech: tech.map(|t| t.into_iter().map(String::from).collect()),
            github: None,
            demo: None,
        }
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        assert_eq!(payload(None, None).image_or_placeholder(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_empty_image_uses_placeholder() {
        assert_eq!(payload(Some(""), None).image_or_placeholder(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_provided_image_is_kept() {
        assert_eq!(
            payload(Some("/shots/monitor.png"), None).image_or_placeholder(),
            "/shots/monitor.png"
        );
    }

    #[test]
    fn test_missing_tech_defaults_to_empty() {
        assert!(payload(None, None).tech_or_empty().is_empty());
    }

    #[test]
    fn test_tech_list_is_preserved() {
        let tech = payload(None, Some(vec!["Rust", "Axum"])).tech_or_empty();
        assert_eq!(tech, vec!["Rust".to_string(), "Axum".to_string()]);
    }

    #[test]
    fn test_payload_accepts_camel_case_fields() {
        let p: ProjectPayload = serde_json::from_str(
            r#"{"title":"App","description":"d","tech":["Flutter"],"github":"https://github.com/x"}"#,
        )
        .unwrap();
        assert_eq!(p.tech_or_empty(), vec!["Flutter".to_string()]);
        assert_eq!(p.github.as_deref(), Some("https://github.com/x"));
    }
}
