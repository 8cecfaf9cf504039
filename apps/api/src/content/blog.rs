use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::BlogPostRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPayload {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl BlogPostPayload {
    fn tags_or_empty(&self) -> Vec<String> {
        self.tags.clone().unwrap_or_default()
    }
}

/// GET /api/blog, newest post first.
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPostRow>>, AppError> {
    let rows = sqlx::query_as::<_, BlogPostRow>(
        "SELECT * FROM blog_posts ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/blog/:id, used by the public detail view.
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPostRow>, AppError> {
    let row = sqlx::query_as::<_, BlogPostRow>("SELECT * FROM blog_posts WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Blog post {id} not found")))
}

/// POST /api/blog
pub async fn handle_create(
    State(state): State<AppState>,
    Json(payload): Json<BlogPostPayload>,
) -> Result<(StatusCode, Json<BlogPostRow>), AppError> {
    let row = sqlx::query_as::<_, BlogPostRow>(
        r#"
        INSERT INTO blog_posts (id, title, content, author, tags)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.title)
    .bind(&payload.content)
    .bind(&payload.author)
    .bind(payload.tags_or_empty())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/blog/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlogPostPayload>,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE blog_posts
        SET title = $1, content = $2, author = $3, tags = $4, updated_at = NOW()
        WHERE id = $5
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.content)
    .bind(&payload.author)
    .bind(payload.tags_or_empty())
    .bind(id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Blog post {id} not found")));
    }
    Ok(Json(json!({ "message": "Blog post updated successfully" })))
}

/// DELETE /api/blog/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Blog post {id} not found")));
    }
    Ok(Json(json!({ "message": "Blog post deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tags_default_to_empty() {
        let p: BlogPostPayload = serde_json::from_str(
            r#"{"title":"Shipping v1","content":"...","author":"admin"}"#,
        )
        .unwrap();
        assert!(p.tags_or_empty().is_empty());
    }

    #[test]
    fn test_tags_are_preserved() {
        let p: BlogPostPayload = serde_json::from_str(
            r#"{"title":"Shipping v1","content":"...","author":"admin","tags":["release","rust"]}"#,
        )
        .unwrap();
        assert_eq!(
            p.tags_or_empty(),
            vec!["release".to_string(), "rust".to_string()]
        );
    }
}
