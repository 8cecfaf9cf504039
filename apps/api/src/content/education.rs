use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::EducationRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPayload {
    pub degree: String,
    pub institution: String,
    #[serde(deserialize_with = "year_lenient")]
    pub year: i32,
    pub description: String,
}

/// The dashboard form submits `year` as a string; accept both forms.
fn year_lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearField {
        Num(i32),
        Text(String),
    }

    match YearField::deserialize(deserializer)? {
        YearField::Num(n) => Ok(n),
        YearField::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| serde::de::Error::custom(format!("invalid year: {s:?}"))),
    }
}

/// GET /api/education, most recent year first.
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<EducationRow>>, AppError> {
    let rows = sqlx::query_as::<_, EducationRow>(
        "SELECT * FROM education ORDER BY year DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// POST /api/education
pub async fn handle_create(
    State(state): State<AppState>,
    Json(payload): Json<EducationPayload>,
) -> Result<(StatusCode, Json<EducationRow>), AppError> {
    let row = sqlx::query_as::<_, EducationRow>(
        r#"
        INSERT INTO education (id, degree, institution, year, description)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.degree)
    .bind(&payload.institution)
    .bind(payload.year)
    .bind(&payload.description)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/education/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EducationPayload>,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE education
        SET degree = $1, institution = $2, year = $3, description = $4, updated_at = NOW()
        WHERE id = $5
        "#,
    )
    .bind(&payload.degree)
    .bind(&payload.institution)
    .bind(payload.year)
    .bind(&payload.description)
    .bind(id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Education {id} not found")));
    }
    Ok(Json(json!({ "message": "Education updated successfully" })))
}

/// DELETE /api/education/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let result = sqlx::query("DELETE FROM education WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Education {id} not found")));
    }
    Ok(Json(json!({ "message": "Education deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_accepts_number() {
        let p: EducationPayload = serde_json::from_str(
            r#"{"degree":"BSc","institution":"State University","year":2025,"description":"CS"}"#,
        )
        .unwrap();
        assert_eq!(p.year, 2025);
    }

    #[test]
    fn test_year_accepts_numeric_string() {
        let p: EducationPayload = serde_json::from_str(
            r#"{"degree":"BSc","institution":"State University","year":"2021","description":"CS"}"#,
        )
        .unwrap();
        assert_eq!(p.year, 2021);
    }

    #[test]
    fn test_year_rejects_garbage() {
        let result = serde_json::from_str::<EducationPayload>(
            r#"{"degree":"BSc","institution":"State University","year":"soon","description":"CS"}"#,
        );
        assert!(result.is_err());
    }
}
