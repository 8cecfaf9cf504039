//! Demo-only login. A straight credential comparison against configured
//! values; explicitly not a security mechanism.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

/// Static token returned on successful demo login. Not a real session.
const DEMO_TOKEN: &str = "fake-jwt-token";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    if !credentials_match(&req, &state.config) {
        return Err(AppError::Unauthorized);
    }
    Ok(Json(json!({ "message": "Login successful", "token": DEMO_TOKEN })))
}

fn credentials_match(req: &LoginRequest, config: &Config) -> bool {
    req.email == config.admin_email && req.password == config.admin_password
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_config() -> Config {
        Config {
            database_url: "postgres://localhost/folio".to_string(),
            s3_bucket: "portfolio".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            aws_access_key_id: "minio".to_string(),
            aws_secret_access_key: "minio123".to_string(),
            admin_email: "admin@example.com".to_string(),
            admin_password: "adminpassword".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_configured_pair_is_accepted() {
        assert!(credentials_match(
            &login("admin@example.com", "adminpassword"),
            &demo_config()
        ));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        assert!(!credentials_match(
            &login("admin@example.com", "nope"),
            &demo_config()
        ));
    }

    #[test]
    fn test_wrong_email_is_rejected() {
        assert!(!credentials_match(
            &login("user@example.com", "adminpassword"),
            &demo_config()
        ));
    }
}
