pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth;
use crate::chat::handlers as chat_handlers;
use crate::content::{blog, education, experience, projects};
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content collections
        .route(
            "/api/projects",
            get(projects::handle_list).post(projects::handle_create),
        )
        .route(
            "/api/projects/:id",
            put(projects::handle_update).delete(projects::handle_delete),
        )
        .route(
            "/api/experience",
            get(experience::handle_list).post(experience::handle_create),
        )
        .route(
            "/api/experience/:id",
            put(experience::handle_update).delete(experience::handle_delete),
        )
        .route(
            "/api/education",
            get(education::handle_list).post(education::handle_create),
        )
        .route(
            "/api/education/:id",
            put(education::handle_update).delete(education::handle_delete),
        )
        .route("/api/blog", get(blog::handle_list).post(blog::handle_create))
        .route(
            "/api/blog/:id",
            get(blog::handle_get)
                .put(blog::handle_update)
                .delete(blog::handle_delete),
        )
        // Résumé
        .route("/api/resume", get(resume::handle_latest))
        .route("/api/resume/upload", post(resume::handle_upload))
        // Chat widget
        .route("/api/chat", post(chat_handlers::handle_chat))
        .route("/api/chat/greeting", get(chat_handlers::handle_greeting))
        // Demo login
        .route("/api/auth/login", post(auth::handle_login))
        .with_state(state)
}
