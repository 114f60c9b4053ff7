//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status and whether the post
/// document can be read.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let storage = match state.posts.list_posts().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!("Health check could not read posts: {}", e);
            "unavailable"
        }
    };

    let response = HealthResponse {
        status: "ok",
        storage,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
