//! Route registration

use crate::domain::Service;
use super::{dto::*, handlers};
use axum::{
    routing::{delete, get, patch, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Register the mentor resource routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/api/mentors", get(list_mentors_handler))
        .route("/api/mentors", post(create_mentor_handler))
        .route("/api/mentors/{id}", put(update_mentor_handler))
        .route("/api/mentors/{id}", delete(delete_mentor_handler))
        .route("/api/mentors/{id}/toggle", patch(toggle_visibility_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

/// Register the liveness probe. Kept separate from the resource routes so
/// the probe answers even when storage never initialized.
pub fn register_health_route(router: Router) -> Router {
    router.route("/health", get(health_handler))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_mentors_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<axum::Json<Vec<MentorDto>>, super::error::Problem> {
    handlers::list_mentors(service).await
}

async fn create_mentor_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<UpsertMentorRequest>,
) -> Result<axum::Json<MentorDto>, super::error::Problem> {
    handlers::create_mentor(service, json).await
}

async fn update_mentor_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<String>,
    json: axum::Json<UpsertMentorRequest>,
) -> Result<axum::Json<MutationResponse>, super::error::Problem> {
    handlers::update_mentor(service, path, json).await
}

async fn delete_mentor_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<String>,
) -> Result<axum::Json<MutationResponse>, super::error::Problem> {
    handlers::delete_mentor(service, path).await
}

async fn toggle_visibility_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<String>,
) -> Result<axum::Json<ToggleResponse>, super::error::Problem> {
    handlers::toggle_visibility(service, path).await
}

async fn health_handler() -> axum::Json<HealthResponse> {
    handlers::health().await
}
