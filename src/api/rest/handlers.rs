//! HTTP request handlers - thin layer that delegates to domain service

use crate::domain::Service;
use super::{dto::*, error::{map_domain_error, Problem}};
use axum::{extract::Path, Json};
use std::sync::Arc;

/// List every mentor in wire form
pub async fn list_mentors(service: Arc<Service>) -> Result<Json<Vec<MentorDto>>, Problem> {
    let mentors = service.list_mentors().await.map_err(map_domain_error)?;

    Ok(Json(mentors.into_iter().map(|m| m.into()).collect()))
}

/// Create a mentor; the response carries the generated id
pub async fn create_mentor(
    service: Arc<Service>,
    Json(req): Json<UpsertMentorRequest>,
) -> Result<Json<MentorDto>, Problem> {
    let mentor = service
        .create_mentor(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(mentor.into()))
}

/// Overwrite every field of an existing mentor
pub async fn update_mentor(
    service: Arc<Service>,
    Path(id): Path<String>,
    Json(req): Json<UpsertMentorRequest>,
) -> Result<Json<MutationResponse>, Problem> {
    let changes = service
        .update_mentor(&id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MutationResponse {
        message: "Updated".to_string(),
        changes,
    }))
}

/// Delete a mentor
pub async fn delete_mentor(
    service: Arc<Service>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>, Problem> {
    let changes = service.delete_mentor(&id).await.map_err(map_domain_error)?;

    Ok(Json(MutationResponse {
        message: "Deleted".to_string(),
        changes,
    }))
}

/// Flip a mentor's visibility flag
pub async fn toggle_visibility(
    service: Arc<Service>,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, Problem> {
    let is_visible = service
        .toggle_visibility(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ToggleResponse {
        message: "Toggled".to_string(),
        is_visible,
    }))
}

/// Liveness probe; never consults storage
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}
