//! REST DTOs with serde derives for HTTP API
//!
//! Wire names are camelCase (`imageUrl`, `isVisible`); topics travel as a
//! JSON array, never as the serialized storage text.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mentor response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentorDto {
    /// Mentor identifier
    pub id: String,

    pub name: String,

    /// Current role
    #[schema(example = "Staff Engineer")]
    pub role: String,

    pub company: String,

    /// Avatar URL
    pub image_url: String,

    /// Free-text biography
    pub bio: String,

    /// Ordered mentoring topics
    pub topics: Vec<String>,

    /// Whether the mentor is listed publicly
    pub is_visible: bool,

    /// Whether the mentor is featured
    pub featured: bool,

    /// Display price text
    #[schema(example = "Free")]
    pub price: String,

    /// Display experience text
    #[schema(example = "7 years")]
    pub experience: String,

    /// Review count
    pub reviews: i32,
}

/// Create/Update mentor request - the full record minus the id
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertMentorRequest {
    pub name: String,
    pub role: String,
    pub company: String,
    pub image_url: String,
    pub bio: String,
    pub topics: Vec<String>,
    pub is_visible: bool,
    pub featured: bool,
    pub price: String,
    pub experience: String,
    pub reviews: i32,
}

/// Outcome of an update or delete
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MutationResponse {
    /// Human-readable outcome ("Updated", "Deleted")
    pub message: String,

    /// Affected-row count
    pub changes: u64,
}

/// Outcome of a visibility toggle
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    /// Human-readable outcome
    pub message: String,

    /// The visibility value after the flip
    pub is_visible: bool,
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,

    pub message: String,
}
