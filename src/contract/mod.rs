//! Contract layer - transport-agnostic domain types
//!
//! NO serde derives on models - these are pure domain types. The wire and
//! storage representations live in the api and infra layers.

pub mod error;
pub mod model;

pub use error::MentorsError;
pub use model::{Mentor, MentorDraft};
