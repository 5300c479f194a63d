//! Domain service - business logic orchestration

use crate::contract::{Mentor, MentorDraft, MentorsError};
use super::repository::MentorRepository;
use super::seed::reference_mentors;
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for mentor management
pub struct Service {
    mentors_repo: Arc<dyn MentorRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(mentors_repo: Arc<dyn MentorRepository>) -> Self {
        Self { mentors_repo }
    }

    /// List every mentor, order unspecified
    pub async fn list_mentors(&self) -> Result<Vec<Mentor>, MentorsError> {
        self.mentors_repo.list_all().await.map_err(|e| MentorsError::Storage {
            message: e.to_string(),
        })
    }

    /// Create a mentor from a draft, generating a fresh identifier
    pub async fn create_mentor(&self, draft: MentorDraft) -> Result<Mentor, MentorsError> {
        let mentor = draft.with_id(Uuid::new_v4().to_string());

        self.mentors_repo.insert(&mentor).await.map_err(|e| MentorsError::Storage {
            message: e.to_string(),
        })
    }

    /// Overwrite every field of an existing mentor; the id is immutable
    pub async fn update_mentor(&self, id: &str, draft: MentorDraft) -> Result<u64, MentorsError> {
        let mentor = draft.with_id(id.to_string());

        let changes = self.mentors_repo.update(&mentor).await.map_err(|e| {
            MentorsError::Storage {
                message: e.to_string(),
            }
        })?;

        if changes == 0 {
            return Err(MentorsError::NotFound { id: id.to_string() });
        }
        Ok(changes)
    }

    /// Remove a mentor
    pub async fn delete_mentor(&self, id: &str) -> Result<u64, MentorsError> {
        let changes = self.mentors_repo.delete(id).await.map_err(|e| {
            MentorsError::Storage {
                message: e.to_string(),
            }
        })?;

        if changes == 0 {
            return Err(MentorsError::NotFound { id: id.to_string() });
        }
        Ok(changes)
    }

    /// Flip a mentor's visibility flag, returning the new value.
    /// The negation happens inside a single storage statement, so two
    /// overlapping toggles on the same id cannot lose an update.
    pub async fn toggle_visibility(&self, id: &str) -> Result<bool, MentorsError> {
        self.mentors_repo
            .toggle_visibility(id)
            .await
            .map_err(|e| MentorsError::Storage {
                message: e.to_string(),
            })?
            .ok_or_else(|| MentorsError::NotFound { id: id.to_string() })
    }

    /// Insert the fixed reference mentors when the table is empty.
    /// Returns the number of rows seeded (zero on a non-empty table).
    pub async fn seed_reference_data(&self) -> Result<usize, MentorsError> {
        let existing = self.mentors_repo.count().await.map_err(|e| {
            MentorsError::Storage {
                message: e.to_string(),
            }
        })?;

        if existing > 0 {
            return Ok(0);
        }

        let mentors = reference_mentors();
        for mentor in &mentors {
            self.mentors_repo.insert(mentor).await.map_err(|e| {
                MentorsError::Storage {
                    message: e.to_string(),
                }
            })?;
        }
        Ok(mentors.len())
    }
}
