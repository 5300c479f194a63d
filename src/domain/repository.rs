//! Repository trait for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::Mentor;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for mentor records
#[async_trait]
pub trait MentorRepository: Send + Sync {
    /// Insert a new mentor row
    async fn insert(&self, mentor: &Mentor) -> Result<Mentor>;

    /// Read every mentor row, order unspecified
    async fn list_all(&self) -> Result<Vec<Mentor>>;

    /// Overwrite every column of the row matching the mentor's id,
    /// returning the affected-row count
    async fn update(&self, mentor: &Mentor) -> Result<u64>;

    /// Delete the row matching `id`, returning the affected-row count
    async fn delete(&self, id: &str) -> Result<u64>;

    /// Flip the visibility flag in a single conditional statement.
    /// Returns the new value, or `None` if no row matched.
    async fn toggle_visibility(&self, id: &str) -> Result<Option<bool>>;

    /// Count mentor rows
    async fn count(&self) -> Result<u64>;
}
