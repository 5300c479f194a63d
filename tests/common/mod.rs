//! Common test utilities - in-memory repository double and sample data

use anyhow::Result;
use async_trait::async_trait;
use mentors_service::contract::{Mentor, MentorDraft};
use mentors_service::domain::repository::MentorRepository;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory mentor repository preserving insertion order
#[derive(Clone, Default)]
pub struct MockMentorRepo {
    data: Arc<RwLock<Vec<Mentor>>>,
}

impl MockMentorRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub fn row_count(&self) -> usize {
        self.data.read().len()
    }

    /// Copy of the stored rows for direct assertions
    pub fn snapshot(&self) -> Vec<Mentor> {
        self.data.read().clone()
    }
}

#[async_trait]
impl MentorRepository for MockMentorRepo {
    async fn insert(&self, mentor: &Mentor) -> Result<Mentor> {
        self.data.write().push(mentor.clone());
        Ok(mentor.clone())
    }

    async fn list_all(&self) -> Result<Vec<Mentor>> {
        Ok(self.data.read().clone())
    }

    async fn update(&self, mentor: &Mentor) -> Result<u64> {
        let mut data = self.data.write();
        match data.iter_mut().find(|m| m.id == mentor.id) {
            Some(slot) => {
                *slot = mentor.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64> {
        let mut data = self.data.write();
        let before = data.len();
        data.retain(|m| m.id != id);
        Ok((before - data.len()) as u64)
    }

    async fn toggle_visibility(&self, id: &str) -> Result<Option<bool>> {
        let mut data = self.data.write();
        match data.iter_mut().find(|m| m.id == id) {
            Some(mentor) => {
                mentor.is_visible = !mentor.is_visible;
                Ok(Some(mentor.is_visible))
            }
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.data.read().len() as u64)
    }
}

/// A complete draft with two topics, visible and not featured
pub fn sample_draft() -> MentorDraft {
    MentorDraft {
        name: "A".to_string(),
        role: "Staff Engineer".to_string(),
        company: "Acme".to_string(),
        image_url: "https://example.com/a.png".to_string(),
        bio: "Distributed systems mentor".to_string(),
        topics: vec!["x".to_string(), "y".to_string()],
        is_visible: true,
        featured: false,
        price: "Free".to_string(),
        experience: "7 years".to_string(),
        reviews: 12,
    }
}
