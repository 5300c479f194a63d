//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{Mentor, MentorDraft};

impl From<Mentor> for MentorDto {
    fn from(mentor: Mentor) -> Self {
        Self {
            id: mentor.id,
            name: mentor.name,
            role: mentor.role,
            company: mentor.company,
            image_url: mentor.image_url,
            bio: mentor.bio,
            topics: mentor.topics,
            is_visible: mentor.is_visible,
            featured: mentor.featured,
            price: mentor.price,
            experience: mentor.experience,
            reviews: mentor.reviews,
        }
    }
}

impl From<UpsertMentorRequest> for MentorDraft {
    fn from(req: UpsertMentorRequest) -> Self {
        Self {
            name: req.name,
            role: req.role,
            company: req.company,
            image_url: req.image_url,
            bio: req.bio,
            topics: req.topics,
            is_visible: req.is_visible,
            featured: req.featured,
            price: req.price,
            experience: req.experience,
            reviews: req.reviews,
        }
    }
}
