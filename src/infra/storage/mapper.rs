//! Entity to model mappers
//!
//! Conversions between the storage row shape (text-serialized topics,
//! integer-encoded flags) and the contract model.

use crate::contract::Mentor;
use super::entity;
use anyhow::Context;

impl TryFrom<entity::Model> for Mentor {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let topics: Vec<String> = serde_json::from_str(&entity.topics)
            .with_context(|| format!("malformed topics payload for mentor '{}'", entity.id))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            company: entity.company,
            image_url: entity.image_url,
            bio: entity.bio,
            topics,
            is_visible: entity.is_visible != 0,
            featured: entity.featured != 0,
            price: entity.price,
            experience: entity.experience,
            reviews: entity.reviews,
        })
    }
}

impl From<&Mentor> for entity::ActiveModel {
    fn from(model: &Mentor) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id.clone()),
            name: Set(model.name.clone()),
            role: Set(model.role.clone()),
            company: Set(model.company.clone()),
            image_url: Set(model.image_url.clone()),
            bio: Set(model.bio.clone()),
            // serializing a Vec<String> cannot fail
            topics: Set(serde_json::to_string(&model.topics).unwrap_or_else(|_| "[]".to_string())),
            is_visible: Set(i32::from(model.is_visible)),
            featured: Set(i32::from(model.featured)),
            price: Set(model.price.clone()),
            experience: Set(model.experience.clone()),
            reviews: Set(model.reviews),
        }
    }
}
