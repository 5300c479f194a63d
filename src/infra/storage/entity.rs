//! SeaORM entity for the mentors table

use sea_orm::entity::prelude::*;

/// Mentors table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mentors")]
pub struct Model {
    /// Mentor identifier (primary key, application-generated)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    pub role: String,

    pub company: String,

    pub image_url: String,

    pub bio: String,

    /// Topics as a JSON array string
    pub topics: String,

    /// Visibility flag, 0 or 1
    pub is_visible: i32,

    /// Featured flag, 0 or 1
    pub featured: i32,

    pub price: String,

    pub experience: String,

    pub reviews: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
