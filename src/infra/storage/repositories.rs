//! SeaORM repository implementation

use crate::contract::Mentor;
use crate::domain::repository::MentorRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, sea_query::ExprTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter,
};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmMentorRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmMentorRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MentorRepository for SeaOrmMentorRepository {
    async fn insert(&self, mentor: &Mentor) -> Result<Mentor> {
        let active: entity::ActiveModel = mentor.into();

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        result.try_into()
    }

    async fn list_all(&self) -> Result<Vec<Mentor>> {
        // no ORDER BY, row order is unspecified
        let results = entity::Entity::find().all(&*self.db).await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn update(&self, mentor: &Mentor) -> Result<u64> {
        let mut active: entity::ActiveModel = mentor.into();
        // the id is addressed by the filter, never rewritten
        active.id = NotSet;

        let result = entity::Entity::update_many()
            .set(active)
            .filter(entity::Column::Id.eq(&mentor.id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: &str) -> Result<u64> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn toggle_visibility(&self, id: &str) -> Result<Option<bool>> {
        // negate server-side in one statement: is_visible = 1 - is_visible
        let result = entity::Entity::update_many()
            .col_expr(
                entity::Column::IsVisible,
                Expr::val(1).sub(Expr::col(entity::Column::IsVisible)),
            )
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let row = entity::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(row.map(|m| m.is_visible != 0))
    }

    async fn count(&self) -> Result<u64> {
        Ok(entity::Entity::find().count(&*self.db).await?)
    }
}
