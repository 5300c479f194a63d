//! Database migrations for the mentors service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250807_000001_create_mentors::Migration)]
    }
}

mod m20250807_000001_create_mentors {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Mentors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Mentors::Id)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Mentors::Name).string().not_null())
                        .col(ColumnDef::new(Mentors::Role).string().not_null())
                        .col(ColumnDef::new(Mentors::Company).string().not_null())
                        .col(ColumnDef::new(Mentors::ImageUrl).string().not_null())
                        .col(ColumnDef::new(Mentors::Bio).text().not_null())
                        .col(ColumnDef::new(Mentors::Topics).text().not_null())
                        .col(ColumnDef::new(Mentors::IsVisible).integer().not_null())
                        .col(ColumnDef::new(Mentors::Featured).integer().not_null())
                        .col(ColumnDef::new(Mentors::Price).string().not_null())
                        .col(ColumnDef::new(Mentors::Experience).string().not_null())
                        .col(ColumnDef::new(Mentors::Reviews).integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Mentors::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Mentors {
        Table,
        Id,
        Name,
        Role,
        Company,
        ImageUrl,
        Bio,
        Topics,
        IsVisible,
        Featured,
        Price,
        Experience,
        Reviews,
    }
}
