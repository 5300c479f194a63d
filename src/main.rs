//! Mentors service entry point

use anyhow::Result;
use axum::Router;
use mentors_service::api::rest::routes;
use mentors_service::config::Config;
use mentors_service::domain::Service;
use mentors_service::infra::storage::{migrations::Migrator, repositories::SeaOrmMentorRepository};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let mut app = routes::register_health_route(Router::new());

    // A storage failure at startup is logged but does not halt the process;
    // the liveness probe keeps answering.
    match init_storage(&config).await {
        Ok(service) => {
            app = routes::register_routes(app, service);
        }
        Err(err) => {
            tracing::error!(error = %err, "storage initialization failed, serving health probe only");
        }
    }

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "mentors service listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connect to SQLite, run migrations, seed the reference dataset once,
/// and assemble the domain service.
async fn init_storage(config: &Config) -> Result<Arc<Service>> {
    let db = Database::connect(&config.database_url).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("mentors table ready");

    let mentors_repo = Arc::new(SeaOrmMentorRepository::new(Arc::new(db)));
    let service = Arc::new(Service::new(mentors_repo));

    let seeded = service.seed_reference_data().await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "seeded reference mentors");
    }

    Ok(service)
}
