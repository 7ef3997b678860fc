//! Server entry point: connects to PostgreSQL, ensures the schema, serves the catalogue.

use movie_service::{ensure_schema, movie_routes, seed_token, AppState, OmdbClient, PgStore, Settings, Views};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("movie_service=info".parse()?))
        .init();

    let settings = Settings::from_env()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    ensure_schema(&pool).await?;
    if let Some(token) = &settings.seed_token {
        seed_token(&pool, token).await?;
    }

    let rating = OmdbClient::new(settings.rating_url.clone(), settings.api_key.clone())?;
    let state = AppState::new(
        Arc::new(PgStore::new(pool)),
        Arc::new(rating),
        Views::new(settings.template_dir.clone()),
    );

    let app = movie_routes(state);

    let listener = TcpListener::bind(settings.addr).await?;
    tracing::info!("Server started at http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Interrupted by user!");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
}
