mod catalog;
mod config;
mod db;
mod entities;
mod error;
mod models;
mod pagination;
mod routes;
mod seed;
mod store;
mod validation;

use std::sync::Arc;

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    store::{MovieStore, SqlMovieStore},
};

pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn MovieStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,theater=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    tracing::debug!(environment = ?config.environment, "configuration loaded");

    let db = db::connect_and_migrate(&config.database_url).await?;

    if let Some(csv) = &config.movies_csv {
        seed::seed_if_empty(&db, csv).await?;
    }

    let state =
        Arc::new(AppState { config: config.clone(), store: Arc::new(SqlMovieStore::new(db)) });

    let app = routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, prefix = %config.api_prefix, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("shutting down");
}
