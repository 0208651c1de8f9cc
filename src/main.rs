//! Nutriplan backend entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use nutriplan::adapters::auth::JwtIdentityProvider;
use nutriplan::adapters::http::entitlement::EntitlementAppState;
use nutriplan::adapters::http::webhook::WebhookAppState;
use nutriplan::adapters::http::api_router;
use nutriplan::adapters::notify::TracingNotifier;
use nutriplan::adapters::postgres::PostgresEntitlementStore;
use nutriplan::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    let store = Arc::new(PostgresEntitlementStore::new(pool));
    let identity = Arc::new(JwtIdentityProvider::new(&config.auth.session_secret));
    let notifier = Arc::new(TracingNotifier);

    let mut app = api_router(
        WebhookAppState {
            store: store.clone(),
        },
        EntitlementAppState {
            identity,
            store,
            notifier,
            destinations: config.gate.destinations(),
        },
    )
    .layer(TraceLayer::new_for_http())
    .layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "nutriplan backend listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
