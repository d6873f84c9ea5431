//! Advisory portal API server.
//!
//! Serves client lifecycle status to the role dashboards and receives
//! e-signature webhooks.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use advisory_portal::adapters::http::{api_router, ClientStatusAppState, SignatureWebhookAppState};
use advisory_portal::adapters::{
    InMemoryClientStore, PostgresClientReader, PostgresSignatureStatusWriter,
};
use advisory_portal::config::{AppConfig, ServerConfig};
use advisory_portal::domain::esignature::SignatureWebhookVerifier;
use advisory_portal::domain::lifecycle::{StatusPresenter, StatusTable};
use advisory_portal::ports::{ClientRecordReader, SignatureStatusWriter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let (client_reader, status_writer) = build_storage(&config).await?;

    let presentation_mode = config.presentation_mode();
    tracing::info!(mode = ?presentation_mode, "Status presentation configured");
    let presenter: Arc<dyn StatusPresenter> = Arc::new(StatusTable::new(presentation_mode));

    let client_status = ClientStatusAppState::new(client_reader, presenter)
        .with_verbose_errors(config.features.verbose_errors);
    let esignature = SignatureWebhookAppState {
        verifier: Arc::new(SignatureWebhookVerifier::new(
            config.esignature.webhook_secret.clone(),
        )),
        status_writer,
        signature_header: config.esignature.signature_header.clone(),
    };

    let mut app = api_router(client_status, esignature)
        .layer(TimeoutLayer::new(config.server.request_timeout()));
    if let Some(cors) = cors_layer(&config.server) {
        app = app.layer(cors);
    }
    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Advisory portal listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

type Storage = (Arc<dyn ClientRecordReader>, Arc<dyn SignatureStatusWriter>);

async fn build_storage(config: &AppConfig) -> Result<Storage, Box<dyn std::error::Error>> {
    let Some(url) = config.database.connection_url() else {
        tracing::warn!("No database URL configured, using the in-memory client store");
        let store = Arc::new(InMemoryClientStore::new());
        let reader: Arc<dyn ClientRecordReader> = store.clone();
        let writer: Arc<dyn SignatureStatusWriter> = store;
        return Ok((reader, writer));
    };

    let pool_config = &config.database.pool;
    let pool = PgPoolOptions::new()
        .min_connections(pool_config.min_connections)
        .max_connections(pool_config.max_connections)
        .acquire_timeout(pool_config.acquire_timeout())
        .idle_timeout(pool_config.idle_timeout())
        .max_lifetime(pool_config.max_lifetime())
        .connect(url)
        .await?;
    tracing::info!(max_connections = pool_config.max_connections, "Connected to PostgreSQL");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let reader: Arc<dyn ClientRecordReader> = Arc::new(PostgresClientReader::new(pool.clone()));
    let writer: Arc<dyn SignatureStatusWriter> = Arc::new(PostgresSignatureStatusWriter::new(pool));
    Ok((reader, writer))
}

/// CORS for the dashboards. Without configured origins, development allows
/// any origin and production adds no CORS headers.
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if !origins.is_empty() {
        Some(base.allow_origin(origins))
    } else if server.is_production() {
        None
    } else {
        Some(base.allow_origin(Any))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
