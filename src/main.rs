//! Bahari Hotel Server — booking and content backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use bahari_core::config::AppConfig;
use bahari_core::error::AppError;
use bahari_core::traits::{ImageStore, Mailer};

/// How often the completion sweep marks past confirmed stays as completed.
const COMPLETION_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() {
    let env = std::env::var("BAHARI_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Bahari Hotel server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = bahari_database::connection::create_pool(&config.database).await?;
    bahari_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Image store ──────────────────────────────────────
    let image_store: Arc<dyn ImageStore> =
        Arc::new(bahari_storage::LocalImageStore::new(&config.storage).await?);
    tracing::info!(root = %config.storage.data_root, "Image store ready");

    // ── Step 3: Mailer ───────────────────────────────────────────
    let mailer: Arc<dyn Mailer> = if config.email.enabled {
        Arc::new(bahari_mailer::HttpRelayMailer::new(&config.email)?)
    } else {
        tracing::info!("Email delivery disabled; outbound mail will be logged");
        Arc::new(bahari_mailer::LogMailer::new())
    };

    // ── Step 4: Application state ────────────────────────────────
    let app_state = bahari_api::state::AppState::build(config.clone(), db_pool, image_store, mailer);

    // ── Step 5: Completion sweep ─────────────────────────────────
    // Marks confirmed stays whose checkout day has passed as completed.
    let sweep_service = Arc::clone(&app_state.booking_service);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(COMPLETION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = sweep_service.complete_past_stays().await {
                tracing::warn!("Completion sweep failed: {}", e);
            }
        }
    });

    // ── Step 6: HTTP server ──────────────────────────────────────
    let app = bahari_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Bahari Hotel server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Bahari Hotel server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
