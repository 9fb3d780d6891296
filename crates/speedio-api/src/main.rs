//! speedio-api - HTTP API server for the speedio notes service

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use speedio_api::{build_router, ApiConfig, AppState};
use speedio_db::{Database, PoolConfig};

/// Initialize tracing.
///
/// Environment variables:
///   LOG_FORMAT  - "json" or "text" (default: "text")
///   LOG_FILE    - path to log file (optional, enables daily-rolled file logging)
///   RUST_LOG    - standard env filter
///
/// The returned guard flushes the file writer and must outlive the server.
fn init_tracing() -> Option<WorkerGuard> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let json = log_format == "json";

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "speedio_api=debug,speedio_db=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    let guard = match log_file.as_deref() {
        Some(path) => {
            let path = std::path::Path::new(path);
            let dir = path.parent().unwrap_or(std::path::Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("speedio-api.log");
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name));

            if json {
                registry
                    .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
                    .init();
            } else {
                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
            }
            Some(guard)
        }
        None => {
            if json {
                registry
                    .with(tracing_subscriber::fmt::layer().json())
                    .init();
            } else {
                registry.with(tracing_subscriber::fmt::layer()).init();
            }
            None
        }
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );
    guard
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing();

    let config = ApiConfig::from_env();
    info!(
        port = config.port,
        max_connections = config.max_connections,
        batch_mode = ?config.batch_mode,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    // An unreachable database is fatal
    info!("Connecting to database...");
    let db = Database::connect_with_config(
        &config.database_url,
        PoolConfig::new().max_connections(config.max_connections),
    )
    .await?;
    info!("Database connected");

    if config.run_migrations {
        #[cfg(feature = "migrations")]
        {
            info!("Running database migrations...");
            db.migrate().await?;
            info!("Database migrations complete");
        }
        #[cfg(not(feature = "migrations"))]
        warn!("RUN_MIGRATIONS is set but this build has no migrations feature");
    }

    let state = AppState::new(Arc::new(db.notes.clone()), config.batch_mode);
    let app = build_router(state, config.max_body_bytes);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shut down");
    Ok(())
}
