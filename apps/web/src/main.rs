//! # Storekeep
//!
//! Entry point: `cargo run -p storekeep-web`.

use tracing::{info, warn};

use storekeep_db::Database;
use storekeep_web::{config::WebConfig, init_tracing, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Storekeep...");

    let config = WebConfig::load()?;
    info!(
        db_path = %config.db_path.display(),
        bind_addr = %config.bind_addr,
        max_connections = config.max_connections,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;
    let app = router(AppState::new(db.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Web server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
