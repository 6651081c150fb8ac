//! Main entry point for the Ralli web server
#![forbid(unsafe_code)]

use ralli_core::{Config, init_logging};
use ralli_web::build_app;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    // Load configuration
    let config_result = Config::load();
    let config = config_result.as_ref().map_or_else(|_| Config::default(), Clone::clone);

    // Initialize logging once the configured level is known
    init_logging(&config.logging)?;
    if let Err(e) = config_result {
        warn!("Failed to load config ({}), using defaults", e);
    }

    // Build the application with configuration
    let app = build_app(&config)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("Invalid server host '{}': {}", config.server.host, e))?;
    let addr = SocketAddr::new(host, config.server.port);

    let listener = TcpListener::bind(&addr).await?;

    info!("Ralli web server v{} ready", env!("CARGO_PKG_VERSION"));
    info!("Admin console:  http://{}/admin", addr);
    info!("Showcase:       http://{}/compynew", addr);
    info!("Join-game demo: http://{}/join-game-demo", addr);

    // Start the server with graceful shutdown
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
