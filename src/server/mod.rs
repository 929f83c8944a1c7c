//! HTTP server.
//!
//! Provides:
//! - `/aws-ips` - JSON array of prefixes, filterable by `region` and `type`
//! - every other path - static files from the public directory

mod handlers;
mod types;

use std::net::SocketAddr;
use std::path::Path;

use axum::routing::get;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;

use crate::config::IP_RANGES_ROUTE;
use handlers::ranges_handler;
pub use types::AppState;

/// Builds the application router.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route(IP_RANGES_ROUTE, get(ranges_handler))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}

/// Binds `addr` and serves `app` until `shutdown` is cancelled.
pub async fn start_server(
    addr: SocketAddr,
    app: Router,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Server running on port {}", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, TcpListener};

    #[tokio::test]
    async fn test_start_server_port_binding_failure() {
        // Hold the port so the server cannot bind it
        let taken = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let addr = taken.local_addr().unwrap();

        let app = Router::new();
        let err = start_server(addr, app, CancellationToken::new())
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failed to bind server"));
        assert!(msg.contains(&addr.port().to_string()));
    }

    #[tokio::test]
    async fn test_start_server_stops_on_cancel() {
        let addr = {
            let reserved = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
            reserved.local_addr().unwrap()
        };
        let shutdown = CancellationToken::new();
        let server = tokio::spawn(start_server(addr, Router::new(), shutdown.clone()));

        shutdown.cancel();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .expect("server should stop after cancel")
            .unwrap();
        assert!(result.is_ok());
    }
}
