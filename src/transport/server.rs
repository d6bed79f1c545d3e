// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use super::routes::RouteTable;
use crate::errors::ServerError;
use crate::observability::messages::server::{
    BindFailed, ServerListening, ServerStopped, ShutdownRequested,
};
use crate::observability::messages::StructuredLog;

/// Bind a TCP listener, logging the failure before returning it.
pub async fn bind_listener(address: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(address).await.map_err(|source| {
        BindFailed {
            address,
            error: &source,
        }
        .log();
        ServerError::Bind { address, source }
    })
}

/// Serve `routes` on `listener` until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve(
    listener: TcpListener,
    routes: RouteTable,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let address = listener.local_addr().map_err(ServerError::Serve)?;

    ServerListening {
        address,
        route_count: routes.len(),
    }
    .log();

    let router = routes.into_router();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            ShutdownRequested {
                reason: "cancellation token triggered",
            }
            .log();
        })
        .await
        .map_err(ServerError::Serve)?;

    ServerStopped { address }.log();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let held = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = held.local_addr().unwrap();

        let result = bind_listener(address).await;
        assert!(matches!(result, Err(ServerError::Bind { address: a, .. }) if a == address));
    }

    #[tokio::test]
    async fn serve_returns_after_cancellation() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let token = CancellationToken::new();
        let handle = tokio::spawn(serve(listener, RouteTable::new(), token.clone()));

        token.cancel();
        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("server did not stop")
            .unwrap();
        assert!(result.is_ok());
    }
}
