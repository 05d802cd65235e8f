use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::{
    config::ResponderConfig,
    error::{ServerError, ServerResult},
};

/// A responder serving in the background.
pub struct ResponderHandle {
    local_addr: SocketAddr,
    task: JoinHandle<Result<(), hyper::Error>>,
}

impl ResponderHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves until the listener fails. With a healthy socket this never returns.
    pub async fn wait(self) -> ServerResult<()> {
        match self.task.await {
            Ok(result) => result.map_err(ServerError::Serve),
            Err(e) if e.is_cancelled() => Ok(()),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }

    /// Stops accepting connections. In-flight connections are dropped.
    pub fn abort(&self) {
        self.task.abort();
    }
}

/// Binds the configured address and starts serving the route table on the
/// current tokio runtime. Each connection is driven on its own task.
pub async fn start(config: ResponderConfig) -> ServerResult<ResponderHandle> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .and_then(|listener| listener.into_std())
        .map_err(|source| ServerError::Bind { addr, source })?;

    let server = axum::Server::from_tcp(listener)?
        .serve(config.routes.into_router().into_make_service());
    let local_addr = server.local_addr();
    tracing::info!(%local_addr, "Listening for incoming connections");

    Ok(ResponderHandle {
        local_addr,
        task: tokio::spawn(server),
    })
}
