//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP sockets. Every accepted connection
//! runs its own MCP session on a clone of the server handler.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the listener and serve connections until the process exits.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);
        Self::accept_loop(listener, server).await
    }

    async fn accept_loop(listener: TcpListener, server: McpServer) -> TransportResult<()> {
        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                    }
                    tokio::spawn(serve_connection(server.clone(), stream, peer_addr));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                }
            }
        }
    }
}

/// Run one MCP session over an accepted connection.
#[instrument(skip(server, stream))]
async fn serve_connection(server: McpServer, stream: TcpStream, peer_addr: SocketAddr) {
    let service = match server.serve(stream).await {
        Ok(service) => service,
        Err(e) => {
            warn!("Failed to initialize session: {}", e);
            return;
        }
    };
    info!("Client connected");

    match service.waiting().await {
        Ok(reason) => info!("Client disconnected: {:?}", reason),
        Err(e) => warn!("Session ended with error: {}", e),
    }
}
