//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::PromptError;
    use crate::domains::tools::ToolError;
    use super::super::transport::TransportError;

    #[test]
    fn test_domain_errors_convert() {
        let err: Error = ToolError::upstream("HTTP 500").into();
        assert_eq!(err.to_string(), "Tool error: Upstream request failed: HTTP 500");

        let err: Error = PromptError::missing_argument("title").into();
        assert!(err.to_string().contains("title"));

        let err: Error = TransportError::init("handshake failed").into();
        assert!(matches!(err, Error::Transport(_)));
    }
}
