//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default endpoint queried by the `fetch_posts` tool.
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Endpoint returning a JSON array of posts.
    pub posts_url: String,

    /// Optional timeout for outbound HTTP requests, in seconds.
    /// `None` means the request waits as long as the peer keeps the connection open.
    pub http_timeout_secs: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            http_timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "prompt-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            prompts: PromptsConfig::default(),
            tools: ToolsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_POSTS_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_POSTS_URL") {
            info!("Posts endpoint overridden: {}", url);
            config.tools.posts_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_HTTP_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => config.tools.http_timeout_secs = Some(secs),
                Err(_) => warn!(
                    "Ignoring invalid MCP_HTTP_TIMEOUT_SECS value '{}', requests will not time out",
                    timeout
                ),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}
