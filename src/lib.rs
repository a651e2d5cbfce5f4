//! Prompt MCP Server Library
//!
//! A Model Context Protocol (MCP) server demonstrating how tools and prompts
//! are registered with `rmcp`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the protocol handler, and transports
//! - **domains**: the callbacks exposed to clients
//!   - **tools**: `fetch_posts`, `morning_icebreaker`, `get_top_udm_agendas`
//!   - **prompts**: `poem-writer`
//!
//! # Example
//!
//! ```rust,no_run
//! use prompt_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
