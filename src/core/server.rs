//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools and prompts domains.
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and routed through the ToolRouter built in `domains/tools/router.rs`.
//! Adding a new tool does not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    prompts::{PromptService, string_arguments},
    tools::{build_tool_router, definitions::FetchPostsTool},
};

/// Instructions advertised to clients during initialization.
const INSTRUCTIONS: &str = "Demo MCP server. Tools: fetch_posts (first five posts from a public API), \
     morning_icebreaker (a random stand-up icebreaker question), get_top_udm_agendas \
     (instructions only, not implemented). Prompt: poem-writer (haiku with a title and optional mood).";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the shared HTTP client cannot be built.
    pub fn new(config: Config) -> super::Result<Self> {
        let config = Arc::new(config);

        let client = FetchPostsTool::build_client(&config.tools)?;
        let prompt_service = Arc::new(PromptService::new(config.prompts.clone()));

        Ok(Self {
            tool_router: build_tool_router::<Self>(config.clone(), client),
            config,
            prompt_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Names of all routed tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request
            .arguments
            .map(string_arguments)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
