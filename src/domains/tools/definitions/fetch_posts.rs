//! Fetch posts tool definition.
//!
//! Retrieves the post list from a public JSON API and returns the first few
//! entries serialized as text.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use super::common::{NoParams, parse_params, success_result, tool_model};
use crate::core::config::{Config, ToolsConfig};
use crate::domains::tools::ToolError;

/// Maximum number of posts returned to the client.
pub const MAX_POSTS: usize = 5;

/// A post record as served by the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Payload returned by the tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// Fetch posts tool - retrieves posts from a public API.
pub struct FetchPostsTool;

impl FetchPostsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch_posts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetches a list of posts from a public API.";

    /// Build the HTTP client used for upstream requests.
    pub fn build_client(config: &ToolsConfig) -> Result<reqwest::Client, ToolError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = config.http_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build().map_err(|e| ToolError::client(e.to_string()))
    }

    /// Execute the tool logic.
    #[instrument(skip(client))]
    pub async fn execute(client: &reqwest::Client, url: &str) -> Result<CallToolResult, ToolError> {
        let posts = Self::fetch(client, url).await?;
        let upstream_count = posts.len();

        let response = PostsResponse {
            posts: first_posts(posts),
        };
        info!(
            "Returning {} of {} posts",
            response.posts.len(),
            upstream_count
        );

        let text = serde_json::to_string(&response).map_err(|e| ToolError::internal(e.to_string()))?;
        Ok(success_result(text))
    }

    /// Request the full post list from the upstream endpoint.
    async fn fetch(client: &reqwest::Client, url: &str) -> Result<Vec<Post>, ToolError> {
        let response = client.get(url).send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ToolError::upstream(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("{} returned HTTP {}", url, status);
            return Err(ToolError::upstream(format!("{} returned HTTP {}", url, status)));
        }

        response.json::<Vec<Post>>().await.map_err(|e| {
            error!("Failed to decode posts from {}: {}", url, e);
            ToolError::decode(e.to_string())
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute sharing the given HTTP client.
    pub fn create_route<S>(config: Arc<Config>, client: reqwest::Client) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let config = config.clone();
            let client = client.clone();
            async move {
                let _params: NoParams = parse_params(args).map_err(McpError::from)?;
                Self::execute(&client, &config.tools.posts_url)
                    .await
                    .map_err(McpError::from)
            }
            .boxed()
        })
    }
}

/// Keep at most [`MAX_POSTS`] posts, preserving upstream order.
pub fn first_posts(mut posts: Vec<Post>) -> Vec<Post> {
    posts.truncate(MAX_POSTS);
    posts
}
