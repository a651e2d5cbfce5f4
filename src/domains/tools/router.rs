//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{FetchPostsTool, MorningIcebreakerTool, UdmAgendasTool};

/// Build the tool router with all registered tools.
///
/// `client` is shared by every tool that performs outbound HTTP requests.
pub fn build_tool_router<S>(config: Arc<Config>, client: reqwest::Client) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(FetchPostsTool::create_route(config, client))
        .with_route(MorningIcebreakerTool::create_route())
        .with_route(UdmAgendasTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_router() -> ToolRouter<TestServer> {
        build_tool_router(Arc::new(Config::default()), reqwest::Client::new())
    }

    #[test]
    fn test_build_router() {
        let tools = test_router().list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"fetch_posts"));
        assert!(names.contains(&"morning_icebreaker"));
        assert!(names.contains(&"get_top_udm_agendas"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router_tools = test_router().list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_every_tool_takes_an_empty_object() {
        for tool in test_router().list_all() {
            assert_eq!(
                tool.input_schema.get("type").and_then(|v| v.as_str()),
                Some("object"),
                "{} should accept an object",
                tool.name
            );
        }
    }
}
