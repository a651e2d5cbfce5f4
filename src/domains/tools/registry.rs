//! Tool Registry - central list of all tools.
//!
//! The registry is the single source of truth for tool metadata. The router
//! in `router.rs` must expose exactly the tools listed here.

use rmcp::model::Tool;

use super::definitions::{FetchPostsTool, MorningIcebreakerTool, UdmAgendasTool};

/// Tool registry - names and metadata of every registered tool.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            FetchPostsTool::NAME,
            MorningIcebreakerTool::NAME,
            UdmAgendasTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            FetchPostsTool::to_tool(),
            MorningIcebreakerTool::to_tool(),
            UdmAgendasTool::to_tool(),
        ]
    }
}
