//! UDM agenda tool definition.
//!
//! The agenda lookup against Jira is not implemented. The tool hands the
//! calling agent a fixed set of instructions for querying the tracker itself,
//! together with a description of the ranking it should apply.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, Tool},
};
use serde::Serialize;
use tracing::{error, info, instrument};

use super::common::{NoParams, parse_params, tool_model};
use crate::domains::tools::ToolError;

/// Human-readable instructions returned as text content.
pub const INSTRUCTIONS: &str = "\
Retrieving the top UDM agendas is not implemented by this server.
Follow these steps with your Jira/Atlassian tools instead:

1. Search Jira with the JQL query:
   project = UDM AND statusCategory != Done ORDER BY priority DESC, updated DESC
2. Collect key, summary, priority, duedate, updated and watchCount for each issue.
3. Rank the issues using the scoring procedure described in the structured content.
4. Present the five highest-ranked issues as the agenda, one line per issue:
   <key> <summary> (priority, due date).";

/// Ordered steps mirroring [`INSTRUCTIONS`].
const STEPS: [&str; 4] = [
    "Search Jira with JQL: project = UDM AND statusCategory != Done ORDER BY priority DESC, updated DESC",
    "Collect key, summary, priority, duedate, updated and watchCount for each issue",
    "Rank the issues using the scoring procedure",
    "Present the five highest-ranked issues as the agenda",
];

/// Structured payload describing what the caller should do.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaInstructions {
    pub status: &'static str,
    pub message: &'static str,
    pub project: &'static str,
    pub steps: Vec<&'static str>,
    pub scoring: ScoringProcedure,
}

/// The ranking the caller is asked to apply. Never computed here.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringProcedure {
    pub implemented: bool,
    pub description: &'static str,
    pub criteria: Vec<ScoringCriterion>,
    pub top_n: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringCriterion {
    pub field: &'static str,
    pub weight: f64,
    pub rule: &'static str,
}

/// UDM agenda tool - returns instructions, performs no query.
pub struct UdmAgendasTool;

impl UdmAgendasTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_top_udm_agendas";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns instructions for retrieving the top UDM agendas from Jira. The query and scoring are not implemented; follow the returned steps with your Atlassian tools.";

    /// Execute the tool logic.
    #[instrument]
    pub fn execute() -> CallToolResult {
        info!("Returning UDM agenda instructions (not implemented)");
        let payload = serde_json::to_value(instructions())
            .map_err(|e| ToolError::internal(format!("Failed to build instructions: {}", e)));
        respond(payload)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute for this tool.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            async move {
                let _params: NoParams = parse_params(args).map_err(McpError::from)?;
                Ok(Self::execute())
            }
            .boxed()
        })
    }
}

/// The fixed instruction payload.
pub fn instructions() -> AgendaInstructions {
    AgendaInstructions {
        status: "not_implemented",
        message: "Agenda retrieval and scoring are not implemented. Follow the steps below.",
        project: "UDM",
        steps: STEPS.to_vec(),
        scoring: ScoringProcedure {
            implemented: false,
            description: "Weighted sum of the criteria below, each normalised to 0..1; higher scores first.",
            criteria: vec![
                ScoringCriterion {
                    field: "priority",
                    weight: 0.4,
                    rule: "Highest=1.0, High=0.75, Medium=0.5, Low=0.25, Lowest=0.0",
                },
                ScoringCriterion {
                    field: "duedate",
                    weight: 0.3,
                    rule: "Overdue=1.0, decreasing linearly to 0.0 at 30 days out; no due date=0.0",
                },
                ScoringCriterion {
                    field: "updated",
                    weight: 0.2,
                    rule: "Updated today=1.0, decreasing linearly to 0.0 at 14 days",
                },
                ScoringCriterion {
                    field: "watchCount",
                    weight: 0.1,
                    rule: "Watchers divided by the highest watcher count in the result set",
                },
            ],
            top_n: 5,
        },
    }
}

/// Turn the guarded payload into a tool result.
///
/// Failures are reported as a tool-level error with `success: false`.
fn respond(payload: Result<serde_json::Value, ToolError>) -> CallToolResult {
    match payload {
        Ok(value) => {
            let mut result = CallToolResult::success(vec![Content::text(INSTRUCTIONS)]);
            result.structured_content = Some(value);
            result
        }
        Err(e) => {
            error!("get_top_udm_agendas failed: {}", e);
            let mut result = CallToolResult::error(vec![Content::text(e.to_string())]);
            result.structured_content = Some(serde_json::json!({
                "success": false,
                "error": e.to_string(),
            }));
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::first_text;

    #[test]
    fn test_execute_returns_instructions() {
        let result = UdmAgendasTool::execute();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(first_text(&result), INSTRUCTIONS);

        let structured = result.structured_content.expect("structured content");
        assert_eq!(structured["status"], "not_implemented");
        assert_eq!(structured["project"], "UDM");
        assert_eq!(structured["scoring"]["implemented"], false);
        assert_eq!(structured["steps"].as_array().unwrap().len(), STEPS.len());
    }

    #[test]
    fn test_execute_is_idempotent() {
        let first = UdmAgendasTool::execute();
        let second = UdmAgendasTool::execute();
        assert_eq!(first_text(&first), first_text(&second));
        assert_eq!(first.structured_content, second.structured_content);
    }

    #[test]
    fn test_scoring_weights_sum_to_one() {
        let total: f64 = instructions()
            .scoring
            .criteria
            .iter()
            .map(|c| c.weight)
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_failure_is_reported_as_structured_error() {
        let result = respond(Err(ToolError::internal("boom")));
        assert_eq!(result.is_error, Some(true));

        let structured = result.structured_content.expect("structured content");
        assert_eq!(structured["success"], false);
        assert!(structured["error"].as_str().unwrap().contains("boom"));
    }
}
