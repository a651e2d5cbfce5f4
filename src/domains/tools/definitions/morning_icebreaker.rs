//! Morning icebreaker tool definition.
//!
//! Suggests a conversation starter for a morning stand-up meeting.

use futures::FutureExt;
use rand::Rng;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use tracing::{debug, instrument};

use super::common::{NoParams, parse_params, success_result, tool_model};

/// Icebreaker questions offered by the tool.
pub const ICEBREAKERS: [&str; 25] = [
    "朝食はパン派？ごはん派？",
    "好きな季節とその理由は？",
    "最近ハマっているものは何ですか？",
    "もし一つだけ超能力が使えるなら何を選びますか？",
    "無人島に3つだけ持っていけるとしたら？",
    "今までで一番おいしかった食べ物は？",
    "座右の銘や好きな言葉は？",
    "休日の理想の過ごし方は？",
    "今までで一番笑った出来事は？",
    "行ってみたい国や場所は？",
    "もし宝くじが当たったら何をしますか？",
    "最近感動したことは？",
    "子供の頃の夢は何でしたか？",
    "好きな映画やドラマのジャンルは？",
    "今一番欲しいものは？",
    "得意料理や好きな食べ物は？",
    "ストレス解消法は？",
    "最近買ってよかったものは？",
    "もしタイムマシンがあったら過去と未来どっちに行く？",
    "人生で一番影響を受けた人は？",
    "今までで一番頑張ったことは？",
    "理想の休日は？",
    "最近始めたことや挑戦していることは？",
    "自分の長所を一つ教えてください",
    "好きな音楽のジャンルやアーティストは？",
];

/// Morning icebreaker tool - returns one random icebreaker question.
pub struct MorningIcebreakerTool;

impl MorningIcebreakerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "morning_icebreaker";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "朝会で使えるアイスブレイクネタを提案します";

    /// Execute the tool logic.
    #[instrument]
    pub fn execute() -> CallToolResult {
        let selected = pick(&mut rand::thread_rng());
        debug!("Selected icebreaker: {}", selected);
        success_result(selected)
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

/// Pick one icebreaker uniformly at random.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ICEBREAKERS[rng.gen_range(0..ICEBREAKERS.len())]
}
