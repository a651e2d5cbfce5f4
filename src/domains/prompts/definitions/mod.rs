//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with its metadata, arguments and
//! template string, then registered in `registry.rs`.

use rmcp::model::PromptArgument;

pub mod poem_writer;

pub use poem_writer::PoemWriterPrompt;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// Human-friendly title shown by clients.
    const TITLE: Option<&'static str> = None;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}
