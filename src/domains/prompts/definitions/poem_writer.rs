//! Poem writer prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Asks the model for a haiku with a given title and optional mood.
pub struct PoemWriterPrompt;

impl PromptDefinition for PoemWriterPrompt {
    const NAME: &'static str = "poem-writer";
    const TITLE: Option<&'static str> = Some("Poem Writer");
    const DESCRIPTION: &'static str = "Write a nice haiku";

    fn template() -> &'static str {
        "Write a haiku{{#if mood}} with the mood {{mood}}{{/if}} called {{title}}. \
         Note that a haiku is 5 syllables followed by 7 syllables followed by 5 syllables "
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "title".to_string(),
                title: None,
                description: Some("The title of the haiku".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "mood".to_string(),
                title: None,
                description: Some("The mood the haiku should convey".to_string()),
                required: Some(false),
            },
        ]
    }
}
