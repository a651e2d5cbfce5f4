//! Prompt service implementation.
//!
//! The PromptService holds the prompt registry and renders prompts with
//! client-supplied arguments.

use rmcp::model::{GetPromptResult, JsonObject, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{info, instrument};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::core::config::PromptsConfig;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Configuration for the prompts domain.
    #[allow(dead_code)]
    config: PromptsConfig,

    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with the given configuration.
    pub fn new(config: PromptsConfig) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            config,
            prompts: HashMap::new(),
        };

        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        info!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts, sorted by name.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        let mut prompts: Vec<Prompt> = self
            .prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: template.title.clone(),
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect();
        prompts.sort_by(|a, b| a.name.cmp(&b.name));
        prompts
    }

    /// Get a prompt with arguments substituted.
    #[instrument(skip(self, arguments))]
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

/// Convert raw JSON prompt arguments into string values.
///
/// `null` is treated as an omitted argument; any other non-string value is rejected.
pub fn string_arguments(map: JsonObject) -> Result<HashMap<String, String>, PromptError> {
    let mut arguments = HashMap::with_capacity(map.len());
    for (key, value) in map {
        match value {
            serde_json::Value::String(s) => {
                arguments.insert(key, s);
            }
            // Explicit null counts as an omitted argument.
            serde_json::Value::Null => {}
            other => {
                return Err(PromptError::invalid_argument(
                    key,
                    format!("expected a string, got {}", other),
                ));
            }
        }
    }
    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn service() -> PromptService {
        PromptService::new(PromptsConfig::default())
    }

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn message_text(result: &GetPromptResult) -> &str {
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, PromptMessageRole::User);
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_list_prompts() {
        let prompts = service().list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "poem-writer");
        assert_eq!(prompts[0].title.as_deref(), Some("Poem Writer"));
        assert_eq!(prompts[0].description.as_deref(), Some("Write a nice haiku"));
        assert_eq!(prompts[0].arguments.as_ref().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_poem_writer_without_mood() {
        let result = service()
            .get_prompt("poem-writer", Some(args(&[("title", "Autumn Rain")])))
            .await
            .unwrap();

        assert_eq!(
            message_text(&result),
            "Write a haiku called Autumn Rain. Note that a haiku is 5 syllables followed by 7 syllables followed by 5 syllables "
        );
        assert_eq!(result.description.as_deref(), Some("Write a nice haiku"));
    }

    #[tokio::test]
    async fn test_poem_writer_with_mood() {
        let result = service()
            .get_prompt(
                "poem-writer",
                Some(args(&[("title", "Autumn Rain"), ("mood", "melancholy")])),
            )
            .await
            .unwrap();

        let text = message_text(&result);
        assert!(text.starts_with("Write a haiku with the mood melancholy called Autumn Rain."));
    }

    #[tokio::test]
    async fn test_poem_writer_empty_mood_is_omitted() {
        let result = service()
            .get_prompt(
                "poem-writer",
                Some(args(&[("title", "Dawn"), ("mood", "")])),
            )
            .await
            .unwrap();

        assert!(!message_text(&result).contains("with the mood"));
    }

    #[tokio::test]
    async fn test_poem_writer_title_is_literal() {
        let title = "{{mood}} & {{#if mood}}odd{{/if}}";
        let result = service()
            .get_prompt("poem-writer", Some(args(&[("title", title)])))
            .await
            .unwrap();

        let text = message_text(&result);
        assert!(text.contains(title));
        assert!(!text.contains("with the mood"));
    }

    #[tokio::test]
    async fn test_missing_title() {
        let result = service()
            .get_prompt("poem-writer", Some(args(&[("mood", "calm")])))
            .await;
        assert!(matches!(result, Err(PromptError::MissingArgument(ref a)) if a == "title"));

        let result = service().get_prompt("poem-writer", None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = service().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }

    #[test]
    fn test_string_arguments() {
        let mut map = JsonObject::new();
        map.insert("title".to_string(), serde_json::json!("Snow"));
        map.insert("mood".to_string(), serde_json::Value::Null);
        let converted = string_arguments(map).unwrap();
        assert_eq!(converted.get("title").map(String::as_str), Some("Snow"));
        assert!(!converted.contains_key("mood"));

        let mut map = JsonObject::new();
        map.insert("title".to_string(), serde_json::json!(42));
        assert!(matches!(
            string_arguments(map),
            Err(PromptError::InvalidArgument(_, _))
        ));
    }
}
