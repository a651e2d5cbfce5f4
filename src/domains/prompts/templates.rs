//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the renderer for its
//! `{{variable}}` / `{{#if variable}}...{{else}}...{{/if}}` syntax.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ELSE: &str = "{{else}}";
const END_IF: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// Human-friendly title.
    pub title: Option<String>,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: None,
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    ///
    /// - `{{variable}}` is replaced with the value of `variable`, or removed if unset
    /// - `{{#if variable}}content{{/if}}` includes content only if variable is set and non-empty
    /// - `{{#if variable}}content{{else}}alternative{{/if}}` with else support
    ///
    /// Values are inserted verbatim; placeholders inside a value are not expanded.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        render_segment(&self.template, arguments)
    }
}

/// Render one stretch of template text in a single left-to-right pass.
fn render_segment(template: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or_else(|| PromptError::template("Unclosed '{{' tag"))?;
        let tag = after_open[..end].trim();
        rest = &after_open[end + CLOSE.len()..];

        if let Some(var_name) = tag.strip_prefix("#if ") {
            let endif = rest
                .find(END_IF)
                .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;
            let block = &rest[..endif];
            rest = &rest[endif + END_IF.len()..];

            let (when_set, when_unset) = match block.find(ELSE) {
                Some(pos) => (&block[..pos], &block[pos + ELSE.len()..]),
                None => (block, ""),
            };

            let branch = if is_set(arguments, var_name.trim()) {
                when_set
            } else {
                when_unset
            };
            output.push_str(&render_segment(branch, arguments)?);
        } else if tag == "else" || tag.starts_with('/') {
            return Err(PromptError::template(format!("Unexpected tag: {}", tag)));
        } else if let Some(value) = arguments.get(tag) {
            output.push_str(value);
        }
    }

    output.push_str(rest);
    Ok(output)
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");
        let result = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_conditional_with_value() {
        let template =
            PromptTemplate::new("test", None, vec![], "Hello{{#if name}}, {{name}}{{/if}}!");
        let result = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_conditional_without_value() {
        let template =
            PromptTemplate::new("test", None, vec![], "Hello{{#if name}}, {{name}}{{/if}}!");
        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "Hello!");
    }

    #[test]
    fn test_conditional_with_empty_value() {
        let template =
            PromptTemplate::new("test", None, vec![], "Hello{{#if name}}, {{name}}{{/if}}!");
        let result = template.render(&args(&[("name", "")])).unwrap();
        assert_eq!(result, "Hello!");
    }

    #[test]
    fn test_conditional_with_else() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![],
            "Hello, {{#if name}}{{name}}{{else}}stranger{{/if}}!",
        );
        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "Hello, stranger!");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let template = PromptTemplate::new("test", None, vec![], "a{{missing}}b");
        assert_eq!(template.render(&HashMap::new()).unwrap(), "ab");
    }

    #[test]
    fn test_values_are_not_expanded() {
        let template = PromptTemplate::new("test", None, vec![], "{{a}} and {{b}}");
        let result = template
            .render(&args(&[("a", "{{b}}"), ("b", "{{#if a}}x{{/if}}")]))
            .unwrap();
        assert_eq!(result, "{{b}} and {{#if a}}x{{/if}}");
    }

    #[test]
    fn test_missing_endif_is_error() {
        let template = PromptTemplate::new("test", None, vec![], "{{#if a}}x");
        assert!(matches!(
            template.render(&HashMap::new()),
            Err(PromptError::TemplateError(_))
        ));
    }

    #[test]
    fn test_unclosed_tag_is_error() {
        let template = PromptTemplate::new("test", None, vec![], "Hello {{name");
        assert!(template.render(&HashMap::new()).is_err());
    }

    #[test]
    fn test_stray_endif_is_error() {
        let template = PromptTemplate::new("test", None, vec![], "x{{/if}}");
        assert!(template.render(&HashMap::new()).is_err());
    }
}
