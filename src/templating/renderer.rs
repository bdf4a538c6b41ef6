//! Template rendering engine with Tera.
//!
//! [`TemplateRenderer`] renders a template string against a context and maps
//! Tera failures into [`TemplateError`]s. A fresh `Tera` instance is created
//! for every render, so rendering is a pure function of its inputs.

use regex::Regex;
use tera::{Context as TeraContext, Tera};

use super::error::TemplateError;

/// Renders scaffold templates with Tera.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render `template_content` against `context`.
    ///
    /// One-off templates are never auto-escaped, so generated source code is
    /// emitted verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::VariableNotFound`] when the template references
    /// a variable the context lacks, [`TemplateError::SyntaxError`] otherwise.
    pub fn render_template(
        &self,
        template_content: &str,
        context: &TeraContext,
    ) -> Result<String, TemplateError> {
        tracing::debug!("Rendering template ({} bytes)", template_content.len());

        let mut tera = Tera::default();
        let rendered = tera
            .render_str(template_content, context)
            .map_err(|e| Self::parse_tera_error(&e, context))?;

        tracing::debug!("Template rendering complete ({} bytes)", rendered.len());
        Ok(rendered)
    }

    fn parse_tera_error(error: &tera::Error, context: &TeraContext) -> TemplateError {
        let line_number = Self::extract_line_from_tera_error(error);
        let message = Self::format_tera_error(error);

        if let Some(variable) = Self::extract_variable_name(&message) {
            return TemplateError::VariableNotFound {
                variable,
                available_variables: Self::extract_available_variables(context),
                line_number,
            };
        }

        TemplateError::SyntaxError {
            message,
            line_number,
        }
    }

    /// Extract variable name from "Variable `foo` not found" message
    fn extract_variable_name(error_msg: &str) -> Option<String> {
        let re = Regex::new(r"Variable `([^`]+)` not found").ok()?;
        let caps = re.captures(error_msg)?;
        caps.get(1).map(|m| m.as_str().to_string())
    }

    /// Dotted paths of every object key in the context, sorted.
    fn extract_available_variables(context: &TeraContext) -> Vec<String> {
        fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<String>) {
            if let serde_json::Value::Object(map) = value {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    out.push(path.clone());
                    walk(&path, child, out);
                }
            }
        }

        let mut vars = Vec::new();
        walk("", &context.clone().into_json(), &mut vars);
        vars.sort();
        vars
    }

    /// Tera includes line:column information in parse error messages.
    fn extract_line_from_tera_error(error: &tera::Error) -> Option<usize> {
        let error_msg = format!("{:?}", error);
        let re = Regex::new(r"(\d+):(\d+)").ok()?;
        let caps = re.captures(&error_msg)?;
        caps.get(1)?.as_str().parse::<usize>().ok()
    }

    /// Flatten a Tera error chain into one message, dropping the internal
    /// `__tera_one_off` template name.
    pub fn format_tera_error(error: &tera::Error) -> String {
        use std::error::Error;

        let mut all_messages = vec![error.to_string()];
        let mut current_error: Option<&dyn Error> = error.source();
        while let Some(err) = current_error {
            all_messages.push(err.to_string());
            current_error = err.source();
        }

        let messages: Vec<String> = all_messages
            .into_iter()
            .map(|msg| {
                msg.replace("while rendering '__tera_one_off'", "")
                    .replace("Failed to render '__tera_one_off'", "Template rendering failed")
                    .replace("Failed to parse '__tera_one_off'", "Template syntax error")
                    .replace("'__tera_one_off'", "template")
                    .trim()
                    .to_string()
            })
            .filter(|cleaned| {
                !cleaned.is_empty()
                    && cleaned != "Template rendering failed"
                    && cleaned != "Template syntax error"
            })
            .collect();

        if messages.is_empty() {
            "Template syntax error".to_string()
        } else {
            messages.join("\n  -> ")
        }
    }
}
