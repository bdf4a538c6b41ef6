//! Structured template rendering errors
//!
//! Tera reports failures as loosely formatted strings. [`TemplateError`]
//! classifies them so the CLI can point at the offending variable or line.

use crate::core::KubegenError;

/// Template rendering failure with location details
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    VariableNotFound {
        variable: String,
        available_variables: Vec<String>,
        line_number: Option<usize>,
    },

    SyntaxError {
        message: String,
        line_number: Option<usize>,
    },
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::VariableNotFound {
                variable,
                ..
            } => {
                write!(f, "Template variable not found: '{}'", variable)
            }
            TemplateError::SyntaxError {
                message,
                ..
            } => {
                write!(f, "Template syntax error: {}", message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

impl TemplateError {
    /// Multi-line message with the line number and, for missing variables,
    /// what the context does provide.
    pub fn format_with_context(&self) -> String {
        let mut msg = self.to_string();
        let line_number = match self {
            TemplateError::VariableNotFound {
                line_number,
                ..
            }
            | TemplateError::SyntaxError {
                line_number,
                ..
            } => *line_number,
        };

        if let Some(line) = line_number {
            msg.push_str(&format!("\nLine: {}", line));
        }

        if let TemplateError::VariableNotFound {
            available_variables,
            ..
        } = self
        {
            if !available_variables.is_empty() {
                msg.push_str("\nAvailable variables:");
                for var in available_variables {
                    msg.push_str(&format!("\n  - {}", var));
                }
            }
        }

        msg
    }
}

impl From<TemplateError> for KubegenError {
    fn from(error: TemplateError) -> Self {
        KubegenError::TemplateError {
            message: error.format_with_context(),
        }
    }
}
