//! Template rendering for scaffolded files.
//!
//! Scaffold templates are Tera templates rendered against a context built by
//! the [`crate::scaffold`] assembler. The engine holds no global state: every
//! call to [`TemplateRenderer::render_template`] uses a fresh `Tera` instance,
//! so identical contexts always produce identical output.
//!
//! # Template Syntax
//!
//! - `{{ resource.kind }}` - variable substitution
//! - `{% for import in imports %}...{% endfor %}` - iterate the sorted import table
//! - `{% if import.ident %}...{% endif %}` - conditional output
//!
//! # Errors
//!
//! Failures surface as [`TemplateError`], which converts into
//! [`crate::core::KubegenError::TemplateError`].

pub mod error;
pub mod renderer;

pub use error::TemplateError;
pub use renderer::TemplateRenderer;
pub use tera::Context as TemplateContext;
