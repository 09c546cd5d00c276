//! Rendering error types.
//!
//! Page data is never validated; these errors come from the template layer
//! only.

use thiserror::Error;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("no template found among suggestions: {0}")]
    TemplateNotFound(String),
}

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;
