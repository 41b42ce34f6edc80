//! Error types for rendering
//!
//! A missing `type` is not an error (it goes to the diagnostic sink).
//! Everything here comes from the document or from descriptor parsing.

use dom::DomError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("Descriptor parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
