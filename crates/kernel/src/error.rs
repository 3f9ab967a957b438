//! Menu error types.

use thiserror::Error;

/// Errors raised by the menu kernel.
///
/// Missing page elements are normally tolerated (toggles no-op, the renderer
/// skips the write); `ElementNotFound` is only returned by callers that ask
/// for an element explicitly.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("invalid menu tree: {0}")]
    InvalidTree(String),

    #[error("template error")]
    Template(#[from] tera::Error),
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
