//! Error types for Satchel components.

use thiserror::Error;

/// Errors from item tag operations.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The reserved count tag cannot be removed
    #[error("the reserved \"count\" tag cannot be removed")]
    ReservedTag,

    /// Tag not present on the item
    #[error("tag not found: {0:?}")]
    TagNotFound(String),
}

/// Result type alias for item operations.
pub type ItemResult<T> = Result<T, ItemError>;
