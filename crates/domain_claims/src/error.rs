//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Line item {index} not found (estimate has {len} items)")]
    LineItemNotFound { index: usize, len: usize },

    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),
}
