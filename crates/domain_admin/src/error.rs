//! Administration domain errors

use thiserror::Error;

/// Errors that can occur in the administration domain
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Unknown admin list: {0}")]
    UnknownList(String),
}
