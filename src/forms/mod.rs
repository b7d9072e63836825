//! Form definitions backing the search routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Please enter an email address or domain")]
    EmptyQuery,

    #[error("Please enter a valid email address or domain")]
    InvalidQuery,
}
