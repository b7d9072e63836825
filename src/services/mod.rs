use thiserror::Error;

use crate::forms::FormError;
use crate::provider::ProviderError;

pub mod search;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The query was rejected before any network call was made.
    #[error("{0}")]
    Validation(#[from] FormError),

    /// The search backend failed; terminal for this attempt.
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Message fit for the error banner: validation text as-is, the backend
    /// `detail` when there is one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Provider(ProviderError::Upstream { detail, .. }) => detail.clone(),
            Self::Provider(ProviderError::Network(_)) => {
                "An error occurred while searching. Please try again.".to_string()
            }
        }
    }
}
