//! Seam to the external credential-search backend.
//!
//! The backend itself is out of scope; this module only pins down the wire
//! contract and hides the transport behind [`CredentialSearcher`] so that
//! services and routes can be exercised against a canned provider.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::credential::SearchResults;

pub mod http;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backend answered with a non-2xx status and (usually) a `detail`
    /// message explaining why.
    #[error("search backend returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("search request failed: {0}")]
    Network(#[from] reqwest::Error),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// A single fire-and-forget search exchange: one request, one response, no
/// retry and no cancellation. Implementations must not buffer state between
/// calls.
#[async_trait]
pub trait CredentialSearcher: Send + Sync {
    async fn search(&self, query: &str) -> ProviderResult<SearchResults>;
}
