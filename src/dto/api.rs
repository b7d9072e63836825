//! Wire types of the search exchange.
//!
//! The same shapes are used in both directions: decoded from the upstream
//! backend by the provider, and served verbatim by `POST /api/search`.

use serde::{Deserialize, Serialize};

use crate::domain::credential::Credential;
use crate::domain::query::QueryType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub query_type: QueryType,
    pub matches_found: usize,
    pub credentials: Vec<Credential>,
    pub timestamp: String,
}

/// Error body carried by non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: String,
}
