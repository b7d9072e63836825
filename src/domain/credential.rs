use serde::{Deserialize, Serialize};

use crate::domain::query::QueryType;

/// One leaked-account entry returned by the search backend.
///
/// Records carry no identity; the backend may return duplicates and they are
/// displayed as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Credential {
    pub email: String,
    pub password: Option<String>,
    pub source: String,
    pub breach_date: String,
    pub exposed_data: Vec<String>,
}

/// The full result set for one executed search, held read-only until the
/// next search replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    pub query_type: QueryType,
    /// Match count as reported by the backend; the empty/results split keys
    /// off this value, not off `credentials.len()`.
    pub matches_found: usize,
    pub credentials: Vec<Credential>,
}
