use async_trait::async_trait;

use crate::domain::credential::SearchResults;
use crate::dto::api::{ApiError, SearchRequest, SearchResponse};
use crate::provider::{CredentialSearcher, ProviderError, ProviderResult};

/// Production provider: posts `{"query": ...}` to the configured search
/// endpoint and decodes the JSON response.
#[derive(Clone)]
pub struct HttpSearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CredentialSearcher for HttpSearchClient {
    async fn search(&self, query: &str) -> ProviderResult<SearchResults> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&SearchRequest {
                query: query.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiError>()
                .await
                .map(|e| e.detail)
                .unwrap_or_else(|_| "Search failed".to_string());
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let payload = response.json::<SearchResponse>().await?;

        Ok(SearchResults {
            query: payload.query,
            query_type: payload.query_type,
            matches_found: payload.matches_found,
            credentials: payload.credentials,
        })
    }
}
