use actix_web::{HttpResponse, Responder, post, web};
use chrono::Utc;
use log::error;

use crate::dto::api::{ApiError, SearchRequest, SearchResponse};
use crate::forms::search::SearchForm;
use crate::provider::{CredentialSearcher, ProviderError};

/// JSON search surface mirroring the upstream contract: validation failures
/// come back as 400 with a `detail` message, backend failures as 502.
#[post("/search")]
pub async fn api_search(
    payload: web::Json<SearchRequest>,
    provider: web::Data<dyn CredentialSearcher>,
) -> impl Responder {
    let form = SearchForm::new(payload.into_inner().query, None);

    let (query, _) = match form.parsed_query() {
        Ok(parsed) => parsed,
        Err(e) => {
            return HttpResponse::BadRequest().json(ApiError {
                detail: e.to_string(),
            });
        }
    };

    match provider.search(&query).await {
        Ok(results) => HttpResponse::Ok().json(SearchResponse {
            query: results.query,
            query_type: results.query_type,
            matches_found: results.matches_found,
            credentials: results.credentials,
            timestamp: Utc::now().to_rfc3339(),
        }),
        Err(ProviderError::Upstream { status, detail }) => {
            error!("Search backend returned {status} for {query:?}: {detail}");
            HttpResponse::BadGateway().json(ApiError { detail })
        }
        Err(e) => {
            error!("Search request for {query:?} failed: {e}");
            HttpResponse::BadGateway().json(ApiError {
                detail: "Search failed".to_string(),
            })
        }
    }
}
