use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use tera::Tera;

use dsec_monitor::dto::api::{ApiError, SearchRequest, SearchResponse};
use dsec_monitor::provider::CredentialSearcher;
use dsec_monitor::provider::test::TestSearchProvider;
use dsec_monitor::routes::api::api_search;
use dsec_monitor::routes::main::{health, show_faq, show_index};

fn provider_data(provider: TestSearchProvider) -> web::Data<dyn CredentialSearcher> {
    web::Data::from(Arc::new(provider) as Arc<dyn CredentialSearcher>)
}

fn tera() -> Tera {
    Tera::new("templates/**/*.html").expect("templates parse")
}

macro_rules! init_app {
    ($provider:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(tera()))
                .app_data(provider_data($provider))
                .service(web::scope("/api").service(api_search))
                .service(show_index)
                .service(show_faq)
                .service(health),
        )
        .await
    };
}

#[actix_web::test]
async fn index_renders_the_landing_page_without_a_query() {
    let app = init_app!(TestSearchProvider::with_results(5));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("search-form"));
    assert!(!body.contains("results-table"));
}

#[actix_web::test]
async fn index_renders_a_paginated_results_table() {
    let app = init_app!(TestSearchProvider::with_results(23));

    let req = test::TestRequest::get()
        .uri("/?q=user@example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("user1@example.com"));
    assert!(body.contains("Showing 1-10 of 23"));
    assert!(body.contains("exposed-tag-password"));
}

#[actix_web::test]
async fn index_honors_the_page_parameter() {
    let app = init_app!(TestSearchProvider::with_results(23));

    let req = test::TestRequest::get()
        .uri("/?q=user@example.com&page=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Showing 21-23 of 23"));
    assert!(body.contains("user21@example.com"));
}

#[actix_web::test]
async fn index_renders_the_error_state_for_invalid_queries() {
    let app = init_app!(TestSearchProvider::with_results(5));

    let req = test::TestRequest::get().uri("/?q=!!!").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Please enter a valid email address or domain"));
    assert!(!body.contains("results-table"));
}

#[actix_web::test]
async fn index_renders_the_empty_state() {
    let app = init_app!(TestSearchProvider::empty());

    let req = test::TestRequest::get()
        .uri("/?q=example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("No leaked credentials found"));
    assert!(!body.contains("results-table"));
}

#[actix_web::test]
async fn api_search_returns_the_result_payload() {
    let app = init_app!(TestSearchProvider::with_results(5));

    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(SearchRequest {
            query: "example.com".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let payload: SearchResponse = test::read_body_json(resp).await;
    assert_eq!(payload.query, "example.com");
    assert_eq!(payload.query_type.as_str(), "domain");
    assert_eq!(payload.matches_found, 5);
    assert_eq!(payload.credentials.len(), 5);
    assert!(!payload.timestamp.is_empty());
}

#[actix_web::test]
async fn api_search_rejects_invalid_queries() {
    let app = init_app!(TestSearchProvider::with_results(5));

    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(SearchRequest {
            query: "not a query".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let payload: ApiError = test::read_body_json(resp).await;
    assert_eq!(payload.detail, "Please enter a valid email address or domain");
}

#[actix_web::test]
async fn api_search_maps_backend_failures_to_bad_gateway() {
    let app = init_app!(TestSearchProvider::failing(503, "Search index offline"));

    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(SearchRequest {
            query: "example.com".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let payload: ApiError = test::read_body_json(resp).await;
    assert_eq!(payload.detail, "Search index offline");
}

#[actix_web::test]
async fn content_pages_render() {
    let app = init_app!(TestSearchProvider::with_results(5));

    let req = test::TestRequest::get().uri("/faq").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn health_reports_the_service_name() {
    let app = init_app!(TestSearchProvider::with_results(5));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let payload: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(payload["status"], "healthy");
    assert_eq!(payload["service"], "dsec-monitor");
}
