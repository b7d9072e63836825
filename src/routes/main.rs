use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;
use serde_json::json;
use tera::{Context, Tera};

use crate::dto::search::ResultsState;
use crate::forms::search::SearchForm;
use crate::provider::CredentialSearcher;
use crate::routes::render_template;
use crate::services::search::ResultBrowser;

#[derive(Deserialize)]
struct IndexQueryParams {
    q: Option<String>,
    page: Option<usize>,
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    provider: web::Data<dyn CredentialSearcher>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "index");

    // Without a query the landing page renders with no results section.
    if let Some(q) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        let form = SearchForm::new(q, params.page);
        let mut browser = ResultBrowser::new(provider.get_ref());

        let state = match browser.on_search_submitted(&form).await {
            Ok(view) => {
                let view = match form.page {
                    Some(page) if page > 1 => browser.on_page_requested(page),
                    _ => view,
                };
                ResultsState::from_view(view)
            }
            Err(e) => {
                error!("Search for {q:?} failed: {e}");
                ResultsState::error(e.user_message())
            }
        };

        context.insert("search_query", q);
        context.insert("results", &state);
    }

    render_template(&tera, "main/index.html", &context)
}

#[get("/features")]
pub async fn show_features(tera: web::Data<Tera>) -> impl Responder {
    content_page(&tera, "features")
}

#[get("/benefits")]
pub async fn show_benefits(tera: web::Data<Tera>) -> impl Responder {
    content_page(&tera, "benefits")
}

#[get("/horizons")]
pub async fn show_horizons(tera: web::Data<Tera>) -> impl Responder {
    content_page(&tera, "horizons")
}

#[get("/faq")]
pub async fn show_faq(tera: web::Data<Tera>) -> impl Responder {
    content_page(&tera, "faq")
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "dsec-monitor",
    }))
}

fn content_page(tera: &Tera, name: &str) -> HttpResponse {
    let mut context = Context::new();
    context.insert("current_page", name);
    render_template(tera, &format!("main/{name}.html"), &context)
}
