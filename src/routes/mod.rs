use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use log::error;
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Renders a Tera template to an HTML response, degrading to a 500 when the
/// template fails.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
