use std::fmt::Debug;

use actix_web::{http::header::ContentType, HttpRequest, HttpResponse};
use tracing::{event, Level};

pub mod auth;
pub mod emails;
pub mod flash;
pub mod templates;

const INTERNAL_SERVER_ERROR_PAGE: &str = "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Error - TechBuzz</title></head><body><h2>Something went wrong</h2><p>Some unexpected error happened. Please try again later.</p></body></html>";

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    let body = templates::render_view(
        "error",
        minijinja::context! { flash => flash::Flash::default() },
    )
    .unwrap_or_else(|_| INTERNAL_SERVER_ERROR_PAGE.to_string());
    HttpResponse::InternalServerError()
        .content_type(ContentType::html())
        .body(body)
}

/// Scheme and authority the request came in on, e.g. `https://techbuzz.dev:8080`.
pub fn base_url(req: &HttpRequest) -> String {
    let connection_info = req.connection_info();
    format!("{}://{}", connection_info.scheme(), connection_info.host())
}
