use actix_web::{http::header::ContentType, HttpResponse};
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;

use crate::utils::response_500;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("posts.html", include_str!("../../../templates/posts.html")),
    (
        "users/login.html",
        include_str!("../../../templates/users/login.html"),
    ),
    (
        "users/registration.html",
        include_str!("../../../templates/users/registration.html"),
    ),
    (
        "users/registrationStatus.html",
        include_str!("../../../templates/users/registrationStatus.html"),
    ),
    (
        "users/emailVerification.html",
        include_str!("../../../templates/users/emailVerification.html"),
    ),
    (
        "users/resendVerification.html",
        include_str!("../../../templates/users/resendVerification.html"),
    ),
    (
        "email/verify-email.html",
        include_str!("../../../templates/email/verify-email.html"),
    ),
    (
        "email/verify-email.txt",
        include_str!("../../../templates/email/verify-email.txt"),
    ),
];

pub static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_loader(|name| {
        Ok(TEMPLATES
            .iter()
            .find(|(template_name, _)| *template_name == name)
            .map(|(_, source)| source.to_string()))
    });
    env
});

/// Renders `{view}.html`.
pub fn render_view(view: &str, ctx: Value) -> Result<String, minijinja::Error> {
    ENV.get_template(&format!("{view}.html"))?.render(ctx)
}

pub fn view_response(view: &str, ctx: Value) -> HttpResponse {
    match render_view(view, ctx) {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => response_500(e),
    }
}
