use actix_session::{
    config::{PersistentSession, SessionMiddlewareBuilder},
    storage::CookieSessionStore,
    SessionMiddleware,
};
use actix_web::{cookie, web::ServiceConfig, HttpResponse};
use common::settings::types::Settings;
use web_adapters::{post_routes, user_routes};

const SESSION_COOKIE_NAME: &str = "sessionId";

/// Cookie signing/encryption key. `secret.hmac_secret` must be at least 64 bytes.
pub fn get_session_key(settings: &Settings) -> Result<cookie::Key, String> {
    cookie::Key::try_from(settings.secret.hmac_secret.as_bytes())
        .map_err(|e| format!("secret.hmac_secret cannot be used as session key: {e}"))
}

pub fn setup_session_middleware_builder(
    builder: SessionMiddlewareBuilder<CookieSessionStore>,
    settings: &Settings,
) -> SessionMiddlewareBuilder<CookieSessionStore> {
    let builder = builder
        .session_lifecycle(PersistentSession::default().session_ttl(cookie::time::Duration::days(7)))
        .cookie_name(SESSION_COOKIE_NAME.to_string());
    if settings.debug {
        builder
            .cookie_same_site(cookie::SameSite::None)
            .cookie_secure(false)
    } else {
        builder
    }
}

pub fn session_middleware(
    settings: &Settings,
    key: cookie::Key,
) -> SessionMiddleware<CookieSessionStore> {
    setup_session_middleware_builder(
        SessionMiddleware::builder(CookieSessionStore::default(), key),
        settings,
    )
    .build()
}

pub fn get_routes(cfg: &mut ServiceConfig) {
    cfg.service(health_check)
        .configure(post_routes)
        .configure(user_routes);
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json("Application is safe and healthy.")
}
