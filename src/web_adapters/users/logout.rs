use actix_session::Session;
use actix_web::{post, HttpResponse};

use crate::utils::{
    auth::session::get_user_id,
    flash::{Flash, Redirect},
};

#[tracing::instrument(name = "Log out user", skip(session))]
#[post("/logout")]
pub async fn log_out(session: Session) -> HttpResponse {
    match get_user_id(&session) {
        Ok(Some(user_id)) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Logging out user {}.", user_id)
        }
        Ok(None) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Log out requested without a user in the session.")
        }
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::WARN, "Failed to read user from session: {}", e)
        }
    }
    // `purge` would drop the flash inserted below.
    session.clear();
    session.renew();
    Redirect::to("/login")
        .with_flash(Flash::message("You have been logged out"))
        .respond(&session)
}
