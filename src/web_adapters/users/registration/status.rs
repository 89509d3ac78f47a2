use actix_session::Session;
use actix_web::{get, HttpResponse};
use minijinja::context;
use use_cases::users::types::FieldErrors;

use crate::utils::{flash::take_flash, templates::view_response};

#[tracing::instrument(name = "Showing registration status", skip(session))]
#[get("/registrationStatus")]
pub async fn registration_status(session: Session) -> HttpResponse {
    view_response(
        "users/registrationStatus",
        context! { flash => take_flash(&session), errors => FieldErrors::default() },
    )
}
