use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Form},
    HttpRequest, HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::users::{
    email::EmailService,
    resend_verification::{resend_verification as resend, ResendVerificationOutcome},
    types::{FieldErrors, ResendVerificationRequest},
};

use crate::utils::{
    base_url,
    emails::validate_recipient,
    flash::{take_flash, Flash, Redirect},
    templates::view_response,
};

const ALREADY_VERIFIED: &str = "account is already verified, please use forget password if needed";
const VERIFICATION_SENT: &str =
    "reset verification link is sent on your provided email ID please check your email";
const VERIFICATION_FAILED: &str = "reset verification failed, please try re-register";

fn resend_form(
    session: &Session,
    resend_email: &ResendVerificationRequest,
    errors: FieldErrors,
) -> HttpResponse {
    view_response(
        "users/resendVerification",
        context! {
            resend_email => resend_email,
            errors => errors,
            flash => take_flash(session),
        },
    )
}

#[tracing::instrument(name = "Showing resend verification form", skip(session))]
#[get("/resendVerification")]
pub async fn resend_verification_form(session: Session) -> HttpResponse {
    resend_form(
        &session,
        &ResendVerificationRequest::default(),
        FieldErrors::default(),
    )
}

#[tracing::instrument(
    name = "Resending verification email",
    skip(db, email_service, session, req, http_req),
    fields(user_email = %req.email)
)]
#[post("/resendVerification")]
pub async fn resend_verification(
    db: Data<DbConn>,
    email_service: Data<dyn EmailService>,
    session: Session,
    req: Form<ResendVerificationRequest>,
    http_req: HttpRequest,
) -> HttpResponse {
    let email = match req
        .validate()
        .and_then(|email| validate_recipient(&email).map(|_| email))
    {
        Ok(email) => email,
        Err(errors) => return resend_form(&session, &req, errors),
    };

    match resend(
        email,
        &base_url(&http_req),
        UserAdapter::init(&db),
        email_service.get_ref(),
    )
    .await
    {
        Ok(ResendVerificationOutcome::AlreadyVerified) => Redirect::to("/login")
            .with_flash(Flash::error(ALREADY_VERIFIED))
            .respond(&session),
        Ok(ResendVerificationOutcome::EmailSent) => Redirect::to("/registrationStatus")
            .with_flash(Flash::message(VERIFICATION_SENT))
            .respond(&session),
        Ok(ResendVerificationOutcome::UserNotFound) => Redirect::to("/registration")
            .with_flash(Flash::error(VERIFICATION_FAILED))
            .respond(&session),
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "error during resending email verification request error: {:?}", e);
            resend_form(&session, &req, FieldErrors::default())
        }
    }
}
