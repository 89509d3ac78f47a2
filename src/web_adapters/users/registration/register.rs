use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Form},
    HttpRequest, HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{
    users::{
        email::EmailService,
        register::{register_user, NewUser},
        types::{FieldErrors, RegistrationRequest},
    },
    UseCaseError,
};

use crate::utils::{
    auth::{password::hash, tokens::generate_verification_token},
    base_url,
    emails::validate_recipient,
    flash::{take_flash, Flash, Redirect},
    templates::view_response,
};

const REGISTRATION_SUCCESSFUL: &str =
    "Registration is successful, please check your email to verify your account";
const REGISTRATION_FAILED: &str = "Registration failed, please try again";

fn registration_page(
    flash: Flash,
    registration: &RegistrationRequest,
    errors: FieldErrors,
) -> HttpResponse {
    view_response(
        "users/registration",
        context! {
            registration => registration,
            errors => errors,
            flash => flash,
        },
    )
}

#[tracing::instrument(name = "Showing registration form", skip(session))]
#[get("/registration")]
pub async fn registration_form(session: Session) -> HttpResponse {
    registration_page(
        take_flash(&session),
        &RegistrationRequest::default(),
        FieldErrors::default(),
    )
}

#[tracing::instrument(
    name = "Adding a new user",
    skip(db, email_service, session, req, http_req),
    fields(user_email = %req.email, user_name = %req.name)
)]
#[post("/registration")]
pub async fn register(
    db: Data<DbConn>,
    email_service: Data<dyn EmailService>,
    session: Session,
    req: Form<RegistrationRequest>,
    http_req: HttpRequest,
) -> HttpResponse {
    let valid = match req
        .validate()
        .and_then(|valid| validate_recipient(&valid.email).map(|_| valid))
    {
        Ok(valid) => valid,
        Err(errors) => return registration_page(Flash::default(), &req, errors),
    };
    let hashed_password = match hash(valid.password.as_bytes()) {
        Ok(hashed_password) => hashed_password,
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to hash password: {:#?}", e);
            return registration_page(Flash::error(REGISTRATION_FAILED), &req, FieldErrors::default());
        }
    };

    match register_user(
        NewUser {
            name: valid.name,
            email: valid.email,
            hashed_password,
            verification_token: generate_verification_token(),
        },
        &base_url(&http_req),
        UserAdapter::init(&db),
        email_service.get_ref(),
    )
    .await
    {
        Ok(_) => Redirect::to("/registrationStatus")
            .with_flash(Flash::message(REGISTRATION_SUCCESSFUL))
            .respond(&session),
        Err(UseCaseError::Conflict(message)) => {
            let mut errors = FieldErrors::default();
            errors.add("email", &message);
            registration_page(Flash::default(), &req, errors)
        }
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "error during registration: {:?}", e);
            registration_page(Flash::error(REGISTRATION_FAILED), &req, FieldErrors::default())
        }
    }
}
