use actix_session::{Session, SessionInsertError};
use actix_web::{
    get, post,
    web::{Data, Form},
    HttpResponse,
};
use db_adapters::user_adapter::{UserAdapter, UserQuery};
use minijinja::context;
use sea_orm::DbConn;
use use_cases::users::types::{FieldErrors, LoginRequest};

use crate::utils::{
    auth::{password::verify_password, session::USER_ID_KEY},
    flash::{take_flash, Flash, Redirect},
    response_500,
    templates::view_response,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const NOT_VERIFIED: &str = "Please verify your email before logging in";

fn login_page(flash: Flash, login: &LoginRequest, errors: FieldErrors) -> HttpResponse {
    view_response(
        "users/login",
        context! { login => login, errors => errors, flash => flash },
    )
}

#[tracing::instrument(name = "Showing login form", skip(session))]
#[get("/login")]
pub async fn login_form(session: Session) -> HttpResponse {
    login_page(
        take_flash(&session),
        &LoginRequest::default(),
        FieldErrors::default(),
    )
}

#[tracing::instrument(name = "Logging a user in", skip(db, req, session), fields(user_email = %req.email))]
#[post("/login")]
pub async fn login_user(
    db: Data<DbConn>,
    req: Form<LoginRequest>,
    session: Session,
) -> HttpResponse {
    let email = match req.validate() {
        Ok(email) => email,
        Err(errors) => return login_page(Flash::default(), &req, errors),
    };
    let user = match UserAdapter::init(&db).get_by_email(email).await {
        Ok(Some(user)) => user,
        Ok(None) => return login_page(Flash::error(INVALID_CREDENTIALS), &req, FieldErrors::default()),
        Err(e) => return response_500(e),
    };
    if verify_password(&user.password, req.password.as_bytes()).is_err() {
        tracing::event!(target: "backend", tracing::Level::INFO, "Password did not match.");
        return login_page(Flash::error(INVALID_CREDENTIALS), &req, FieldErrors::default());
    }
    if !user.verified {
        return login_page(Flash::error(NOT_VERIFIED), &req, FieldErrors::default());
    }

    match renew_session(&session, user.id) {
        Ok(_) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
            Redirect::to("/").respond(&session)
        }
        Err(e) => response_500(e),
    }
}

fn renew_session(session: &Session, id: uuid::Uuid) -> Result<(), SessionInsertError> {
    session.renew();
    session.insert(USER_ID_KEY, id)
}
