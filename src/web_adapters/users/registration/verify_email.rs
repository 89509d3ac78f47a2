use actix_session::Session;
use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use minijinja::context;
use sea_orm::DbConn;
use serde::Deserialize;
use use_cases::users::{types::FieldErrors, verify_email::verify_email as verify_user_email};

use crate::utils::{flash::take_flash, response_500, templates::view_response};

#[derive(Deserialize, Debug)]
pub struct VerifyEmailQuery {
    email: Option<String>,
    token: Option<String>,
}

#[tracing::instrument(name = "Verifying user email", skip(db, session, query))]
#[get("/verify-email")]
pub async fn verify_email(
    db: Data<DbConn>,
    session: Session,
    query: Query<VerifyEmailQuery>,
) -> HttpResponse {
    let VerifyEmailQuery { email, token } = query.into_inner();
    let success = match (email, token) {
        (Some(email), Some(token)) => {
            match verify_user_email(email, &token, UserAdapter::init(&db)).await {
                Ok(verified) => verified,
                Err(e) => return response_500(e),
            }
        }
        _ => false,
    };
    view_response(
        "users/emailVerification",
        context! {
            success => success,
            flash => take_flash(&session),
            errors => FieldErrors::default(),
        },
    )
}
