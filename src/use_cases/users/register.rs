use db_adapters::user_adapter::{CreateUserParams, UserAdapter, UserMutation, UserQuery};
use entities::user;

use crate::{
    error_500,
    users::email::{send_verification_email, EmailService},
    UseCaseError,
};

pub const EMAIL_ALREADY_IN_USE: &str = "Email already in use";

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub verification_token: String,
}

/// Creates an unverified user and sends the verification link.
pub async fn register_user<'a>(
    new_user: NewUser,
    base_url: &str,
    user_adapter: UserAdapter<'a>,
    email_service: &dyn EmailService,
) -> Result<user::Model, UseCaseError> {
    if user_adapter
        .clone()
        .get_by_email(new_user.email.clone())
        .await
        .map_err(error_500)?
        .is_some()
    {
        return Err(UseCaseError::Conflict(EMAIL_ALREADY_IN_USE.to_string()));
    }

    let cleanup_adapter = user_adapter.clone();
    let user = user_adapter
        .create(CreateUserParams {
            email: new_user.email,
            password: new_user.hashed_password,
            name: new_user.name,
            verification_token: new_user.verification_token,
            verified: false,
        })
        .await
        .map_err(error_500)?;

    if let Err(e) = send_verification_email(email_service, base_url, &user) {
        // Undo the insert so the email stays available for another attempt.
        cleanup_adapter
            .delete(user)
            .await
            .map_err(error_500)?;
        return Err(UseCaseError::InternalServerError(e));
    }
    tracing::event!(target: "backend", tracing::Level::INFO, "User registered.");
    Ok(user)
}
