use db_adapters::user_adapter::{UserAdapter, UserQuery};

use crate::{
    error_500,
    users::email::{send_verification_email, EmailService},
    UseCaseError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendVerificationOutcome {
    EmailSent,
    AlreadyVerified,
    UserNotFound,
}

/// Re-sends the verification link carrying the user's current token.
pub async fn resend_verification<'a>(
    email: String,
    base_url: &str,
    user_adapter: UserAdapter<'a>,
    email_service: &dyn EmailService,
) -> Result<ResendVerificationOutcome, UseCaseError> {
    let user = match user_adapter.get_by_email(email).await.map_err(error_500)? {
        Some(user) => user,
        None => return Ok(ResendVerificationOutcome::UserNotFound),
    };
    if user.verified {
        return Ok(ResendVerificationOutcome::AlreadyVerified);
    }

    send_verification_email(email_service, base_url, &user)
        .map_err(UseCaseError::InternalServerError)?;
    tracing::event!(target: "backend", tracing::Level::INFO, "Verification email re-sent.");
    Ok(ResendVerificationOutcome::EmailSent)
}
