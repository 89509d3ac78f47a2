use db_adapters::user_adapter::{UserAdapter, UserFilter, UserMutation, UserQuery};

use crate::{error_500, UseCaseError};

/// Marks the user verified when `token` matches. Returns whether it did.
pub async fn verify_email<'a>(
    email: String,
    token: &str,
    user_adapter: UserAdapter<'a>,
) -> Result<bool, UseCaseError> {
    let user = user_adapter
        .clone()
        .filter_eq_verified(false)
        .filter_eq_verification_token(token)
        .get_by_email(email)
        .await
        .map_err(error_500)?;
    match user {
        Some(user) => {
            user_adapter.verify(user).await.map_err(error_500)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
