use std::collections::BTreeMap;

use entities::user;

pub const VERIFY_EMAIL_TEMPLATE: &str = "email/verify-email";
pub const VERIFY_EMAIL_SUBJECT: &str = "TechBuzz - Email verification";
/// The display name travels under the empty key; the template does not read it by name.
pub const NAME_PARAM: &str = "";
pub const VERIFICATION_URL_PARAM: &str = "verificationUrl";

pub type EmailParams = BTreeMap<String, String>;

/// Renders `template_name` with `params` and hands the message off for delivery.
///
/// `Ok` means the message was built and queued, not that it was delivered.
pub trait EmailService: Send + Sync {
    fn send_email(
        &self,
        template_name: &str,
        params: EmailParams,
        to: &str,
        subject: &str,
    ) -> Result<(), String>;
}

pub fn verification_url(base_url: &str, email: &str, token: &str) -> String {
    format!(
        "{}/verify-email?email={}&token={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(email),
        urlencoding::encode(token)
    )
}

#[tracing::instrument(
    name = "Sending verification email",
    skip(email_service, user),
    fields(recipient_email = %user.email)
)]
pub fn send_verification_email(
    email_service: &dyn EmailService,
    base_url: &str,
    user: &user::Model,
) -> Result<(), String> {
    let params = EmailParams::from([
        (NAME_PARAM.to_string(), user.name.clone()),
        (
            VERIFICATION_URL_PARAM.to_string(),
            verification_url(base_url, &user.email, &user.verification_token),
        ),
    ]);
    email_service.send_email(
        VERIFY_EMAIL_TEMPLATE,
        params,
        &user.email,
        VERIFY_EMAIL_SUBJECT,
    )
}
