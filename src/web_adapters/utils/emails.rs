use common::settings::types::EmailSettings;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        PoolConfig,
    },
    Address, Message, SmtpTransport, Transport,
};
use minijinja::Value;
use use_cases::users::{
    email::{EmailParams, EmailService},
    types::{FieldErrors, INVALID_EMAIL},
};

use crate::utils::templates::ENV;

/// Renders `{template_name}.html` and `{template_name}.txt` with the same parameters.
pub fn render_email(template_name: &str, params: &EmailParams) -> Result<(String, String), String> {
    let ctx = Value::from_serialize(params);
    let render = |extension: &str| {
        ENV.get_template(&format!("{template_name}.{extension}"))
            .and_then(|template| template.render(&ctx))
            .map_err(|e| format!("Could not render {template_name}.{extension}: {e}"))
    };
    Ok((render("html")?, render("txt")?))
}

/// Rejects addresses the SMTP layer would refuse as a recipient.
pub fn validate_recipient(email: &str) -> Result<(), FieldErrors> {
    match email.parse::<Address>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut errors = FieldErrors::default();
            errors.add("email", INVALID_EMAIL);
            Err(errors)
        }
    }
}

#[derive(Clone)]
pub struct SmtpEmailService {
    sender: Mailbox,
    transport: SmtpTransport,
}

impl SmtpEmailService {
    pub fn init(settings: &EmailSettings) -> Result<Self, String> {
        let sender = settings.sender.parse::<Mailbox>().map_err(|e| {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to get sender mailbox setting: {:#?}", e);
            e.to_string()
        })?;
        let credentials = Credentials::new(
            settings.host_user.clone(),
            settings.host_user_password.clone(),
        );
        let transport = SmtpTransport::starttls_relay(&settings.host)
            .map_err(|e| e.to_string())?
            .credentials(credentials)
            .authentication(vec![Mechanism::Plain])
            .pool_config(PoolConfig::new().max_size(20))
            .build();
        Ok(Self { sender, transport })
    }

    fn build_message(
        &self,
        to: &str,
        subject: &str,
        html_content: String,
        text_content: String,
    ) -> Result<Message, String> {
        let recipient = to.parse::<Mailbox>().map_err(|e| e.to_string())?;
        Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_content),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_content),
                    ),
            )
            .map_err(|e| e.to_string())
    }
}

impl EmailService for SmtpEmailService {
    #[tracing::instrument(name = "Sending templated e-mail", skip(self, params), fields(recipient_email = %to))]
    fn send_email(
        &self,
        template_name: &str,
        params: EmailParams,
        to: &str,
        subject: &str,
    ) -> Result<(), String> {
        let (html_content, text_content) = render_email(template_name, &params)?;
        let email = self.build_message(to, subject, html_content, text_content)?;

        let transport = self.transport.clone();
        actix_web::rt::task::spawn_blocking(move || match transport.send(&email) {
            Ok(_) => {
                tracing::event!(target: "backend", tracing::Level::INFO, "Email successfully sent!");
            }
            Err(e) => {
                tracing::event!(target: "backend", tracing::Level::ERROR, "Could not send email: {:#?}", e);
            }
        });
        Ok(())
    }
}
