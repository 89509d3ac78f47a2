mod login;
mod logout;
mod registration;

use actix_web::web::ServiceConfig;
use registration::{
    email_verification_factory, registration_factory, registration_form_factory,
    registration_status_factory, resend_verification_factory,
    resend_verification_form_factory,
};

pub fn user_routes(cfg: &mut ServiceConfig) {
    cfg.service(login::login_form)
        .service(login::login_user)
        .service(logout::log_out)
        .service(registration_form_factory)
        .service(registration_factory)
        .service(registration_status_factory)
        .service(email_verification_factory)
        .service(resend_verification_form_factory)
        .service(resend_verification_factory);
}
