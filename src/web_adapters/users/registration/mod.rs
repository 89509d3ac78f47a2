mod register;
mod resend_verification;
mod status;
mod verify_email;

pub use register::{register as registration_factory, registration_form as registration_form_factory};
pub use resend_verification::{
    resend_verification as resend_verification_factory,
    resend_verification_form as resend_verification_form_factory,
};
pub use status::registration_status as registration_status_factory;
pub use verify_email::verify_email as email_verification_factory;
