pub mod email;
pub mod register;
pub mod resend_verification;
pub mod types;
pub mod verify_email;
