mod login;
mod registration;
mod resend_verification;
mod verify_email;
