use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const PASSWORD_MIN_LENGTH: usize = 4;
pub const INVALID_EMAIL: &str = "Invalid email";

/// Field name to message, one message per field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        match self.is_empty() {
            true => Ok(value),
            false => Err(self),
        }
    }
}

/// Accepts `local@domain` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

fn validate_email(email: &str, errors: &mut FieldErrors) {
    if email.trim().is_empty() {
        errors.add("email", "Email cannot be empty");
    } else if !is_valid_email(email.trim()) {
        errors.add("email", INVALID_EMAIL);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResendVerificationRequest {
    #[serde(default)]
    pub email: String,
}

impl ResendVerificationRequest {
    /// Returns the trimmed email.
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::default();
        validate_email(&self.email, &mut errors);
        errors.into_result(self.email.trim().to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<ValidRegistration, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.add("name", "Name cannot be empty");
        }
        validate_email(&self.email, &mut errors);
        if self.password.chars().count() < PASSWORD_MIN_LENGTH {
            errors.add(
                "password",
                &format!("Password must be at least {PASSWORD_MIN_LENGTH} characters"),
            );
        }
        errors.into_result(ValidRegistration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl LoginRequest {
    /// Returns the trimmed email.
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::default();
        validate_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.add("password", "Password cannot be empty");
        }
        errors.into_result(self.email.trim().to_string())
    }
}
