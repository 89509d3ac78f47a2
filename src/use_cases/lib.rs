use std::fmt::Debug;

pub mod posts;
pub mod users;

#[derive(Debug)]
pub enum UseCaseError {
    Conflict(String),            // 409
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
