use std::fmt::{self, Debug};

pub mod calendar;
pub mod deadlines;
pub mod display;
pub mod permissions;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

impl fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UseCaseError::BadRequest(message) => write!(f, "BadRequest: {}", message),
            UseCaseError::NotFound(message) => write!(f, "NotFound: {}", message),
            UseCaseError::InternalServerError(message) => {
                write!(f, "InternalServerError: {}", message)
            }
        }
    }
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
