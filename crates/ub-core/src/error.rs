use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid role filter: {value} {location}")]
    InvalidFilter {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Message suitable for showing to the user, without the source location.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message.as_str(),
            Self::InvalidRole { .. } => "Unknown role (expected ADMIN, USER or GUEST)",
            Self::InvalidFilter { .. } => "Unknown filter (expected ALL, ADMIN, USER or GUEST)",
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
