//! Validation Error Types

use thiserror::Error;

/// Errors while validating a prediction request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more of a group of required fields is absent
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(&'static [&'static str]),

    /// A single required field is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Field present but not a finite number
    #[error("Invalid value for {field}: expected a finite number")]
    NotANumber { field: &'static str },

    /// Body is not parseable JSON
    #[error("Invalid request body: {0}")]
    InvalidFormat(String),
}
