//! Widget error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validation message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as the form submits it, e.g. `confirmPassword`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors raised by widget state and account operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// One or more form fields failed validation.
    #[error("validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// Password does not satisfy the strength rules.
    #[error("password too weak: {0}")]
    WeakPassword(String),

    /// A submit handler failed.
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// A carousel needs at least one slide.
    #[error("carousel has no slides")]
    EmptyCarousel,

    /// Carousel timing that would advance without pause.
    #[error("invalid carousel timing: {0}")]
    InvalidTiming(String),

    /// Slide index past the end of the carousel.
    #[error("slide {index} out of range for {len} slides")]
    SlideOutOfRange { index: usize, len: usize },

    /// The carousel driver task is no longer running.
    #[error("carousel driver stopped")]
    DriverStopped,
}

impl WidgetError {
    /// Field errors carried by a validation failure.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            WidgetError::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Message for one field, if it failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = WidgetError::Validation(vec![
            FieldError::new("firstName", "First name must be at least 2 characters"),
            FieldError::new("email", "Please enter a valid email address"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: firstName: First name must be at least 2 characters; \
             email: Please enter a valid email address"
        );
        assert_eq!(
            err.message_for("email"),
            Some("Please enter a valid email address")
        );
        assert!(err.message_for("lastName").is_none());
    }

    #[test]
    fn test_non_validation_has_no_fields() {
        assert!(WidgetError::EmptyCarousel.field_errors().is_empty());
    }
}
