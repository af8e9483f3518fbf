//! # Error Types
//!
//! Structured error types for spring_core. Validation failures carry the
//! offending field and value so a form layer can highlight the exact input
//! instead of showing a generic failure.
//!
//! Note that the core calculation itself never returns these errors: a
//! degenerate input (e.g. zero stroke mid-edit) produces a not-computable
//! [`CalculationResult`](crate::calculations::spring_rate::CalculationResult)
//! sentinel so a reactive form loop can keep re-invoking it on every
//! keystroke without error handling ceremony.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::errors::{CalcError, CalcResult};
//!
//! fn validate_stroke(stroke_mm: f64) -> CalcResult<()> {
//!     if stroke_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "stroke_mm",
//!             stroke_mm.to_string(),
//!             "Shock stroke must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for spring_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for setup validation and collaborator lookups.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative mass, out-of-range sag, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Bike model not found in the suspension database
    #[error("Bike not found: {model}")]
    BikeNotFound { model: String },

    /// The suspension database could not be read
    #[error("Database error: '{path}' - {reason}")]
    DatabaseError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a BikeNotFound error
    pub fn bike_not_found(model: impl Into<String>) -> Self {
        CalcError::BikeNotFound {
            model: model.into(),
        }
    }

    /// Create a DatabaseError
    pub fn database_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DatabaseError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::BikeNotFound { .. } => "BIKE_NOT_FOUND",
            CalcError::DatabaseError { .. } => "DATABASE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("rider_mass_kg", "-5.0", "Mass must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::bike_not_found("Stumpjumper").error_code(),
            "BIKE_NOT_FOUND"
        );
    }
}
