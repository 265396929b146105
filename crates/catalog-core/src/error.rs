//! # Domain Errors
//!
//! Typed errors for the catalog domain.
//!
//! The store itself never returns these: a missing id is a silent no-op
//! there. They are raised by the layer above (form validation, or a command
//! that needs a product to exist before it can act).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoreError                                                              │
//! │  ├── ProductNotFound(id)      ← caller asked for an id the store lacks │
//! │  └── Validation(..)           ← form input rejected before the store   │
//! │       ├── Required                                                      │
//! │       ├── TooLong                                                       │
//! │       ├── MustBeNonNegative                                             │
//! │       ├── InvalidFormat                                                 │
//! │       └── TooLarge                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain-level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product carries this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is negative or not a number.
    #[error("{field} must be a non-negative number")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. not an image data URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Payload exceeds the size limit.
    #[error("{field} must not exceed {max_bytes} bytes")]
    TooLarge { field: String, max_bytes: usize },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("42".to_string());
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
