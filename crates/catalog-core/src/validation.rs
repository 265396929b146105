//! # Validation Module
//!
//! Form-level input checks.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Argument parsing (clap)                                      │
//! │  ├── Type coercion: price → f64, quantity → u32                        │
//! │  └── Negative quantities rejected by the type                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Form rules                                                   │
//! │  └── THIS MODULE: name, price, search query, image payload             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ProductStore                                                 │
//! │  └── Accepts whatever it is given; no checks                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_price, validate_product_name};
//!
//! assert!(validate_product_name("Red Hat").is_ok());
//! assert!(validate_price(-1.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_IMAGE_BYTES, MAX_NAME_LENGTH, MAX_QUERY_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LENGTH`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// Zero is allowed (free items). NaN and infinities are not.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Returns
/// The trimmed query. Empty is fine and means "everything".
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LENGTH,
        });
    }

    Ok(query.to_string())
}

/// Validates an image data URL (`data:image/<type>[;base64],<payload>`).
///
/// ## Rules
/// - Media type must start with `image/`
/// - Decoded payload at most [`MAX_IMAGE_BYTES`]
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_image_data;
///
/// assert!(validate_image_data("data:image/png;base64,iVBORw0KGgo=").is_ok());
/// assert!(validate_image_data("data:text/plain;base64,aGk=").is_err());
/// ```
pub fn validate_image_data(data_url: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "image".to_string(),
        reason: reason.to_string(),
    };

    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| invalid("must be a data URL"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| invalid("missing payload"))?;

    if !header.starts_with("image/") {
        return Err(invalid("must be an image"));
    }

    if decoded_len(header, payload) > MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge {
            field: "image".to_string(),
            max_bytes: MAX_IMAGE_BYTES,
        });
    }

    Ok(())
}

/// Size of the payload once decoded, estimated from its encoding.
fn decoded_len(header: &str, payload: &str) -> usize {
    if header.ends_with(";base64") {
        let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
        ((payload.len() / 4) * 3 + (payload.len() % 4) * 3 / 4).saturating_sub(padding.min(2))
    } else {
        payload.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Cafetière Programmable").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(699.99).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  shirt ").unwrap(), "shirt");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_image_data_format() {
        assert!(validate_image_data("data:image/jpeg;base64,/9j/4AAQ").is_ok());
        assert!(validate_image_data("image/png;base64,AAAA").is_err());
        assert!(validate_image_data("data:image/png;base64").is_err());
        assert!(validate_image_data("data:application/pdf;base64,JVBE").is_err());
    }

    #[test]
    fn test_validate_image_data_size() {
        // 4 base64 chars decode to 3 bytes.
        let at_limit = "A".repeat(MAX_IMAGE_BYTES / 3 * 4);
        assert_eq!(decoded_len(";base64", &at_limit), MAX_IMAGE_BYTES / 3 * 3);
        assert!(validate_image_data(&format!("data:image/png;base64,{at_limit}")).is_ok());

        let too_big = "A".repeat((MAX_IMAGE_BYTES / 3 + 1) * 4);
        assert_eq!(
            validate_image_data(&format!("data:image/png;base64,{too_big}")),
            Err(ValidationError::TooLarge {
                field: "image".to_string(),
                max_bytes: MAX_IMAGE_BYTES,
            })
        );
    }

    #[test]
    fn test_decoded_len_accounts_for_padding() {
        assert_eq!(decoded_len("image/png;base64", "aGk="), 2);
        assert_eq!(decoded_len("image/png;base64", "aA=="), 1);
        assert_eq!(decoded_len("image/svg+xml", "<svg/>"), 6);
    }
}
