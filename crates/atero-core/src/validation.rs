//! # Validation Module
//!
//! Input validation utilities for Atero Eats.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (out of scope)                                  │
//! │  ├── Input widgets, maxlength, keyboard types                          │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Required fields, trimming                                         │
//! │  ├── Positive prices and table numbers                                 │
//! │  └── Card field shapes (16 digits, MM/YY, 3-4 digit CVC)              │
//! │                                                                         │
//! │  Every failure is a ValidationError surfaced as a message on the       │
//! │  same screen - nothing here aborts or panics                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atero_core::validation::{validate_card_number, validate_table_number};
//!
//! assert!(validate_card_number("1234567890123456").is_ok());
//! assert_eq!(validate_table_number("5").unwrap(), 5);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted dish name.
const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a dish name for the catalog.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a dish description for the catalog.
///
/// Must not be empty after trimming. Returns the trimmed description.
pub fn validate_item_description(description: &str) -> ValidationResult<String> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    Ok(description.to_string())
}

/// Validates the customer's name at session setup.
///
/// Must not be empty after trimming. Returns the trimmed name.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates free-text feedback from the settings screen.
///
/// Must not be empty after trimming. Returns the trimmed text.
pub fn validate_feedback(text: &str) -> ValidationResult<String> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "feedback".to_string(),
        });
    }

    Ok(text.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be positive (> 0); free items are not a thing on this menu
///
/// ## Example
/// ```rust
/// use atero_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(25_000).is_ok()); // R250.00
/// assert!(validate_price_cents(0).is_err());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates and parses a table number entered as raw text.
///
/// ## Rules
/// - Must parse as an integer
/// - Must be >= 1 (0 means "unset" and is never a valid table)
///
/// ## Example
/// ```rust
/// use atero_core::validation::validate_table_number;
///
/// assert_eq!(validate_table_number("5").unwrap(), 5);
/// assert!(validate_table_number("0").is_err());
/// assert!(validate_table_number("five").is_err());
/// ```
pub fn validate_table_number(raw: &str) -> ValidationResult<u32> {
    let raw = raw.trim();

    let table: u32 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "table number".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if table == 0 {
        return Err(ValidationError::MustBePositive {
            field: "table number".to_string(),
        });
    }

    Ok(table)
}

// =============================================================================
// Card Field Validators
// =============================================================================
// The payment is simulated; these only check input shape so the form can
// surface the first failing field, exactly like a real gateway's client-side
// checks would.

/// Validates a card number: exactly 16 ASCII digits.
pub fn validate_card_number(number: &str) -> ValidationResult<()> {
    if number.len() != 16 || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "card number".to_string(),
            reason: "must be exactly 16 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a card expiry: `MM/YY` (two digits, slash, two digits).
///
/// No calendar check is performed - the payment is a simulation and only
/// the shape of the input matters.
pub fn validate_card_expiry(expiry: &str) -> ValidationResult<()> {
    let bytes = expiry.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "expiry".to_string(),
            reason: "expected MM/YY".to_string(),
        });
    }

    Ok(())
}

/// Validates a card CVC: 3 or 4 ASCII digits.
pub fn validate_card_cvc(cvc: &str) -> ValidationResult<()> {
    let len_ok = (3..=4).contains(&cvc.len());
    if !len_ok || !cvc.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "cvc".to_string(),
            reason: "must be 3 or 4 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("  Grilled Salmon ").unwrap(), "Grilled Salmon");
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_item_description() {
        assert!(validate_item_description("Served with asparagus.").is_ok());
        assert!(validate_item_description("  ").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(25_000).is_ok());
        assert!(validate_price_cents(1).is_ok());
        assert!(validate_price_cents(0).is_err());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_table_number() {
        assert_eq!(validate_table_number("5").unwrap(), 5);
        assert_eq!(validate_table_number(" 12 ").unwrap(), 12);
        assert!(validate_table_number("0").is_err());
        assert!(validate_table_number("-3").is_err());
        assert!(validate_table_number("five").is_err());
        assert!(validate_table_number("").is_err());
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("1234567890123456").is_ok());
        assert!(validate_card_number("123").is_err());
        assert!(validate_card_number("12345678901234567").is_err());
        assert!(validate_card_number("1234abcd90123456").is_err());
    }

    #[test]
    fn test_validate_card_expiry() {
        assert!(validate_card_expiry("12/25").is_ok());
        assert!(validate_card_expiry("01/99").is_ok());
        assert!(validate_card_expiry("1/25").is_err());
        assert!(validate_card_expiry("12-25").is_err());
        assert!(validate_card_expiry("12/2025").is_err());
        assert!(validate_card_expiry("").is_err());
    }

    #[test]
    fn test_validate_card_cvc() {
        assert!(validate_card_cvc("123").is_ok());
        assert!(validate_card_cvc("1234").is_ok());
        assert!(validate_card_cvc("12").is_err());
        assert!(validate_card_cvc("12345").is_err());
        assert!(validate_card_cvc("12a").is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name(" Alice ").unwrap(), "Alice");
        assert!(validate_customer_name("   ").is_err());
    }

    #[test]
    fn test_validate_feedback() {
        assert!(validate_feedback("Great ribs!").is_ok());
        assert!(validate_feedback(" ").is_err());
    }
}
