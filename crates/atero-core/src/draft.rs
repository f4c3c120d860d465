//! # Add-Item Form
//!
//! Field validation for the mobile add-item form.
//!
//! The mobile collaborator validates each field as the user leaves it, then
//! submits a plain record with **no id** - id assignment belongs to the
//! catalog (see [`crate::catalog::MenuCatalog::add_draft`]).
//!
//! The form's rules are stricter than the catalog's own invariants (a
//! two-character floor on names, a ten-character floor on descriptions, a
//! sanity cap on prices) because they exist to catch typos at entry time,
//! not to protect the domain model.

use crate::error::ValidationError;
use crate::types::{Course, MenuItemDraft};
use crate::validation::ValidationResult;

/// Minimum dish name length on the form.
const MIN_NAME_LEN: usize = 2;

/// Minimum description length on the form.
const MIN_DESCRIPTION_LEN: usize = 10;

/// Sanity cap on entered prices: R1000.00.
///
/// Not a business rule - a guard against a missed decimal point
/// ("19950" for "199.50").
const MAX_PRICE_CENTS: i64 = 100_000;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the dish name field: required, at least 2 characters.
pub fn validate_draft_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: MIN_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates the description field: required, at least 10 characters.
pub fn validate_draft_description(description: &str) -> ValidationResult<String> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.len() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::TooShort {
            field: "description".to_string(),
            min: MIN_DESCRIPTION_LEN,
        });
    }

    Ok(description.to_string())
}

/// Validates and parses the price field from its raw text.
///
/// ## Rules
/// - Must be a decimal number with at most two fraction digits
/// - Must be positive
/// - Must not exceed the R1000 sanity cap
///
/// ## Example
/// ```rust
/// use atero_core::draft::validate_draft_price;
///
/// assert_eq!(validate_draft_price("199.50").unwrap(), 19_950);
/// assert_eq!(validate_draft_price("45").unwrap(), 4_500);
/// assert!(validate_draft_price("0").is_err());
/// assert!(validate_draft_price("1000.01").is_err());
/// assert!(validate_draft_price("abc").is_err());
/// ```
pub fn validate_draft_price(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let cents = parse_price_cents(raw).ok_or_else(|| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: "must be an amount like 199.50".to_string(),
    })?;

    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(cents)
}

/// Parses decimal price text ("199.50", "45", "7.5") into cents.
///
/// Integer text only - no float round-trip, so "199.50" is exactly 19950.
/// Returns `None` for anything that is not `digits[.digits{1,2}]`.
fn parse_price_cents(raw: &str) -> Option<i64> {
    let (whole, frac) = match raw.split_once('.') {
        Some((w, f)) => (w, f),
        None => (raw, ""),
    };

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(frac_cents)
}

// =============================================================================
// Form Submission
// =============================================================================

/// Validates all form fields and builds the submission record.
///
/// Field order mirrors the form: name, then description, then price - the
/// first failing field is the one reported.
pub fn draft_from_form(
    name: &str,
    description: &str,
    course: Course,
    price_raw: &str,
) -> ValidationResult<MenuItemDraft> {
    let name = validate_draft_name(name)?;
    let description = validate_draft_description(description)?;
    let price_cents = validate_draft_price(price_raw)?;

    Ok(MenuItemDraft {
        name,
        description,
        course,
        price_cents,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_draft_name(" Bobotie ").unwrap(), "Bobotie");
        assert!(matches!(
            validate_draft_name(""),
            Err(ValidationError::Required { .. })
        ));
        // One character is below the floor, two is the boundary
        assert!(matches!(
            validate_draft_name("B"),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(validate_draft_name("Bo").is_ok());
    }

    #[test]
    fn test_description_rules() {
        assert!(validate_draft_description("Cape Malay curried mince bake.").is_ok());
        assert!(matches!(
            validate_draft_description(""),
            Err(ValidationError::Required { .. })
        ));
        // Nine characters fail, ten pass
        assert!(validate_draft_description("123456789").is_err());
        assert!(validate_draft_description("1234567890").is_ok());
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(validate_draft_price("199.50").unwrap(), 19_950);
        assert_eq!(validate_draft_price("45").unwrap(), 4_500);
        assert_eq!(validate_draft_price("7.5").unwrap(), 750);
        assert_eq!(validate_draft_price("1000").unwrap(), 100_000);
    }

    #[test]
    fn test_price_rejections() {
        assert!(matches!(
            validate_draft_price(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_draft_price("abc").is_err());
        assert!(validate_draft_price("19.999").is_err());
        assert!(validate_draft_price("-5").is_err());
        assert!(matches!(
            validate_draft_price("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_draft_price("1000.01"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_draft_from_form() {
        let draft = draft_from_form(
            "Bobotie",
            "Cape Malay curried mince bake.",
            Course::Mains,
            "142.50",
        )
        .unwrap();

        assert_eq!(draft.name, "Bobotie");
        assert_eq!(draft.course, Course::Mains);
        assert_eq!(draft.price_cents, 14_250);
    }

    #[test]
    fn test_draft_reports_first_failing_field() {
        // Both name and price are bad; the name error wins
        let err = draft_from_form("", "A fine description.", Course::Mains, "abc").unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "name"));
    }
}
