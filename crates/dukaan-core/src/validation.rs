//! # Validation Module
//!
//! Input validation utilities for Dukaan.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Live preview (draft state)                                   │
//! │  ├── PERMISSIVE - non-finite numbers coerce to zero                    │
//! │  └── The preview must always render, even mid-typing                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Commit boundary (ledger create operations)                   │
//! │  ├── THIS MODULE: strict checks, abort before any store mutates        │
//! │  └── Invalid zeros must never persist as "valid" totals                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dukaan_core::validation::{validate_phone, validate_quantity};
//!
//! validate_phone("9876543210").unwrap();
//! validate_quantity(2.5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::{DiscountSpec, LineItem};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer or product display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a local phone number.
///
/// ## Rules
/// - Exactly 10 ASCII digits, nothing else
/// - The country code is NOT entered here; the dispatch boundary
///   prepends it
///
/// ## Example
/// ```rust
/// use dukaan_core::validation::validate_phone;
///
/// assert!(validate_phone("9876543210").is_ok());
/// assert!(validate_phone("987654321").is_err());   // 9 digits
/// assert!(validate_phone("+919876543210").is_err()); // country code
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be exactly 10 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be finite and strictly positive
/// - Must not exceed MAX_ITEM_QUANTITY
/// - Fractional quantities are fine (sq.ft items)
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "quantity".to_string(),
        });
    }

    if quantity <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite and non-negative
/// - Zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax percentage (0 to 100).
pub fn validate_tax_percent(tax_percent: f64) -> ValidationResult<()> {
    if !tax_percent.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "tax".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&tax_percent) {
        return Err(ValidationError::OutOfRange {
            field: "tax".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a discount specification.
///
/// ## Rules
/// - Percentage: 0 to 100
/// - Fixed: finite and non-negative (clamping to the subtotal is the
///   pricing engine's job)
pub fn validate_discount(discount: &DiscountSpec) -> ValidationResult<()> {
    match discount {
        DiscountSpec::Percentage(pct) => {
            if !pct.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: "discount".to_string(),
                });
            }
            if !(0.0..=100.0).contains(pct) {
                return Err(ValidationError::OutOfRange {
                    field: "discount".to_string(),
                    min: 0,
                    max: 100,
                });
            }
        }
        DiscountSpec::Fixed(amount) => {
            if !amount.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: "discount".to_string(),
                });
            }
            if *amount < 0.0 {
                return Err(ValidationError::MustBePositive {
                    field: "discount".to_string(),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a resolved line item at the commit boundary.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_name("item name", &item.name)?;
    validate_quantity(item.quantity)?;
    validate_price(item.price_per_unit)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
