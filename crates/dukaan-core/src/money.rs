//! # Money Formatting
//!
//! Display helpers for monetary values.
//!
//! ## Why f64 Amounts?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRECISION MODEL                                                        │
//! │                                                                         │
//! │  All derived totals (subtotal, discount, tax, grand total) are kept    │
//! │  in full-precision floating point. Rounding happens ONLY at display:   │
//! │                                                                         │
//! │    grand_total = 3079.8000000000002   (internal)                       │
//! │    rupees(grand_total) = "₹3079.80"   (what the customer sees)         │
//! │                                                                         │
//! │  Quantities may be fractional (sq.ft items), so line totals cannot     │
//! │  be forced into integer minor units without losing the invariant       │
//! │  line_total = quantity × price_per_unit.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dukaan_core::money;
//!
//! assert_eq!(money::rupees(3079.8), "₹3079.80");
//! assert_eq!(money::plain(1200.0), "1200");   // unit prices print bare
//! assert_eq!(money::plain(50.5), "50.5");
//! ```

use crate::CURRENCY;

/// Rounds an amount to 2 decimal places, half away from zero.
///
/// Display-only. Stored totals are never passed through this before
/// aggregation; KPIs sum the full-precision values.
#[inline]
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats an amount with the currency symbol and exactly 2 decimals.
///
/// ## Example
/// ```rust
/// use dukaan_core::money::rupees;
///
/// assert_eq!(rupees(2900.0), "₹2900.00");
/// assert_eq!(rupees(469.8), "₹469.80");
/// assert_eq!(rupees(-5.5), "₹-5.50");
/// ```
pub fn rupees(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY, round2(amount))
}

/// Formats a number the way the message templates print quantities and
/// unit prices: no trailing zeros, no forced decimals.
///
/// `1200.0` → `"1200"`, `2.5` → `"2.5"`. Non-finite values degrade to `"0"`
/// so a live preview never renders `NaN`.
pub fn plain(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else {
        "0".to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
