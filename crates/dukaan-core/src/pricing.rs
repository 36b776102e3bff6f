//! # Pricing Engine
//!
//! Derives the totals breakdown for an order or quotation.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► subtotal ──► − discount ──► after_discount                   │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                                        × tax% ──► tax_amount            │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                        grand_total = after_discount + tax_amount        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! `compute_totals` is idempotent and side-effect-free: every call
//! recomputes from scratch, identical inputs give bit-identical outputs.
//! Both the live preview and order creation go through this one function.
//!
//! ## Permissive Coercion
//! Non-finite inputs (NaN from an unparsed field) degrade to zero so a
//! half-filled form still renders a preview. The strict checks live in
//! [`crate::validation`] and run at the commit boundary instead.

use crate::types::{DiscountSpec, LineItem, TotalsBreakdown};

/// Treats NaN/infinite values as zero. Preview-path policy only.
#[inline]
fn coerce(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Computes the full totals breakdown.
///
/// - `discount_amount` is clamped to `[0, subtotal]`, so `after_discount`
///   and `grand_total` can never go negative.
/// - A negative tax percent is treated as zero.
///
/// ## Example
/// ```rust
/// use dukaan_core::pricing::compute_totals;
/// use dukaan_core::types::{DiscountSpec, LineItem, Unit};
///
/// let items = vec![
///     LineItem::new("Chair", 2.0, Unit::Pieces, 1200.0),
///     LineItem::new("Carpet", 10.0, Unit::SqFt, 50.0),
/// ];
/// let totals = compute_totals(&items, &DiscountSpec::Percentage(10.0), 18.0);
/// assert_eq!(totals.subtotal, 2900.0);
/// assert_eq!(totals.grand_total, 3079.8);
/// ```
pub fn compute_totals(
    items: &[LineItem],
    discount: &DiscountSpec,
    tax_percent: f64,
) -> TotalsBreakdown {
    let subtotal: f64 = items.iter().map(|item| coerce(item.line_total)).sum();

    let raw_discount = match discount {
        DiscountSpec::Percentage(pct) => subtotal * coerce(*pct) / 100.0,
        DiscountSpec::Fixed(amount) => coerce(*amount),
    };
    let discount_amount = raw_discount.clamp(0.0, subtotal);

    let after_discount = subtotal - discount_amount;
    let tax_amount = after_discount * coerce(tax_percent).max(0.0) / 100.0;
    let grand_total = after_discount + tax_amount;

    TotalsBreakdown {
        subtotal,
        discount_amount,
        after_discount,
        tax_amount,
        grand_total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Unit;

    const EPS: f64 = 1e-9;

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Chair", 2.0, Unit::Pieces, 1200.0),
            LineItem::new("Carpet", 10.0, Unit::SqFt, 50.0),
        ]
    }

    #[test]
    fn test_reference_order() {
        // 2 chairs @ 1200 + 10 sq.ft carpet @ 50, 10% off, 18% tax
        let totals = compute_totals(&sample_items(), &DiscountSpec::Percentage(10.0), 18.0);

        assert!((totals.subtotal - 2900.0).abs() < EPS);
        assert!((totals.discount_amount - 290.0).abs() < EPS);
        assert!((totals.after_discount - 2610.0).abs() < EPS);
        assert!((totals.tax_amount - 469.8).abs() < EPS);
        assert!((totals.grand_total - 3079.8).abs() < EPS);
    }

    #[test]
    fn test_grand_total_identity() {
        // grand_total == (subtotal - discount) * (1 + tax/100)
        let cases = [
            (DiscountSpec::Percentage(0.0), 0.0),
            (DiscountSpec::Percentage(25.0), 18.0),
            (DiscountSpec::Fixed(500.0), 12.5),
            (DiscountSpec::Fixed(0.0), 5.0),
        ];
        for (discount, tax) in cases {
            let t = compute_totals(&sample_items(), &discount, tax);
            let expected = (t.subtotal - t.discount_amount) * (1.0 + tax / 100.0);
            assert!((t.grand_total - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_empty_items() {
        let totals = compute_totals(&[], &DiscountSpec::Percentage(10.0), 18.0);
        assert_eq!(totals, TotalsBreakdown::default());
    }

    #[test]
    fn test_fixed_discount() {
        let totals = compute_totals(&sample_items(), &DiscountSpec::Fixed(400.0), 0.0);
        assert!((totals.discount_amount - 400.0).abs() < EPS);
        assert!((totals.grand_total - 2500.0).abs() < EPS);
    }

    #[test]
    fn test_discount_clamped_to_subtotal() {
        // Oversized fixed discount cannot drive the total negative
        let totals = compute_totals(&sample_items(), &DiscountSpec::Fixed(5000.0), 18.0);
        assert_eq!(totals.discount_amount, 2900.0);
        assert_eq!(totals.after_discount, 0.0);
        assert_eq!(totals.grand_total, 0.0);
    }

    #[test]
    fn test_negative_discount_clamped_to_zero() {
        let totals = compute_totals(&sample_items(), &DiscountSpec::Fixed(-100.0), 0.0);
        assert_eq!(totals.discount_amount, 0.0);
        assert_eq!(totals.grand_total, 2900.0);
    }

    #[test]
    fn test_non_finite_inputs_coerce_to_zero() {
        let totals = compute_totals(&sample_items(), &DiscountSpec::Percentage(f64::NAN), f64::NAN);
        assert_eq!(totals.discount_amount, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.grand_total, 2900.0);
    }

    #[test]
    fn test_idempotent() {
        let a = compute_totals(&sample_items(), &DiscountSpec::Percentage(10.0), 18.0);
        let b = compute_totals(&sample_items(), &DiscountSpec::Percentage(10.0), 18.0);
        assert_eq!(a, b);
    }
}
