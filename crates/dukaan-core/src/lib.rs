//! # dukaan-core: Pure Business Logic for Dukaan
//!
//! This crate is the **heart** of Dukaan. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dukaan Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      UI Shell (external)                        │   │
//! │  │    Order form ──► Live preview ──► Save ──► WhatsApp send      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    dukaan-ledger                                │   │
//! │  │    stores, order ledger, draft state, messaging, reports       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dukaan-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │  credit   │  │  message  │  │   │
//! │  │   │  Order    │  │  totals   │  │  due date │  │ rendering │  │   │
//! │  │   │ Quotation │  │ breakdown │  │ reminders │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORES • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Order, Quotation, ...)
//! - [`pricing`] - Totals breakdown computation
//! - [`credit`] - Due date and reminder scheduling
//! - [`message`] - Canonical outbound text rendering
//! - [`money`] - Currency display helpers
//! - [`error`] - Domain error types
//! - [`validation`] - Commit-boundary validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Stores, network, file system access is FORBIDDEN here
//! 3. **Full-Precision Floats**: Derived totals stay unrounded; rounding is display-only
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use dukaan_core::pricing::compute_totals;
//! use dukaan_core::types::{DiscountSpec, LineItem, Unit};
//!
//! let items = vec![LineItem::new("Chair", 2.0, Unit::Pieces, 1200.0)];
//! let totals = compute_totals(&items, &DiscountSpec::Percentage(10.0), 18.0);
//!
//! // 2400 − 240 = 2160, + 18% tax = 2548.80
//! assert_eq!(dukaan_core::money::rupees(totals.grand_total), "₹2548.80");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod credit;
pub mod error;
pub mod message;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use dukaan_core::Order` instead of
// `use dukaan_core::types::Order`

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol. Single-currency system; every amount is rupees.
pub const CURRENCY: &str = "₹";

/// Company name printed on messages and invoices when no config
/// overrides it.
pub const DEFAULT_COMPANY_NAME: &str = "Pooja Graphic";

/// Default credit duration when the form leaves it blank.
pub const DEFAULT_CREDIT_DURATION_DAYS: u32 = 30;

/// Default lead time for the owner-facing payment reminder.
pub const DEFAULT_OWNER_REMINDER_DAYS: u32 = 5;

/// Default lead time for the customer-facing payment reminder.
pub const DEFAULT_CUSTOMER_REMINDER_DAYS: u32 = 7;

/// Maximum line rows on one order or quotation.
///
/// ## Business Reason
/// Prevents runaway forms and keeps rendered messages within what a
/// single WhatsApp message can carry.
pub const MAX_ORDER_ITEMS: usize = 100;

/// Maximum quantity on a single line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 10).
pub const MAX_ITEM_QUANTITY: f64 = 9999.0;
