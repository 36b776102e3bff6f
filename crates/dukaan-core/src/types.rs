//! # Domain Types
//!
//! Core domain types used throughout Dukaan.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │    Quotation    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  document_number│   │  document_number│       │
//! │  │  unit           │   │  items, totals  │   │  items, totals  │       │
//! │  │  unit_price     │   │  payment_term   │   │  valid_until    │       │
//! │  └─────────────────┘   │  due_date?      │   │  converted_to?  │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   LineItem      │   │    Reminder     │   │ MessageLogEntry │       │
//! │  │  (snapshot)     │   │  Owner/Customer │   │  (append-only)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every ledger entity has:
//! - `id`: UUID v4 - immutable, used for cross-references
//! - Business ID: document number (ORD-2024-01-001) - human-readable
//!
//! ## Snapshot Pattern
//! Orders and quotations freeze the customer name/phone and every line's
//! name/unit/price at creation time. Editing the catalog or a customer
//! afterwards never rewrites history.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{DEFAULT_CUSTOMER_REMINDER_DAYS, DEFAULT_OWNER_REMINDER_DAYS};

// =============================================================================
// Unit of Measure
// =============================================================================

/// Unit of measure for a product or line item.
///
/// The two built-in units cover the shop's stock; anything else travels
/// as `Other` so the catalog stays extensible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Pieces,
    SqFt,
    Other(String),
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Pieces => write!(f, "pieces"),
            Unit::SqFt => write!(f, "sq.ft"),
            Unit::Other(label) => write!(f, "{}", label),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Immutable once referenced by an order line: lines snapshot the name,
/// unit and price, so later catalog edits never affect existing documents.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in pickers and on documents.
    pub name: String,

    /// Unit of measure.
    pub unit: Unit,

    /// Price per unit.
    pub unit_price: f64,

    /// When the product was added to the catalog.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Customer
// =============================================================================

/// Whether the customer has ever received a message from us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    /// No message has been successfully dispatched yet.
    NotConnected,
    /// At least one message was successfully dispatched.
    Connected,
}

impl Default for NotificationStatus {
    fn default() -> Self {
        NotificationStatus::NotConnected
    }
}

/// A customer record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub name: String,

    /// Local phone number, exactly 10 digits. The country code is
    /// prepended only at the dispatch boundary.
    pub phone: String,

    pub email: Option<String>,

    pub notes: Option<String>,

    /// Flips to `Connected` the first time a dispatch succeeds.
    pub notification_status: NotificationStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Line Item
// =============================================================================

/// A line in an order or quotation.
/// Uses snapshot pattern to freeze product data at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Item name at creation time (frozen).
    pub name: String,

    /// Quantity, may be fractional for area-priced items.
    pub quantity: f64,

    /// Unit of measure at creation time (frozen).
    pub unit: Unit,

    /// Price per unit at creation time (frozen).
    pub price_per_unit: f64,

    /// quantity × price_per_unit, full precision.
    pub line_total: f64,
}

impl LineItem {
    /// Builds a line, deriving the line total.
    pub fn new(name: impl Into<String>, quantity: f64, unit: Unit, price_per_unit: f64) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            unit,
            price_per_unit,
            line_total: quantity * price_per_unit,
        }
    }
}

// =============================================================================
// Discount & Totals
// =============================================================================

/// How a document-level discount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DiscountSpec {
    /// Value is 0–100, applied to the subtotal.
    Percentage(f64),
    /// Value is an absolute currency amount.
    Fixed(f64),
}

impl Default for DiscountSpec {
    fn default() -> Self {
        DiscountSpec::Percentage(0.0)
    }
}

/// Derived totals for one document. Never stored independently of the
/// order/quotation that produced them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsBreakdown {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub after_discount: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

// =============================================================================
// Payment Terms
// =============================================================================

/// Credit terms attached to a deferred-payment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreditTerms {
    /// Human label shown to the customer ("15 days", "30 days", "Custom"...).
    pub label: String,

    /// Days from the order date to the due date.
    pub duration_days: u32,
}

/// Which reminder roles are enabled and their lead time in days.
///
/// `None` means the role is disabled. Coupled to `PaymentChoice::Credit`
/// only: a reminder without a due date is meaningless, so the type system
/// makes that state unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReminderConfig {
    pub owner_days_before: Option<u32>,
    pub customer_days_before: Option<u32>,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig {
            owner_days_before: Some(DEFAULT_OWNER_REMINDER_DAYS),
            customer_days_before: Some(DEFAULT_CUSTOMER_REMINDER_DAYS),
        }
    }
}

/// Payment selection made at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "payment", rename_all = "snake_case")]
pub enum PaymentChoice {
    FullyPaid,
    Credit {
        terms: CreditTerms,
        reminders: Option<ReminderConfig>,
    },
}

impl PaymentChoice {
    /// The term that gets persisted on the order (reminder config is
    /// consumed by the scheduler and not stored).
    pub fn term(&self) -> PaymentTerm {
        match self {
            PaymentChoice::FullyPaid => PaymentTerm::FullyPaid,
            PaymentChoice::Credit { terms, .. } => PaymentTerm::Credit(terms.clone()),
        }
    }
}

/// Payment term persisted on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "payment", rename_all = "snake_case")]
pub enum PaymentTerm {
    FullyPaid,
    Credit(CreditTerms),
}

impl PaymentTerm {
    #[inline]
    pub fn is_credit(&self) -> bool {
        matches!(self, PaymentTerm::Credit(_))
    }

    /// Credit terms, if this is a credit sale.
    pub fn credit_terms(&self) -> Option<&CreditTerms> {
        match self {
            PaymentTerm::FullyPaid => None,
            PaymentTerm::Credit(terms) => Some(terms),
        }
    }
}

// =============================================================================
// Document Kind & Order Status
// =============================================================================

/// Whether a document is a binding order or a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Order,
    Quotation,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Order => write!(f, "Order"),
            DocumentKind::Quotation => write!(f, "Quotation"),
        }
    }
}

/// Fulfilment status of an order. Advanced manually, one click at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Shipped,
}

impl OrderStatus {
    /// The fixed cycle: Pending → Completed → Shipped → Pending.
    pub fn next(self) -> OrderStatus {
        match self {
            OrderStatus::Pending => OrderStatus::Completed,
            OrderStatus::Completed => OrderStatus::Shipped,
            OrderStatus::Shipped => OrderStatus::Pending,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Shipped => write!(f, "shipped"),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A confirmed order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,

    /// `ORD-{YYYY}-{MM}-{NNN}`, unique per (year, month).
    pub document_number: String,

    pub customer_id: String,
    /// Customer name at creation time (frozen).
    pub customer_name: String,
    /// Customer phone at creation time (frozen).
    pub customer_phone: String,

    pub items: Vec<LineItem>,
    pub totals: TotalsBreakdown,

    #[ts(as = "String")]
    pub created_date: NaiveDate,
    #[ts(as = "String")]
    pub created_time: NaiveTime,

    #[ts(as = "Option<String>")]
    pub delivery_date: Option<NaiveDate>,

    pub notes: Option<String>,

    pub payment_term: PaymentTerm,

    /// Present if and only if `payment_term` is Credit.
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,

    /// Reminder ids, in scheduling order. Reminders live in the ledger.
    pub reminders: Vec<String>,

    pub status: OrderStatus,
}

impl Order {
    #[inline]
    pub fn is_credit(&self) -> bool {
        self.payment_term.is_credit()
    }

    #[inline]
    pub fn grand_total(&self) -> f64 {
        self.totals.grand_total
    }
}

// =============================================================================
// Quotation
// =============================================================================

/// Derived quotation status. Never stored; always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    Active,
    Expired,
    Converted,
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotationStatus::Active => write!(f, "active"),
            QuotationStatus::Expired => write!(f, "expired"),
            QuotationStatus::Converted => write!(f, "converted"),
        }
    }
}

/// A quotation: same shape as an order, but non-binding, with a validity
/// window instead of payment terms.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quotation {
    pub id: String,

    /// `QUO-{YYYY}-{MM}-{NNN}`, counted independently of orders.
    pub document_number: String,

    pub customer_id: String,
    pub customer_name: String,
    pub customer_phone: String,

    pub items: Vec<LineItem>,
    pub totals: TotalsBreakdown,

    #[ts(as = "String")]
    pub created_date: NaiveDate,
    #[ts(as = "String")]
    pub created_time: NaiveTime,

    #[ts(as = "String")]
    pub valid_until: NaiveDate,

    pub notes: Option<String>,

    /// Set once, when the quotation is converted into an order.
    pub converted_to_order_id: Option<String>,
}

impl Quotation {
    /// Derives the status. Priority: Converted > Expired > Active.
    /// Conversion wins even when `valid_until` has passed.
    pub fn status(&self, today: NaiveDate) -> QuotationStatus {
        if self.converted_to_order_id.is_some() {
            QuotationStatus::Converted
        } else if self.valid_until < today {
            QuotationStatus::Expired
        } else {
            QuotationStatus::Active
        }
    }
}

// =============================================================================
// Reminder
// =============================================================================

/// Who a payment reminder is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReminderRole {
    Owner,
    Customer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Scheduled,
    Sent,
}

/// A scheduled payment reminder. Created only at order creation for
/// credit orders; never created standalone.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reminder {
    pub id: String,
    pub order_id: String,
    pub role: ReminderRole,
    pub days_before_due: u32,
    /// due_date − days_before_due. May precede the order date when the
    /// lead time exceeds the credit duration.
    #[ts(as = "String")]
    pub reminder_date: NaiveDate,
    pub status: ReminderStatus,
}

// =============================================================================
// Message Log
// =============================================================================

/// What kind of message a log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Order,
    Quotation,
    Reminder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Sent,
    Failed,
}

/// One dispatch attempt. Append-only; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageLogEntry {
    pub id: String,
    /// The order or quotation the message was about.
    pub document_id: String,
    /// Recipient phone including the country code prefix.
    pub phone: String,
    pub body: String,
    pub kind: MessageKind,
    pub status: MessageStatus,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quotation(valid_until: NaiveDate, converted: Option<&str>) -> Quotation {
        Quotation {
            id: "q1".to_string(),
            document_number: "QUO-2024-01-001".to_string(),
            customer_id: "c1".to_string(),
            customer_name: "Asha".to_string(),
            customer_phone: "9876543210".to_string(),
            items: vec![],
            totals: TotalsBreakdown::default(),
            created_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            created_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            valid_until,
            notes: None,
            converted_to_order_id: converted.map(str::to_string),
        }
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Pieces.to_string(), "pieces");
        assert_eq!(Unit::SqFt.to_string(), "sq.ft");
        assert_eq!(Unit::Other("metres".to_string()).to_string(), "metres");
    }

    #[test]
    fn test_line_item_total() {
        let line = LineItem::new("Carpet", 10.0, Unit::SqFt, 50.0);
        assert_eq!(line.line_total, 500.0);

        let fractional = LineItem::new("Carpet", 2.5, Unit::SqFt, 50.0);
        assert_eq!(fractional.line_total, 125.0);
    }

    #[test]
    fn test_order_status_cycle() {
        assert_eq!(OrderStatus::Pending.next(), OrderStatus::Completed);
        assert_eq!(OrderStatus::Completed.next(), OrderStatus::Shipped);
        assert_eq!(OrderStatus::Shipped.next(), OrderStatus::Pending);
    }

    #[test]
    fn test_quotation_status_priority() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let past = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let future = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();

        // Converted wins even when expired
        let q = quotation(past, Some("o1"));
        assert_eq!(q.status(today), QuotationStatus::Converted);

        let q = quotation(past, None);
        assert_eq!(q.status(today), QuotationStatus::Expired);

        let q = quotation(future, None);
        assert_eq!(q.status(today), QuotationStatus::Active);

        // valid_until == today is still active (strictly-before comparison)
        let q = quotation(today, None);
        assert_eq!(q.status(today), QuotationStatus::Active);
    }

    #[test]
    fn test_payment_choice_to_term() {
        let choice = PaymentChoice::Credit {
            terms: CreditTerms {
                label: "30 days".to_string(),
                duration_days: 30,
            },
            reminders: Some(ReminderConfig::default()),
        };
        let term = choice.term();
        assert!(term.is_credit());
        assert_eq!(term.credit_terms().unwrap().duration_days, 30);

        assert_eq!(PaymentChoice::FullyPaid.term(), PaymentTerm::FullyPaid);
    }

    #[test]
    fn test_discount_spec_wire_shape() {
        let json = serde_json::to_string(&DiscountSpec::Percentage(10.0)).unwrap();
        assert_eq!(json, r#"{"kind":"percentage","value":10.0}"#);

        let back: DiscountSpec = serde_json::from_str(r#"{"kind":"fixed","value":250.0}"#).unwrap();
        assert_eq!(back, DiscountSpec::Fixed(250.0));
    }

    #[test]
    fn test_payment_term_wire_shape() {
        let json = serde_json::to_string(&PaymentTerm::FullyPaid).unwrap();
        assert_eq!(json, r#"{"payment":"fully_paid"}"#);

        let credit = PaymentTerm::Credit(CreditTerms {
            label: "30 days".to_string(),
            duration_days: 30,
        });
        let json = serde_json::to_string(&credit).unwrap();
        assert_eq!(
            json,
            r#"{"payment":"credit","label":"30 days","duration_days":30}"#
        );
    }

    #[test]
    fn test_reminder_config_defaults() {
        let config = ReminderConfig::default();
        assert_eq!(config.owner_days_before, Some(5));
        assert_eq!(config.customer_days_before, Some(7));
    }
}
