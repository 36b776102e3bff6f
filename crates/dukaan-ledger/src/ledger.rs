//! # Order Ledger
//!
//! Owns the canonical list of orders, quotations and reminders.
//!
//! ## Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      create_order()                                     │
//! │                                                                         │
//! │  OrderRequest                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Resolve customer ──── missing ──► NotFound (nothing mutated)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Strict validation ─── invalid ──► Validation error (nothing        │
//! │       │                                mutated)                         │
//! │       ▼                                                                 │
//! │  3. compute_totals() + schedule_credit()   (pure sub-computations)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. Bump the per-month counter, assign ORD-YYYY-MM-NNN                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. Persist order + reminders, return the order                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Document Numbers
//! Sequencing is a transactional counter per (year, month), bumped inside
//! the same mutation that inserts the document. It is never derived by
//! recounting stored records, so it cannot race and does not break if
//! views filter history.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::info;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::store::CustomerStore;
use dukaan_core::credit::schedule_credit;
use dukaan_core::pricing::compute_totals;
use dukaan_core::validation::{validate_discount, validate_line_item, validate_tax_percent};
use dukaan_core::{
    CoreError, DiscountSpec, LineItem, Order, OrderStatus, PaymentChoice, PaymentTerm, Quotation,
    Reminder, ReminderStatus, MAX_ORDER_ITEMS,
};

// =============================================================================
// Requests
// =============================================================================

/// Everything needed to create an order. Line items arrive already
/// resolved (name/unit/price frozen); resolving catalog references is the
/// draft layer's job.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub customer_id: String,
    pub items: Vec<LineItem>,
    pub discount: DiscountSpec,
    pub tax_percent: f64,
    pub payment: PaymentChoice,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    pub delivery_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Everything needed to create a quotation.
#[derive(Debug, Clone)]
pub struct QuotationRequest {
    pub customer_id: String,
    pub items: Vec<LineItem>,
    pub discount: DiscountSpec,
    pub tax_percent: f64,
    pub created_date: NaiveDate,
    pub created_time: NaiveTime,
    pub valid_until: NaiveDate,
    pub notes: Option<String>,
}

// =============================================================================
// Order Ledger
// =============================================================================

/// Canonical owner of orders, quotations and reminders.
///
/// Orders are never deleted, so reminders are never orphaned.
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
    quotations: Vec<Quotation>,
    reminders: Vec<Reminder>,

    /// (year, month) → last sequence issued, orders.
    order_counters: HashMap<(i32, u32), u32>,
    /// (year, month) → last sequence issued, quotations. Independent.
    quotation_counters: HashMap<(i32, u32), u32>,
}

/// Issues the next document number for the month of `date`.
fn next_document_number(
    counters: &mut HashMap<(i32, u32), u32>,
    prefix: &str,
    date: NaiveDate,
) -> String {
    let key = (date.year(), date.month());
    let seq = counters.entry(key).or_insert(0);
    *seq += 1;
    format!("{}-{}-{:02}-{:03}", prefix, key.0, key.1, seq)
}

/// Strict commit-boundary checks shared by orders and quotations.
fn validate_request(
    items: &[LineItem],
    discount: &DiscountSpec,
    tax_percent: f64,
) -> LedgerResult<()> {
    if items.is_empty() {
        return Err(CoreError::EmptyItems.into());
    }
    if items.len() > MAX_ORDER_ITEMS {
        return Err(CoreError::TooManyItems {
            max: MAX_ORDER_ITEMS,
        }
        .into());
    }
    for item in items {
        validate_line_item(item)?;
    }
    validate_discount(discount)?;
    validate_tax_percent(tax_percent)?;
    Ok(())
}

impl OrderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        OrderLedger::default()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Creates an order.
    ///
    /// All validation happens before any state mutates; an error leaves
    /// the ledger exactly as it was. Status initializes to `Completed`
    /// for fully paid orders and `Pending` for credit orders.
    pub fn create_order(
        &mut self,
        customers: &CustomerStore,
        request: OrderRequest,
    ) -> LedgerResult<Order> {
        let customer = customers.get(&request.customer_id)?;
        validate_request(&request.items, &request.discount, request.tax_percent)?;

        let totals = compute_totals(&request.items, &request.discount, request.tax_percent);
        let schedule = schedule_credit(request.order_date, &request.payment);

        let document_number =
            next_document_number(&mut self.order_counters, "ORD", request.order_date);
        let order_id = Uuid::new_v4().to_string();

        let mut reminder_ids = Vec::with_capacity(schedule.reminders.len());
        for spec in &schedule.reminders {
            let reminder = Reminder {
                id: Uuid::new_v4().to_string(),
                order_id: order_id.clone(),
                role: spec.role,
                days_before_due: spec.days_before_due,
                reminder_date: spec.reminder_date,
                status: ReminderStatus::Scheduled,
            };
            reminder_ids.push(reminder.id.clone());
            self.reminders.push(reminder);
        }

        let payment_term = request.payment.term();
        let status = match payment_term {
            PaymentTerm::FullyPaid => OrderStatus::Completed,
            PaymentTerm::Credit(_) => OrderStatus::Pending,
        };

        let order = Order {
            id: order_id,
            document_number,
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            items: request.items,
            totals,
            created_date: request.order_date,
            created_time: request.order_time,
            delivery_date: request.delivery_date,
            notes: request.notes,
            payment_term,
            due_date: schedule.due_date,
            reminders: reminder_ids,
            status,
        };

        info!(
            order_id = %order.id,
            document_number = %order.document_number,
            grand_total = order.totals.grand_total,
            credit = order.is_credit(),
            "Order created"
        );

        self.orders.push(order.clone());
        Ok(order)
    }

    /// Creates a quotation. Quotations carry no payment terms and never
    /// schedule reminders; their number series is independent of orders.
    pub fn create_quotation(
        &mut self,
        customers: &CustomerStore,
        request: QuotationRequest,
    ) -> LedgerResult<Quotation> {
        let customer = customers.get(&request.customer_id)?;
        validate_request(&request.items, &request.discount, request.tax_percent)?;

        let totals = compute_totals(&request.items, &request.discount, request.tax_percent);
        let document_number =
            next_document_number(&mut self.quotation_counters, "QUO", request.created_date);

        let quotation = Quotation {
            id: Uuid::new_v4().to_string(),
            document_number,
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            items: request.items,
            totals,
            created_date: request.created_date,
            created_time: request.created_time,
            valid_until: request.valid_until,
            notes: request.notes,
            converted_to_order_id: None,
        };

        info!(
            quotation_id = %quotation.id,
            document_number = %quotation.document_number,
            grand_total = quotation.totals.grand_total,
            "Quotation created"
        );

        self.quotations.push(quotation.clone());
        Ok(quotation)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Advances the order through the fixed status cycle
    /// Pending → Completed → Shipped → Pending and returns the new status.
    pub fn change_status(&mut self, order_id: &str) -> LedgerResult<OrderStatus> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| LedgerError::not_found("Order", order_id))?;

        order.status = order.status.next();
        info!(order_id = %order.id, status = %order.status, "Order status changed");
        Ok(order.status)
    }

    /// Converts a quotation into a fully paid order.
    ///
    /// Items and totals are copied verbatim; the pricing engine does NOT
    /// re-run, so the order matches what was quoted even if prices moved.
    pub fn convert_quotation(
        &mut self,
        quotation_id: &str,
        today: NaiveDate,
        time: NaiveTime,
    ) -> LedgerResult<Order> {
        let quotation = self
            .quotations
            .iter()
            .find(|q| q.id == quotation_id)
            .ok_or_else(|| LedgerError::not_found("Quotation", quotation_id))?;

        if let Some(order_id) = &quotation.converted_to_order_id {
            return Err(LedgerError::AlreadyConverted {
                document_number: quotation.document_number.clone(),
                order_id: order_id.clone(),
            });
        }

        let source = quotation.clone();
        let document_number = next_document_number(&mut self.order_counters, "ORD", today);

        let order = Order {
            id: Uuid::new_v4().to_string(),
            document_number,
            customer_id: source.customer_id,
            customer_name: source.customer_name,
            customer_phone: source.customer_phone,
            items: source.items,
            totals: source.totals,
            created_date: today,
            created_time: time,
            delivery_date: None,
            notes: Some(format!(
                "Converted from quotation {}",
                source.document_number
            )),
            payment_term: PaymentTerm::FullyPaid,
            due_date: None,
            reminders: Vec::new(),
            status: OrderStatus::Pending,
        };

        // The immutable borrow above ended; re-find to link the order id
        if let Some(q) = self.quotations.iter_mut().find(|q| q.id == quotation_id) {
            q.converted_to_order_id = Some(order.id.clone());
        }

        info!(
            quotation_id = %quotation_id,
            order_id = %order.id,
            document_number = %order.document_number,
            "Quotation converted to order"
        );

        self.orders.push(order.clone());
        Ok(order)
    }

    /// Settles a credit order: fully paid, completed, no due date.
    ///
    /// Clearing the due date keeps the "due date iff credit" invariant;
    /// the order drops out of receivables on the next report.
    pub fn mark_paid(&mut self, order_id: &str) -> LedgerResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| LedgerError::not_found("Order", order_id))?;

        order.payment_term = PaymentTerm::FullyPaid;
        order.status = OrderStatus::Completed;
        order.due_date = None;

        info!(order_id = %order.id, document_number = %order.document_number, "Order marked paid");
        Ok(())
    }

    /// Flips a reminder to `Sent`.
    pub fn mark_reminder_sent(&mut self, reminder_id: &str) -> LedgerResult<()> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == reminder_id)
            .ok_or_else(|| LedgerError::not_found("Reminder", reminder_id))?;

        reminder.status = ReminderStatus::Sent;
        Ok(())
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn get_order(&self, order_id: &str) -> LedgerResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| LedgerError::not_found("Order", order_id))
    }

    pub fn get_quotation(&self, quotation_id: &str) -> LedgerResult<&Quotation> {
        self.quotations
            .iter()
            .find(|q| q.id == quotation_id)
            .ok_or_else(|| LedgerError::not_found("Quotation", quotation_id))
    }

    pub fn get_reminder(&self, reminder_id: &str) -> LedgerResult<&Reminder> {
        self.reminders
            .iter()
            .find(|r| r.id == reminder_id)
            .ok_or_else(|| LedgerError::not_found("Reminder", reminder_id))
    }

    /// All orders, in creation order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn quotations(&self) -> &[Quotation] {
        &self.quotations
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Reminders belonging to one order, in scheduling order.
    pub fn reminders_for_order(&self, order_id: &str) -> Vec<&Reminder> {
        self.reminders
            .iter()
            .filter(|r| r.order_id == order_id)
            .collect()
    }

    /// The most recent `limit` orders, newest first. Dashboard feed.
    pub fn recent_orders(&self, limit: usize) -> Vec<&Order> {
        self.orders.iter().rev().take(limit).collect()
    }

    /// Filters orders by status, customer, and a case-insensitive search
    /// over document number and customer name.
    pub fn search_orders(
        &self,
        status: Option<OrderStatus>,
        customer_id: Option<&str>,
        term: &str,
    ) -> Vec<&Order> {
        let term = term.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .filter(|o| customer_id.map_or(true, |c| o.customer_id == c))
            .filter(|o| {
                term.is_empty()
                    || o.document_number.to_lowercase().contains(&term)
                    || o.customer_name.to_lowercase().contains(&term)
            })
            .collect()
    }
}

// =============================================================================
// Shared Ledger State
// =============================================================================

/// Shared handle to a ledger.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<OrderLedger>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Every mutation runs as one critical section, so the
///   read-then-bump document counter can never issue duplicates under
///   concurrent writers
///
/// ## Why Not RwLock?
/// Ledger operations are quick and most of them mutate. A RwLock would
/// add complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    ledger: Arc<Mutex<OrderLedger>>,
}

impl LedgerState {
    /// Creates a new empty ledger state.
    pub fn new() -> Self {
        LedgerState::default()
    }

    /// Executes a function with read access to the ledger.
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderLedger) -> R,
    {
        let ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let order = state.with_ledger_mut(|ledger| ledger.create_order(&customers, request))?;
    /// ```
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderLedger) -> R,
    {
        let mut ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&mut ledger)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dukaan_core::{CreditTerms, ReminderConfig, ReminderRole, Unit};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn customers() -> (CustomerStore, String) {
        let mut store = CustomerStore::new();
        let asha = store.add("Asha Traders", "9876543210", None, None).unwrap();
        (store, asha.id)
    }

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Chair", 2.0, Unit::Pieces, 1200.0),
            LineItem::new("Carpet", 10.0, Unit::SqFt, 50.0),
        ]
    }

    fn order_request(customer_id: &str, order_date: NaiveDate) -> OrderRequest {
        OrderRequest {
            customer_id: customer_id.to_string(),
            items: sample_items(),
            discount: DiscountSpec::Percentage(10.0),
            tax_percent: 18.0,
            payment: PaymentChoice::FullyPaid,
            order_date,
            order_time: time(14, 30),
            delivery_date: None,
            notes: None,
        }
    }

    fn credit_payment(duration_days: u32) -> PaymentChoice {
        PaymentChoice::Credit {
            terms: CreditTerms {
                label: format!("{} days", duration_days),
                duration_days,
            },
            reminders: Some(ReminderConfig {
                owner_days_before: Some(5),
                customer_days_before: Some(7),
            }),
        }
    }

    #[test]
    fn test_create_order_totals_and_status() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let order = ledger
            .create_order(&store, order_request(&customer_id, date(2024, 1, 1)))
            .unwrap();

        assert_eq!(order.document_number, "ORD-2024-01-001");
        assert!((order.totals.grand_total - 3079.8).abs() < 1e-9);
        assert_eq!(order.status, OrderStatus::Completed); // fully paid
        assert_eq!(order.due_date, None);
        assert!(order.reminders.is_empty());
        assert_eq!(order.customer_name, "Asha Traders");
    }

    #[test]
    fn test_document_numbers_sequence_and_reset() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let first = ledger
            .create_order(&store, order_request(&customer_id, date(2024, 1, 5)))
            .unwrap();
        let second = ledger
            .create_order(&store, order_request(&customer_id, date(2024, 1, 20)))
            .unwrap();
        let next_month = ledger
            .create_order(&store, order_request(&customer_id, date(2024, 2, 1)))
            .unwrap();

        assert_eq!(first.document_number, "ORD-2024-01-001");
        assert_eq!(second.document_number, "ORD-2024-01-002");
        assert_eq!(next_month.document_number, "ORD-2024-02-001");
    }

    #[test]
    fn test_quotation_counter_is_independent() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        ledger
            .create_order(&store, order_request(&customer_id, date(2024, 1, 5)))
            .unwrap();

        let quotation = ledger
            .create_quotation(
                &store,
                QuotationRequest {
                    customer_id: customer_id.clone(),
                    items: sample_items(),
                    discount: DiscountSpec::Percentage(0.0),
                    tax_percent: 0.0,
                    created_date: date(2024, 1, 10),
                    created_time: time(11, 0),
                    valid_until: date(2024, 2, 10),
                    notes: None,
                },
            )
            .unwrap();

        assert_eq!(quotation.document_number, "QUO-2024-01-001");
    }

    #[test]
    fn test_create_credit_order_schedules_reminders() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let mut request = order_request(&customer_id, date(2024, 1, 1));
        request.payment = credit_payment(30);

        let order = ledger.create_order(&store, request).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.due_date, Some(date(2024, 1, 31)));
        assert_eq!(order.reminders.len(), 2);

        let reminders = ledger.reminders_for_order(&order.id);
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].role, ReminderRole::Owner);
        assert_eq!(reminders[0].reminder_date, date(2024, 1, 26));
        assert_eq!(reminders[1].role, ReminderRole::Customer);
        assert_eq!(reminders[1].reminder_date, date(2024, 1, 24));
        assert!(reminders
            .iter()
            .all(|r| r.status == ReminderStatus::Scheduled));
    }

    #[test]
    fn test_create_order_unknown_customer() {
        let (store, _) = customers();
        let mut ledger = OrderLedger::new();

        let err = ledger
            .create_order(&store, order_request("missing", date(2024, 1, 1)))
            .unwrap_err();
        assert!(matches!(err, LedgerError::NotFound { .. }));
        assert!(ledger.orders().is_empty());
    }

    #[test]
    fn test_create_order_rejects_invalid_input_without_mutating() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let mut request = order_request(&customer_id, date(2024, 1, 1));
        request.items = vec![];
        assert!(ledger.create_order(&store, request).is_err());

        let mut request = order_request(&customer_id, date(2024, 1, 1));
        request.tax_percent = f64::NAN;
        assert!(ledger.create_order(&store, request).is_err());

        let mut request = order_request(&customer_id, date(2024, 1, 1));
        request.items = vec![LineItem::new("  ", 1.0, Unit::Pieces, 10.0)];
        assert!(ledger.create_order(&store, request).is_err());

        // A failed create must not consume a document number
        let order = ledger
            .create_order(&store, order_request(&customer_id, date(2024, 1, 1)))
            .unwrap();
        assert_eq!(order.document_number, "ORD-2024-01-001");
    }

    #[test]
    fn test_change_status_cycles_and_surfaces_not_found() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let mut request = order_request(&customer_id, date(2024, 1, 1));
        request.payment = credit_payment(30);
        let order = ledger.create_order(&store, request).unwrap();

        assert_eq!(ledger.change_status(&order.id).unwrap(), OrderStatus::Completed);
        assert_eq!(ledger.change_status(&order.id).unwrap(), OrderStatus::Shipped);
        assert_eq!(ledger.change_status(&order.id).unwrap(), OrderStatus::Pending);

        assert!(matches!(
            ledger.change_status("missing"),
            Err(LedgerError::NotFound { .. })
        ));
    }

    #[test]
    fn test_convert_quotation_copies_totals_verbatim() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let quotation = ledger
            .create_quotation(
                &store,
                QuotationRequest {
                    customer_id: customer_id.clone(),
                    items: sample_items(),
                    discount: DiscountSpec::Percentage(10.0),
                    tax_percent: 18.0,
                    created_date: date(2024, 1, 10),
                    created_time: time(11, 0),
                    valid_until: date(2024, 2, 10),
                    notes: None,
                },
            )
            .unwrap();

        let order = ledger
            .convert_quotation(&quotation.id, date(2024, 3, 2), time(9, 15))
            .unwrap();

        assert_eq!(order.totals, quotation.totals);
        assert_eq!(order.items.len(), quotation.items.len());
        assert_eq!(order.payment_term, PaymentTerm::FullyPaid);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.due_date, None);
        assert_eq!(order.document_number, "ORD-2024-03-001");
        assert_eq!(
            order.notes.as_deref(),
            Some("Converted from quotation QUO-2024-01-001")
        );

        let stored = ledger.get_quotation(&quotation.id).unwrap();
        assert_eq!(stored.converted_to_order_id.as_deref(), Some(order.id.as_str()));
        assert_eq!(
            stored.status(date(2024, 3, 2)),
            dukaan_core::QuotationStatus::Converted
        );
    }

    #[test]
    fn test_convert_quotation_twice_fails() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let quotation = ledger
            .create_quotation(
                &store,
                QuotationRequest {
                    customer_id,
                    items: sample_items(),
                    discount: DiscountSpec::Percentage(0.0),
                    tax_percent: 0.0,
                    created_date: date(2024, 1, 10),
                    created_time: time(11, 0),
                    valid_until: date(2024, 2, 10),
                    notes: None,
                },
            )
            .unwrap();

        ledger
            .convert_quotation(&quotation.id, date(2024, 1, 15), time(9, 0))
            .unwrap();
        let err = ledger
            .convert_quotation(&quotation.id, date(2024, 1, 16), time(9, 0))
            .unwrap_err();

        assert!(matches!(err, LedgerError::AlreadyConverted { .. }));
        assert_eq!(ledger.orders().len(), 1); // no duplicate order
    }

    #[test]
    fn test_mark_paid_clears_credit() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let mut request = order_request(&customer_id, date(2024, 1, 1));
        request.payment = credit_payment(30);
        let order = ledger.create_order(&store, request).unwrap();

        ledger.mark_paid(&order.id).unwrap();

        let paid = ledger.get_order(&order.id).unwrap();
        assert!(!paid.is_credit());
        assert_eq!(paid.status, OrderStatus::Completed);
        assert_eq!(paid.due_date, None);
    }

    #[test]
    fn test_mark_reminder_sent() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        let mut request = order_request(&customer_id, date(2024, 1, 1));
        request.payment = credit_payment(30);
        let order = ledger.create_order(&store, request).unwrap();

        let reminder_id = order.reminders[0].clone();
        ledger.mark_reminder_sent(&reminder_id).unwrap();
        assert_eq!(
            ledger.get_reminder(&reminder_id).unwrap().status,
            ReminderStatus::Sent
        );

        assert!(ledger.mark_reminder_sent("missing").is_err());
    }

    #[test]
    fn test_search_orders() {
        let (mut store, customer_id) = customers();
        let ravi = store.add("Ravi Decor", "9123456780", None, None).unwrap();
        let mut ledger = OrderLedger::new();

        ledger
            .create_order(&store, order_request(&customer_id, date(2024, 1, 1)))
            .unwrap();
        ledger
            .create_order(&store, order_request(&ravi.id, date(2024, 1, 2)))
            .unwrap();

        assert_eq!(ledger.search_orders(None, None, "").len(), 2);
        assert_eq!(ledger.search_orders(None, Some(&ravi.id), "").len(), 1);
        assert_eq!(ledger.search_orders(None, None, "ravi").len(), 1);
        assert_eq!(ledger.search_orders(None, None, "ord-2024-01-001").len(), 1);
        assert_eq!(
            ledger
                .search_orders(Some(OrderStatus::Pending), None, "")
                .len(),
            0 // both fully paid, so Completed
        );
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let (store, customer_id) = customers();
        let mut ledger = OrderLedger::new();

        for day in 1..=3 {
            ledger
                .create_order(&store, order_request(&customer_id, date(2024, 1, day)))
                .unwrap();
        }

        let recent = ledger.recent_orders(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].document_number, "ORD-2024-01-003");
        assert_eq!(recent[1].document_number, "ORD-2024-01-002");
    }

    #[test]
    fn test_ledger_state_wrapper() {
        let (store, customer_id) = customers();
        let state = LedgerState::new();

        let order = state
            .with_ledger_mut(|ledger| {
                ledger.create_order(&store, order_request(&customer_id, date(2024, 1, 1)))
            })
            .unwrap();

        let count = state.with_ledger(|ledger| ledger.orders().len());
        assert_eq!(count, 1);
        assert_eq!(order.document_number, "ORD-2024-01-001");
    }
}
