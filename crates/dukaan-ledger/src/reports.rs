//! # Reports
//!
//! Read-only views over the ledger: dashboard KPIs, receivables aging,
//! and period sales reports.
//!
//! Everything here is derived on demand from ledger state. No report
//! value is ever stored, so the numbers cannot go stale.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::ledger::OrderLedger;
use crate::store::CustomerStore;
use dukaan_core::Order;

// =============================================================================
// Dashboard
// =============================================================================

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    /// Revenue from fully paid orders.
    pub total_sales: f64,
    /// Outstanding amount across credit orders.
    pub total_receivables: f64,
    /// Portion of receivables already past due.
    pub overdue_receivables: f64,
    pub total_orders: usize,
    pub total_customers: usize,
}

/// Computes the dashboard KPIs as of `today`.
///
/// An order counts toward exactly one of sales or receivables,
/// depending on its payment term; marking a credit order paid moves its
/// amount from receivables to sales on the next call.
pub fn dashboard_kpis(
    ledger: &OrderLedger,
    customers: &CustomerStore,
    today: NaiveDate,
) -> DashboardKpis {
    let mut total_sales = 0.0;
    let mut total_receivables = 0.0;
    let mut overdue_receivables = 0.0;

    for order in ledger.orders() {
        if order.is_credit() {
            total_receivables += order.grand_total();
            if order.due_date.map_or(false, |due| due < today) {
                overdue_receivables += order.grand_total();
            }
        } else {
            total_sales += order.grand_total();
        }
    }

    DashboardKpis {
        total_sales,
        total_receivables,
        overdue_receivables,
        total_orders: ledger.orders().len(),
        total_customers: customers.len(),
    }
}

// =============================================================================
// Receivables Aging
// =============================================================================

/// Aging bucket for an outstanding credit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBucket {
    NotDue,
    Days0To7,
    Days8To30,
    Days31To60,
    Over60,
}

impl AgingBucket {
    /// Buckets by days overdue. Negative means not yet due.
    pub fn from_days_overdue(days: i64) -> AgingBucket {
        if days > 60 {
            AgingBucket::Over60
        } else if days > 30 {
            AgingBucket::Days31To60
        } else if days > 7 {
            AgingBucket::Days8To30
        } else if days >= 0 {
            AgingBucket::Days0To7
        } else {
            AgingBucket::NotDue
        }
    }
}

impl std::fmt::Display for AgingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgingBucket::NotDue => write!(f, "Not Due"),
            AgingBucket::Days0To7 => write!(f, "0-7 days"),
            AgingBucket::Days8To30 => write!(f, "8-30 days"),
            AgingBucket::Days31To60 => write!(f, "31-60 days"),
            AgingBucket::Over60 => write!(f, "60+ days"),
        }
    }
}

/// One outstanding credit order, aged as of the report date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivableRow {
    pub order_id: String,
    pub document_number: String,
    pub customer_name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    /// Signed; negative while the due date is still ahead.
    pub days_overdue: i64,
    pub bucket: AgingBucket,
}

/// Lists every unpaid credit order with its aging bucket, oldest due
/// date first.
pub fn receivables(ledger: &OrderLedger, today: NaiveDate) -> Vec<ReceivableRow> {
    let mut rows: Vec<ReceivableRow> = ledger
        .orders()
        .iter()
        .filter(|order| order.is_credit())
        .filter_map(|order| {
            let due_date = order.due_date?;
            let days_overdue = (today - due_date).num_days();
            Some(ReceivableRow {
                order_id: order.id.clone(),
                document_number: order.document_number.clone(),
                customer_name: order.customer_name.clone(),
                amount: order.grand_total(),
                due_date,
                days_overdue,
                bucket: AgingBucket::from_days_overdue(days_overdue),
            })
        })
        .collect();

    rows.sort_by_key(|row| row.due_date);
    rows
}

// =============================================================================
// Period Sales Reports
// =============================================================================

/// Reporting window, resolved relative to the report date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// The report date itself.
    Daily,
    /// The 7 days up to and including the report date.
    Weekly,
    /// The 30 days up to and including the report date.
    Monthly,
    /// January 1st of the report year through the report date.
    Yearly,
    /// Explicit inclusive range.
    Custom { start: NaiveDate, end: NaiveDate },
}

impl ReportPeriod {
    /// Resolves to an inclusive (start, end) date range.
    pub fn resolve(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            ReportPeriod::Daily => (today, today),
            ReportPeriod::Weekly => (today - Days::new(7), today),
            ReportPeriod::Monthly => (today - Days::new(30), today),
            ReportPeriod::Yearly => {
                // January 1st always exists
                let jan_first = NaiveDate::from_ymd_opt(today.year(), 1, 1)
                    .unwrap_or(today);
                (jan_first, today)
            }
            ReportPeriod::Custom { start, end } => (start, end),
        }
    }
}

/// Sales summary over one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub total_sales: f64,
    pub orders_count: usize,
    /// Zero when the period has no orders.
    pub average_order: f64,
}

/// Sums every order created inside the period, regardless of payment
/// term; credit sales are still sales.
pub fn sales_report(ledger: &OrderLedger, period: ReportPeriod, today: NaiveDate) -> SalesReport {
    let (start, end) = period.resolve(today);
    let in_period: Vec<&Order> = ledger
        .orders()
        .iter()
        .filter(|order| order.created_date >= start && order.created_date <= end)
        .collect();

    let total_sales: f64 = in_period.iter().map(|order| order.grand_total()).sum();
    let orders_count = in_period.len();
    let average_order = if orders_count == 0 {
        0.0
    } else {
        total_sales / orders_count as f64
    };

    SalesReport {
        total_sales,
        orders_count,
        average_order,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
