//! # Message Formatter
//!
//! Renders the canonical outbound texts: the WhatsApp order/quotation
//! message, the payment reminder, and the plain-text invoice.
//!
//! ## One Context, One Code Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Live draft preview ──┐                                                 │
//! │                       ├──► MessageContext ──► whatsapp_message()        │
//! │  Persisted order ─────┘                                                 │
//! │                                                                         │
//! │  The preview and the final message MUST be byte-identical for the      │
//! │  same inputs, so both build the same context and call the same fn.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Format Stability
//! The output layout is a customer-facing contract. Regular customers
//! archive these messages; do not reword or reorder lines casually. The
//! tests pin the full text.

use chrono::{NaiveDate, NaiveTime};

use crate::money;
use crate::types::{DocumentKind, LineItem, Order, Quotation, TotalsBreakdown};
use crate::CURRENCY;

// =============================================================================
// Message Context
// =============================================================================

/// Payment line for the message footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentInfo<'a> {
    FullyPaid,
    Credit {
        label: &'a str,
        duration_days: u32,
        due_date: NaiveDate,
    },
}

/// Everything the renderer needs, independent of where it came from.
#[derive(Debug, Clone)]
pub struct MessageContext<'a> {
    pub kind: DocumentKind,
    pub customer_name: &'a str,
    pub document_number: &'a str,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub items: &'a [LineItem],
    pub totals: &'a TotalsBreakdown,
    pub payment: PaymentInfo<'a>,
    pub delivery_date: Option<NaiveDate>,
    pub company_name: &'a str,
}

impl Order {
    /// Builds the render context for a persisted order.
    pub fn message_context<'a>(&'a self, company_name: &'a str) -> MessageContext<'a> {
        let payment = match (self.payment_term.credit_terms(), self.due_date) {
            (Some(terms), Some(due_date)) => PaymentInfo::Credit {
                label: &terms.label,
                duration_days: terms.duration_days,
                due_date,
            },
            _ => PaymentInfo::FullyPaid,
        };
        MessageContext {
            kind: DocumentKind::Order,
            customer_name: &self.customer_name,
            document_number: &self.document_number,
            date: self.created_date,
            time: self.created_time,
            items: &self.items,
            totals: &self.totals,
            payment,
            delivery_date: self.delivery_date,
            company_name,
        }
    }
}

impl Quotation {
    /// Builds the render context for a quotation. Quotations never carry
    /// payment terms, so the footer reads Fully Paid.
    pub fn message_context<'a>(&'a self, company_name: &'a str) -> MessageContext<'a> {
        MessageContext {
            kind: DocumentKind::Quotation,
            customer_name: &self.customer_name,
            document_number: &self.document_number,
            date: self.created_date,
            time: self.created_time,
            items: &self.items,
            totals: &self.totals,
            payment: PaymentInfo::FullyPaid,
            delivery_date: None,
            company_name,
        }
    }
}

// =============================================================================
// Date Helpers
// =============================================================================

/// en-IN short date: day/month/year without zero padding (26/1/2024).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

// =============================================================================
// Renderers
// =============================================================================

fn items_block(items: &[LineItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "{}) {} — {} {} × {}{} = {}",
                index + 1,
                item.name,
                money::plain(item.quantity),
                item.unit,
                CURRENCY,
                money::plain(item.price_per_unit),
                money::rupees(item.line_total),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn payment_block(payment: &PaymentInfo<'_>) -> String {
    match payment {
        PaymentInfo::Credit {
            label,
            duration_days,
            due_date,
        } => format!(
            "\n\nPayment Status: Credit ({})\nCredit Duration: {} days\nDue Date: {}",
            label,
            duration_days,
            format_date(*due_date)
        ),
        PaymentInfo::FullyPaid => "\n\nPayment Status: Fully Paid".to_string(),
    }
}

/// Renders the canonical WhatsApp message for an order or quotation.
///
/// Deterministic and total: a missing delivery date renders as
/// "To be confirmed" rather than dropping the line.
pub fn whatsapp_message(ctx: &MessageContext<'_>) -> String {
    let delivery = ctx
        .delivery_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "To be confirmed".to_string());

    format!(
        "Hello {customer},\n\
         \n\
         {kind} ID: {number}\n\
         Date: {date} {time}\n\
         \n\
         Items:\n\
         {items}\n\
         \n\
         Subtotal: {subtotal}\n\
         Discount: {discount}\n\
         Tax: {tax}\n\
         Grand Total: {grand}{payment}\n\
         \n\
         Expected delivery: {delivery}\n\
         \n\
         Thank you!\n\
         — {company}",
        customer = ctx.customer_name,
        kind = ctx.kind,
        number = ctx.document_number,
        date = format_date(ctx.date),
        time = format_time(ctx.time),
        items = items_block(ctx.items),
        subtotal = money::rupees(ctx.totals.subtotal),
        discount = money::rupees(ctx.totals.discount_amount),
        tax = money::rupees(ctx.totals.tax_amount),
        grand = money::rupees(ctx.totals.grand_total),
        payment = payment_block(&ctx.payment),
        delivery = delivery,
        company = ctx.company_name,
    )
}

/// Renders the payment reminder text for a credit order.
pub fn reminder_message(
    document_number: &str,
    grand_total: f64,
    due_date: NaiveDate,
    company_name: &str,
) -> String {
    format!(
        "Reminder: Your order {} ({}) payment is due on {}. \
         Please settle at your earliest convenience. Thank you!\n— {}",
        document_number,
        money::rupees(grand_total),
        format_date(due_date),
        company_name,
    )
}

/// Renders the downloadable plain-text invoice for an order.
///
/// Header banner, items, summary block. Kept as a simple formatter on
/// purpose; it shares the context type so the numbers cannot drift from
/// the message.
pub fn invoice_text(ctx: &MessageContext<'_>, phone: &str, notes: Option<&str>) -> String {
    let items = ctx
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "{}. {} - {} {} × {}{} = {}",
                index + 1,
                item.name,
                money::plain(item.quantity),
                item.unit,
                CURRENCY,
                money::plain(item.price_per_unit),
                money::rupees(item.line_total),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let delivery = ctx
        .delivery_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "To be confirmed".to_string());

    format!(
        "\n\
         ========================================\n\
         \x20          {company}\n\
         \x20             INVOICE\n\
         ========================================\n\
         \n\
         {kind} ID: {number}\n\
         Date: {date}\n\
         \n\
         Customer: {customer}\n\
         Phone: +91 {phone}\n\
         \n\
         ========================================\n\
         ITEMS:\n\
         ========================================\n\
         \n\
         {items}\n\
         \n\
         ========================================\n\
         SUMMARY:\n\
         ========================================\n\
         \n\
         Subtotal:     {subtotal}\n\
         Discount:     {discount}\n\
         Tax:          {tax}\n\
         ----------------------------------------\n\
         Grand Total:  {grand}\n\
         \n\
         ========================================\n\
         \n\
         Delivery Date: {delivery}\n\
         Notes: {notes}\n\
         \n\
         Thank you for your business!\n",
        company = ctx.company_name,
        kind = ctx.kind,
        number = ctx.document_number,
        date = format_date(ctx.date),
        customer = ctx.customer_name,
        phone = phone,
        items = items,
        subtotal = money::rupees(ctx.totals.subtotal),
        discount = money::rupees(ctx.totals.discount_amount),
        tax = money::rupees(ctx.totals.tax_amount),
        grand = money::rupees(ctx.totals.grand_total),
        delivery = delivery,
        notes = notes.filter(|n| !n.is_empty()).unwrap_or("None"),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute_totals;
    use crate::types::{DiscountSpec, Unit};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Chair", 2.0, Unit::Pieces, 1200.0),
            LineItem::new("Carpet", 10.0, Unit::SqFt, 50.0),
        ]
    }

    fn sample_ctx<'a>(
        items: &'a [LineItem],
        totals: &'a TotalsBreakdown,
        payment: PaymentInfo<'a>,
    ) -> MessageContext<'a> {
        MessageContext {
            kind: DocumentKind::Order,
            customer_name: "Asha",
            document_number: "ORD-2024-01-001",
            date: date(2024, 1, 26),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            items,
            totals,
            payment,
            delivery_date: None,
            company_name: "Pooja Graphic",
        }
    }

    #[test]
    fn test_format_date_no_padding() {
        assert_eq!(format_date(date(2024, 1, 5)), "5/1/2024");
        assert_eq!(format_date(date(2024, 11, 26)), "26/11/2024");
    }

    #[test]
    fn test_whatsapp_message_fully_paid() {
        let items = sample_items();
        let totals = compute_totals(&items, &DiscountSpec::Percentage(10.0), 18.0);
        let ctx = sample_ctx(&items, &totals, PaymentInfo::FullyPaid);

        let expected = "Hello Asha,\n\
            \n\
            Order ID: ORD-2024-01-001\n\
            Date: 26/1/2024 14:30\n\
            \n\
            Items:\n\
            1) Chair — 2 pieces × ₹1200 = ₹2400.00\n\
            2) Carpet — 10 sq.ft × ₹50 = ₹500.00\n\
            \n\
            Subtotal: ₹2900.00\n\
            Discount: ₹290.00\n\
            Tax: ₹469.80\n\
            Grand Total: ₹3079.80\n\
            \n\
            Payment Status: Fully Paid\n\
            \n\
            Expected delivery: To be confirmed\n\
            \n\
            Thank you!\n\
            — Pooja Graphic";
        assert_eq!(whatsapp_message(&ctx), expected);
    }

    #[test]
    fn test_whatsapp_message_credit_block() {
        let items = sample_items();
        let totals = compute_totals(&items, &DiscountSpec::Percentage(0.0), 0.0);
        let mut ctx = sample_ctx(
            &items,
            &totals,
            PaymentInfo::Credit {
                label: "30 days",
                duration_days: 30,
                due_date: date(2024, 2, 25),
            },
        );
        ctx.delivery_date = Some(date(2024, 2, 1));

        let message = whatsapp_message(&ctx);
        assert!(message.contains(
            "Payment Status: Credit (30 days)\nCredit Duration: 30 days\nDue Date: 25/2/2024"
        ));
        assert!(message.contains("Expected delivery: 2024-02-01"));
        assert!(!message.contains("Fully Paid"));
    }

    #[test]
    fn test_fractional_quantity_rendering() {
        let items = vec![LineItem::new("Carpet", 2.5, Unit::SqFt, 50.5)];
        let totals = compute_totals(&items, &DiscountSpec::Percentage(0.0), 0.0);
        let ctx = sample_ctx(&items, &totals, PaymentInfo::FullyPaid);

        let message = whatsapp_message(&ctx);
        assert!(message.contains("1) Carpet — 2.5 sq.ft × ₹50.5 = ₹126.25"));
    }

    #[test]
    fn test_quotation_heading() {
        let items = sample_items();
        let totals = compute_totals(&items, &DiscountSpec::Percentage(0.0), 0.0);
        let mut ctx = sample_ctx(&items, &totals, PaymentInfo::FullyPaid);
        ctx.kind = DocumentKind::Quotation;
        ctx.document_number = "QUO-2024-01-001";

        let message = whatsapp_message(&ctx);
        assert!(message.contains("Quotation ID: QUO-2024-01-001"));
    }

    #[test]
    fn test_reminder_message() {
        let text = reminder_message("ORD-2024-01-001", 3079.8, date(2024, 1, 31), "Pooja Graphic");
        assert_eq!(
            text,
            "Reminder: Your order ORD-2024-01-001 (₹3079.80) payment is due on 31/1/2024. \
             Please settle at your earliest convenience. Thank you!\n— Pooja Graphic"
        );
    }

    #[test]
    fn test_invoice_layout() {
        let items = sample_items();
        let totals = compute_totals(&items, &DiscountSpec::Percentage(10.0), 18.0);
        let ctx = sample_ctx(&items, &totals, PaymentInfo::FullyPaid);

        let invoice = invoice_text(&ctx, "9876543210", None);
        assert!(invoice.starts_with("\n========================================\n"));
        assert!(invoice.contains("              INVOICE"));
        assert!(invoice.contains("Phone: +91 9876543210"));
        assert!(invoice.contains("1. Chair - 2 pieces × ₹1200 = ₹2400.00"));
        assert!(invoice.contains("Subtotal:     ₹2900.00"));
        assert!(invoice.contains("Grand Total:  ₹3079.80"));
        assert!(invoice.contains("Delivery Date: To be confirmed"));
        assert!(invoice.contains("Notes: None"));
        assert!(invoice.ends_with("Thank you for your business!\n"));
    }

    #[test]
    fn test_invoice_notes_passthrough() {
        let items = sample_items();
        let totals = compute_totals(&items, &DiscountSpec::Percentage(0.0), 0.0);
        let ctx = sample_ctx(&items, &totals, PaymentInfo::FullyPaid);

        let invoice = invoice_text(&ctx, "9876543210", Some("Deliver before Diwali"));
        assert!(invoice.contains("Notes: Deliver before Diwali"));
    }
}
