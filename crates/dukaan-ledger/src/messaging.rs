//! # Messaging
//!
//! Formats outbound texts, hands them to a dispatch channel, and records
//! every attempt in an append-only log.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order / Quotation / Reminder                                           │
//! │        │                                                                │
//! │        ▼ (format via dukaan-core renderers)                             │
//! │  body + "91" ++ local phone                                             │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  MessageSender::send()                                                  │
//! │        │                                                                │
//! │    ┌───┴──────────────┐                                                 │
//! │    ▼ Ok               ▼ Err                                             │
//! │  log Sent           log Failed                                          │
//! │  customer →         (customer status untouched)                        │
//! │  Connected                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The log gets an entry either way; failures are history too.

use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::OrderLedger;
use crate::store::CustomerStore;
use dukaan_core::message::{invoice_text, reminder_message, whatsapp_message};
use dukaan_core::{
    MessageKind, MessageLogEntry, MessageStatus, Order, Quotation, ReminderRole,
};

// =============================================================================
// Sender Trait
// =============================================================================

/// Proof that a message left through the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Channel-specific handle, e.g. the wa.me deep link that was opened.
    pub link: String,
}

/// A dispatch attempt that did not go through.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct SendError {
    pub reason: String,
}

/// The outbound channel. Implementations must not mutate application
/// state; the [`Messenger`] owns logging and status updates.
pub trait MessageSender {
    /// Sends `body` to `phone` (full international form, digits only).
    fn send(&self, phone: &str, body: &str) -> Result<SendReceipt, SendError>;
}

/// Dispatches by producing a WhatsApp click-to-chat deep link.
///
/// Building a link cannot fail, so this sender always succeeds; a real
/// gateway integration would return errors from its API here.
#[derive(Debug, Clone, Default)]
pub struct WaLinkSender;

impl MessageSender for WaLinkSender {
    fn send(&self, phone: &str, body: &str) -> Result<SendReceipt, SendError> {
        let link = format!("https://wa.me/{}?text={}", phone, urlencoding::encode(body));
        info!(phone = %phone, bytes = body.len(), "WhatsApp link built");
        Ok(SendReceipt { link })
    }
}

// =============================================================================
// Message Log
// =============================================================================

/// Append-only record of every dispatch attempt.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<MessageLogEntry>,
}

impl MessageLog {
    pub fn new() -> Self {
        MessageLog::default()
    }

    fn record(&mut self, entry: MessageLogEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn all(&self) -> &[MessageLogEntry] {
        &self.entries
    }

    /// Entries about one order or quotation.
    pub fn for_document(&self, document_id: &str) -> Vec<&MessageLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.document_id == document_id)
            .collect()
    }
}

// =============================================================================
// Messenger
// =============================================================================

/// Country code prepended at the dispatch boundary. Stored phones stay
/// in the 10-digit local form.
const COUNTRY_CODE: &str = "91";

/// Formats, dispatches and logs outbound messages.
pub struct Messenger<S: MessageSender> {
    sender: S,
    log: MessageLog,
}

impl Default for Messenger<WaLinkSender> {
    fn default() -> Self {
        Messenger::new(WaLinkSender)
    }
}

impl<S: MessageSender> Messenger<S> {
    pub fn new(sender: S) -> Self {
        Messenger {
            sender,
            log: MessageLog::new(),
        }
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Sends the canonical order message to the order's customer.
    pub fn send_order_message(
        &mut self,
        customers: &mut CustomerStore,
        order: &Order,
        company_name: &str,
    ) -> LedgerResult<MessageLogEntry> {
        let body = whatsapp_message(&order.message_context(company_name));
        self.dispatch(
            customers,
            &order.customer_id,
            &order.customer_phone,
            &order.id,
            body,
            MessageKind::Order,
        )
    }

    /// Sends the quotation message to the quotation's customer.
    pub fn send_quotation_message(
        &mut self,
        customers: &mut CustomerStore,
        quotation: &Quotation,
        company_name: &str,
    ) -> LedgerResult<MessageLogEntry> {
        let body = whatsapp_message(&quotation.message_context(company_name));
        self.dispatch(
            customers,
            &quotation.customer_id,
            &quotation.customer_phone,
            &quotation.id,
            body,
            MessageKind::Quotation,
        )
    }

    /// Sends a payment reminder for a credit order.
    ///
    /// Fails with [`LedgerError::NotCredit`] when the order carries no
    /// due date; there is nothing to remind about.
    pub fn send_payment_reminder(
        &mut self,
        customers: &mut CustomerStore,
        order: &Order,
        company_name: &str,
    ) -> LedgerResult<MessageLogEntry> {
        let due_date = order.due_date.ok_or_else(|| LedgerError::NotCredit {
            id: order.id.clone(),
        })?;

        let body = reminder_message(
            &order.document_number,
            order.grand_total(),
            due_date,
            company_name,
        );
        self.dispatch(
            customers,
            &order.customer_id,
            &order.customer_phone,
            &order.id,
            body,
            MessageKind::Reminder,
        )
    }

    /// Fires one scheduled reminder immediately and marks it sent.
    ///
    /// Customer reminders go out over the channel; owner reminders are an
    /// internal nudge and produce no outbound message. Returns the log
    /// entry for customer reminders, `None` for owner reminders.
    pub fn send_reminder_now(
        &mut self,
        customers: &mut CustomerStore,
        ledger: &mut OrderLedger,
        reminder_id: &str,
        company_name: &str,
    ) -> LedgerResult<Option<MessageLogEntry>> {
        let reminder = ledger.get_reminder(reminder_id)?.clone();
        let order = ledger.get_order(&reminder.order_id)?.clone();

        let entry = match reminder.role {
            ReminderRole::Customer => {
                Some(self.send_payment_reminder(customers, &order, company_name)?)
            }
            ReminderRole::Owner => {
                info!(
                    order_id = %order.id,
                    document_number = %order.document_number,
                    "Owner payment reminder raised"
                );
                None
            }
        };

        ledger.mark_reminder_sent(reminder_id)?;
        Ok(entry)
    }

    /// Renders the plain-text invoice for an order. Pure formatting, no
    /// dispatch and no log entry.
    pub fn invoice_for(&self, order: &Order, company_name: &str) -> String {
        invoice_text(
            &order.message_context(company_name),
            &order.customer_phone,
            order.notes.as_deref(),
        )
    }

    fn dispatch(
        &mut self,
        customers: &mut CustomerStore,
        customer_id: &str,
        local_phone: &str,
        document_id: &str,
        body: String,
        kind: MessageKind,
    ) -> LedgerResult<MessageLogEntry> {
        let phone = format!("{}{}", COUNTRY_CODE, local_phone);
        let outcome = self.sender.send(&phone, &body);

        let status = match &outcome {
            Ok(_) => MessageStatus::Sent,
            Err(_) => MessageStatus::Failed,
        };
        let entry = MessageLogEntry {
            id: Uuid::new_v4().to_string(),
            document_id: document_id.to_string(),
            phone,
            body,
            kind,
            status,
            timestamp: Utc::now(),
        };
        self.log.record(entry.clone());

        match outcome {
            Ok(_) => {
                customers.mark_connected(customer_id)?;
                info!(document_id = %document_id, kind = ?kind, "Message dispatched");
                Ok(entry)
            }
            Err(err) => Err(LedgerError::DispatchFailed {
                reason: err.reason,
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::OrderRequest;
    use chrono::{NaiveDate, NaiveTime};
    use dukaan_core::{
        CreditTerms, DiscountSpec, LineItem, NotificationStatus, PaymentChoice, ReminderConfig,
        ReminderStatus, Unit,
    };

    /// Sender that fails on demand and remembers what it saw.
    struct FakeSender {
        fail: bool,
    }

    impl MessageSender for FakeSender {
        fn send(&self, phone: &str, _body: &str) -> Result<SendReceipt, SendError> {
            if self.fail {
                Err(SendError {
                    reason: "channel down".to_string(),
                })
            } else {
                Ok(SendReceipt {
                    link: format!("fake://{}", phone),
                })
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup(credit: bool) -> (CustomerStore, OrderLedger, Order) {
        let mut customers = CustomerStore::new();
        let asha = customers
            .add("Asha Traders", "9876543210", None, None)
            .unwrap();

        let payment = if credit {
            PaymentChoice::Credit {
                terms: CreditTerms {
                    label: "30 days".to_string(),
                    duration_days: 30,
                },
                reminders: Some(ReminderConfig::default()),
            }
        } else {
            PaymentChoice::FullyPaid
        };

        let mut ledger = OrderLedger::new();
        let order = ledger
            .create_order(
                &customers,
                OrderRequest {
                    customer_id: asha.id,
                    items: vec![LineItem::new("Chair", 2.0, Unit::Pieces, 1200.0)],
                    discount: DiscountSpec::Percentage(0.0),
                    tax_percent: 0.0,
                    payment,
                    order_date: date(2024, 1, 1),
                    order_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
                    delivery_date: None,
                    notes: None,
                },
            )
            .unwrap();
        (customers, ledger, order)
    }

    #[test]
    fn test_wa_link_sender_encodes_body() {
        let receipt = WaLinkSender
            .send("919876543210", "Hello Asha,\n₹100 & more")
            .unwrap();
        assert!(receipt.link.starts_with("https://wa.me/919876543210?text="));
        assert!(receipt.link.contains("Hello%20Asha%2C%0A"));
        assert!(!receipt.link.contains('&'));
    }

    #[test]
    fn test_send_order_message_success() {
        let (mut customers, _ledger, order) = setup(false);
        let mut messenger = Messenger::new(FakeSender { fail: false });

        let entry = messenger
            .send_order_message(&mut customers, &order, "Pooja Graphic")
            .unwrap();

        assert_eq!(entry.phone, "919876543210");
        assert_eq!(entry.kind, MessageKind::Order);
        assert_eq!(entry.status, MessageStatus::Sent);
        assert!(entry.body.contains("Order ID: ORD-2024-01-001"));

        // First successful dispatch flips the customer to Connected
        assert_eq!(
            customers.get(&order.customer_id).unwrap().notification_status,
            NotificationStatus::Connected
        );
        assert_eq!(messenger.log().for_document(&order.id).len(), 1);
    }

    #[test]
    fn test_send_failure_logs_and_leaves_customer_untouched() {
        let (mut customers, _ledger, order) = setup(false);
        let mut messenger = Messenger::new(FakeSender { fail: true });

        let err = messenger
            .send_order_message(&mut customers, &order, "Pooja Graphic")
            .unwrap_err();
        assert!(matches!(err, LedgerError::DispatchFailed { .. }));

        // The attempt is still logged, as Failed
        let entries = messenger.log().for_document(&order.id);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, MessageStatus::Failed);

        assert_eq!(
            customers.get(&order.customer_id).unwrap().notification_status,
            NotificationStatus::NotConnected
        );
    }

    #[test]
    fn test_payment_reminder_requires_credit() {
        let (mut customers, _ledger, order) = setup(false);
        let mut messenger = Messenger::new(FakeSender { fail: false });

        let err = messenger
            .send_payment_reminder(&mut customers, &order, "Pooja Graphic")
            .unwrap_err();
        assert!(matches!(err, LedgerError::NotCredit { .. }));
        assert!(messenger.log().all().is_empty());
    }

    #[test]
    fn test_payment_reminder_body() {
        let (mut customers, _ledger, order) = setup(true);
        let mut messenger = Messenger::new(FakeSender { fail: false });

        let entry = messenger
            .send_payment_reminder(&mut customers, &order, "Pooja Graphic")
            .unwrap();
        assert_eq!(entry.kind, MessageKind::Reminder);
        assert_eq!(
            entry.body,
            "Reminder: Your order ORD-2024-01-001 (₹2400.00) payment is due on 31/1/2024. \
             Please settle at your earliest convenience. Thank you!\n— Pooja Graphic"
        );
    }

    #[test]
    fn test_send_reminder_now_customer_role_dispatches() {
        let (mut customers, mut ledger, order) = setup(true);
        let mut messenger = Messenger::new(FakeSender { fail: false });

        let customer_reminder = ledger
            .reminders_for_order(&order.id)
            .into_iter()
            .find(|r| r.role == ReminderRole::Customer)
            .unwrap()
            .id
            .clone();

        let entry = messenger
            .send_reminder_now(&mut customers, &mut ledger, &customer_reminder, "Pooja Graphic")
            .unwrap();
        assert!(entry.is_some());
        assert_eq!(
            ledger.get_reminder(&customer_reminder).unwrap().status,
            ReminderStatus::Sent
        );
    }

    #[test]
    fn test_send_reminder_now_owner_role_is_local() {
        let (mut customers, mut ledger, order) = setup(true);
        let mut messenger = Messenger::new(FakeSender { fail: false });

        let owner_reminder = ledger
            .reminders_for_order(&order.id)
            .into_iter()
            .find(|r| r.role == ReminderRole::Owner)
            .unwrap()
            .id
            .clone();

        let entry = messenger
            .send_reminder_now(&mut customers, &mut ledger, &owner_reminder, "Pooja Graphic")
            .unwrap();
        assert!(entry.is_none());
        assert!(messenger.log().all().is_empty());
        assert_eq!(
            ledger.get_reminder(&owner_reminder).unwrap().status,
            ReminderStatus::Sent
        );
    }

    #[test]
    fn test_invoice_for_order() {
        let (_customers, _ledger, order) = setup(false);
        let messenger = Messenger::default();

        let invoice = messenger.invoice_for(&order, "Pooja Graphic");
        assert!(invoice.contains("INVOICE"));
        assert!(invoice.contains("Order ID: ORD-2024-01-001"));
        assert!(invoice.contains("Phone: +91 9876543210"));
        assert!(invoice.contains("Grand Total:  ₹2400.00"));
    }
}
