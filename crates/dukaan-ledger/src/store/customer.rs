//! # Customer Store
//!
//! Owns the customer directory.
//!
//! ## Notification Status
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add() ──► NotConnected ──(first successful dispatch)──► Connected     │
//! │                                                                         │
//! │  The flip happens in the messaging layer, never on failed attempts.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use dukaan_core::validation::{validate_name, validate_phone};
use dukaan_core::{Customer, NotificationStatus};

/// In-memory customer directory.
#[derive(Debug, Clone, Default)]
pub struct CustomerStore {
    customers: Vec<Customer>,
}

impl CustomerStore {
    /// Creates an empty directory.
    pub fn new() -> Self {
        CustomerStore::default()
    }

    /// Adds a customer. Phone must be exactly 10 digits, local format.
    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<String>,
        notes: Option<String>,
    ) -> LedgerResult<Customer> {
        validate_name("customer name", name)?;
        validate_phone(phone)?;

        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            phone: phone.to_string(),
            email,
            notes,
            notification_status: NotificationStatus::NotConnected,
            created_at: Utc::now(),
        };

        debug!(customer_id = %customer.id, name = %customer.name, "Customer added");
        self.customers.push(customer.clone());
        Ok(customer)
    }

    /// Fetches a customer by id.
    pub fn get(&self, id: &str) -> LedgerResult<&Customer> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| LedgerError::not_found("Customer", id))
    }

    /// All customers, in insertion order.
    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    /// Marks a customer as reachable over the message channel.
    /// Called by the messaging layer after a successful dispatch.
    pub fn mark_connected(&mut self, id: &str) -> LedgerResult<()> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LedgerError::not_found("Customer", id))?;

        customer.notification_status = NotificationStatus::Connected;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
