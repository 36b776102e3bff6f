//! # Credit & Reminder Scheduler
//!
//! Derives the due date and reminder schedule for a payment selection.
//!
//! ## Scheduling Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order_date ──(+ duration_days)──► due_date                             │
//! │                                       │                                 │
//! │              owner lead ◄─(− days)────┤                                 │
//! │           customer lead ◄─(− days)────┘                                 │
//! │                                                                         │
//! │  FullyPaid: no due date, no reminders                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calendar-day arithmetic only, no timezone normalization: dates are
//! treated as local calendar dates throughout.
//!
//! A reminder lead longer than the credit duration yields a reminder date
//! before the order date. That is allowed; the shop owner asked for it.

use chrono::{Days, NaiveDate};

use crate::types::{PaymentChoice, ReminderRole};

/// One reminder to be persisted by the ledger (which assigns the id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSpec {
    pub role: ReminderRole,
    pub days_before_due: u32,
    pub reminder_date: NaiveDate,
}

/// Output of the scheduler: a due date iff the selection is Credit, plus
/// zero or more reminder specs in fixed role order (owner, then customer).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreditSchedule {
    pub due_date: Option<NaiveDate>,
    pub reminders: Vec<ReminderSpec>,
}

/// Computes the credit schedule for an order.
///
/// Pure function of its inputs. For `FullyPaid` the schedule is empty.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use dukaan_core::credit::schedule_credit;
/// use dukaan_core::types::{CreditTerms, PaymentChoice, ReminderConfig};
///
/// let choice = PaymentChoice::Credit {
///     terms: CreditTerms { label: "30 days".into(), duration_days: 30 },
///     reminders: Some(ReminderConfig {
///         owner_days_before: None,
///         customer_days_before: Some(7),
///     }),
/// };
/// let schedule = schedule_credit(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), &choice);
/// assert_eq!(schedule.due_date, NaiveDate::from_ymd_opt(2024, 1, 31));
/// assert_eq!(schedule.reminders[0].reminder_date, NaiveDate::from_ymd_opt(2024, 1, 24).unwrap());
/// ```
pub fn schedule_credit(order_date: NaiveDate, choice: &PaymentChoice) -> CreditSchedule {
    let (terms, config) = match choice {
        PaymentChoice::FullyPaid => return CreditSchedule::default(),
        PaymentChoice::Credit { terms, reminders } => (terms, reminders),
    };

    let due_date = order_date + Days::new(terms.duration_days as u64);

    let mut reminders = Vec::new();
    if let Some(config) = config {
        let roles = [
            (ReminderRole::Owner, config.owner_days_before),
            (ReminderRole::Customer, config.customer_days_before),
        ];
        for (role, days_before) in roles {
            if let Some(days) = days_before {
                reminders.push(ReminderSpec {
                    role,
                    days_before_due: days,
                    reminder_date: due_date - Days::new(days as u64),
                });
            }
        }
    }

    CreditSchedule {
        due_date: Some(due_date),
        reminders,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
