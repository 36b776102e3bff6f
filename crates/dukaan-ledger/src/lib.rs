//! # Dukaan Ledger
//!
//! Stateful layer of Dukaan: in-memory stores, the order ledger, draft
//! handling, messaging and reports. All business math lives in
//! `dukaan-core`; this crate owns state and sequencing.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           dukaan-ledger                                 │
//! │                                                                         │
//! │  ┌───────────┐  ┌───────────┐      ┌───────────────────────────┐       │
//! │  │ Catalog   │  │ Customer  │      │        OrderLedger        │       │
//! │  │ Store     │  │ Store     │      │  orders / quotations /    │       │
//! │  └─────┬─────┘  └─────┬─────┘      │  reminders + counters     │       │
//! │        │              │            └──────┬──────────┬─────────┘       │
//! │        ▼              ▼                   │          │                 │
//! │  ┌───────────────────────────┐            ▼          ▼                 │
//! │  │        OrderDraft         │──────► Messenger   reports::*           │
//! │  │  (permissive form state)  │       (dispatch    (KPIs, aging,       │
//! │  └───────────────────────────┘        + log)       periods)           │
//! │                                                                         │
//! │                     ┌────────────────────────┐                          │
//! │                     │      dukaan-core       │                          │
//! │                     │  pricing · credit ·    │                          │
//! │                     │  message · validation  │                          │
//! │                     └────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use dukaan_core::{DiscountSpec, LineItem, PaymentChoice, Unit};
//! use dukaan_ledger::ledger::{OrderLedger, OrderRequest};
//! use dukaan_ledger::store::CustomerStore;
//!
//! let mut customers = CustomerStore::new();
//! let asha = customers.add("Asha Traders", "9876543210", None, None).unwrap();
//!
//! let mut ledger = OrderLedger::new();
//! let order = ledger
//!     .create_order(
//!         &customers,
//!         OrderRequest {
//!             customer_id: asha.id,
//!             items: vec![LineItem::new("Chair", 2.0, Unit::Pieces, 1200.0)],
//!             discount: DiscountSpec::Percentage(10.0),
//!             tax_percent: 18.0,
//!             payment: PaymentChoice::FullyPaid,
//!             order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!             order_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
//!             delivery_date: None,
//!             notes: None,
//!         },
//!     )
//!     .unwrap();
//! assert_eq!(order.document_number, "ORD-2024-01-001");
//! ```

pub mod config;
pub mod draft;
pub mod error;
pub mod ledger;
pub mod messaging;
pub mod reports;
pub mod store;

pub use config::AppConfig;
pub use draft::{DraftItem, DraftState, ItemRef, OrderDraft};
pub use error::{LedgerError, LedgerResult};
pub use ledger::{LedgerState, OrderLedger, OrderRequest, QuotationRequest};
pub use messaging::{MessageLog, MessageSender, Messenger, SendError, SendReceipt, WaLinkSender};
pub use reports::{
    dashboard_kpis, receivables, sales_report, AgingBucket, DashboardKpis, ReceivableRow,
    ReportPeriod, SalesReport,
};
pub use store::{CatalogStore, CustomerStore};
