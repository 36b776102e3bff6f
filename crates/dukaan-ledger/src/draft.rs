//! # Order Draft
//!
//! The order form as it is being filled in.
//!
//! ## Draft vs Commit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Draft (this module)              Commit (ledger)                       │
//! │  ──────────────────               ───────────────                       │
//! │  permissive: blank rows and       strict: invalid input is an          │
//! │  half-typed numbers are           error, nothing mutates               │
//! │  tolerated, totals coerce                                              │
//! │  garbage to zero                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The live preview must always render something while the user types, so
//! resolution silently drops rows that are not usable yet. The ledger is
//! where bad input becomes a hard error.

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveTime};

use crate::ledger::{OrderRequest, QuotationRequest};
use crate::store::CatalogStore;
use dukaan_core::credit::schedule_credit;
use dukaan_core::message::{whatsapp_message, MessageContext, PaymentInfo};
use dukaan_core::pricing::compute_totals;
use dukaan_core::{
    DiscountSpec, DocumentKind, LineItem, PaymentChoice, TotalsBreakdown, Unit,
};

/// Document number shown on previews before one is issued.
const PREVIEW_NUMBER: &str = "ORD-XXXX";

// =============================================================================
// Draft Items
// =============================================================================

/// What a draft row points at: a catalog product or a free-typed line.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemRef {
    /// Catalog product id. Name, unit and price come from the catalog at
    /// resolve time.
    Product(String),
    /// One-off line typed straight into the form.
    Custom {
        name: String,
        unit: Unit,
        price_per_unit: f64,
    },
}

/// One row of the order form.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub item: ItemRef,
    pub quantity: f64,
}

// =============================================================================
// Order Draft
// =============================================================================

/// An order (or quotation) being composed. Nothing here is validated;
/// see the module docs.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer_id: Option<String>,
    pub items: Vec<DraftItem>,
    pub discount: DiscountSpec,
    pub tax_percent: f64,
    pub payment: PaymentChoice,
    pub delivery_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        OrderDraft {
            customer_id: None,
            items: Vec::new(),
            discount: DiscountSpec::default(),
            tax_percent: 0.0,
            payment: PaymentChoice::FullyPaid,
            delivery_date: None,
            notes: None,
        }
    }
}

impl OrderDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        OrderDraft::default()
    }

    /// Appends a row.
    pub fn add_item(&mut self, item: ItemRef, quantity: f64) {
        self.items.push(DraftItem { item, quantity });
    }

    /// Removes a row. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Resolves draft rows into frozen line items.
    ///
    /// Rows that cannot produce a line yet are skipped: unknown product
    /// ids and custom rows with a blank name. Quantities pass through
    /// unchanged; the totals engine coerces non-finite values.
    pub fn resolve_items(&self, catalog: &CatalogStore) -> Vec<LineItem> {
        self.items
            .iter()
            .filter_map(|row| match &row.item {
                ItemRef::Product(id) => {
                    let product = catalog.get(id).ok()?;
                    Some(LineItem::new(
                        product.name.clone(),
                        row.quantity,
                        product.unit.clone(),
                        product.unit_price,
                    ))
                }
                ItemRef::Custom {
                    name,
                    unit,
                    price_per_unit,
                } => {
                    if name.trim().is_empty() {
                        return None;
                    }
                    Some(LineItem::new(
                        name.trim(),
                        row.quantity,
                        unit.clone(),
                        *price_per_unit,
                    ))
                }
            })
            .collect()
    }

    /// Live totals for the form footer. Recomputed from scratch on every
    /// call; the draft stores no derived state.
    pub fn preview_totals(&self, catalog: &CatalogStore) -> TotalsBreakdown {
        let items = self.resolve_items(catalog);
        compute_totals(&items, &self.discount, self.tax_percent)
    }

    /// Live WhatsApp preview with a placeholder document number.
    ///
    /// Uses the same renderer as the committed order, so the preview and
    /// the final message agree byte for byte.
    pub fn preview_message(
        &self,
        catalog: &CatalogStore,
        customer_name: &str,
        date: NaiveDate,
        time: NaiveTime,
        company_name: &str,
    ) -> String {
        let items = self.resolve_items(catalog);
        let totals = compute_totals(&items, &self.discount, self.tax_percent);
        let schedule = schedule_credit(date, &self.payment);

        let payment = match (&self.payment, schedule.due_date) {
            (PaymentChoice::Credit { terms, .. }, Some(due_date)) => PaymentInfo::Credit {
                label: &terms.label,
                duration_days: terms.duration_days,
                due_date,
            },
            _ => PaymentInfo::FullyPaid,
        };

        let ctx = MessageContext {
            kind: DocumentKind::Order,
            customer_name,
            document_number: PREVIEW_NUMBER,
            date,
            time,
            items: &items,
            totals: &totals,
            payment,
            delivery_date: self.delivery_date,
            company_name,
        };
        whatsapp_message(&ctx)
    }

    /// Freezes the draft into an order request for the ledger.
    /// Returns `None` when no customer is selected yet.
    pub fn into_order_request(
        self,
        catalog: &CatalogStore,
        order_date: NaiveDate,
        order_time: NaiveTime,
    ) -> Option<OrderRequest> {
        let items = self.resolve_items(catalog);
        Some(OrderRequest {
            customer_id: self.customer_id?,
            items,
            discount: self.discount,
            tax_percent: self.tax_percent,
            payment: self.payment,
            order_date,
            order_time,
            delivery_date: self.delivery_date,
            notes: self.notes,
        })
    }

    /// Freezes the draft into a quotation request. Payment terms are
    /// dropped; quotations carry a validity window instead.
    pub fn into_quotation_request(
        self,
        catalog: &CatalogStore,
        created_date: NaiveDate,
        created_time: NaiveTime,
        valid_until: NaiveDate,
    ) -> Option<QuotationRequest> {
        let items = self.resolve_items(catalog);
        Some(QuotationRequest {
            customer_id: self.customer_id?,
            items,
            discount: self.discount,
            tax_percent: self.tax_percent,
            created_date,
            created_time,
            valid_until,
            notes: self.notes,
        })
    }
}

// =============================================================================
// Shared Draft State
// =============================================================================

/// Shared handle to the in-progress draft. One draft at a time, matching
/// the single order form.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    draft: Arc<Mutex<OrderDraft>>,
}

impl DraftState {
    pub fn new() -> Self {
        DraftState::default()
    }

    /// Executes a function with read access to the draft.
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderDraft) -> R,
    {
        let draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderDraft) -> R,
    {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&mut draft)
    }

    /// Replaces the draft with a fresh one, returning the old draft.
    /// Called after a successful commit.
    pub fn take(&self) -> OrderDraft {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        std::mem::take(&mut draft)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
