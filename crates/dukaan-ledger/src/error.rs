//! # Ledger Error Type
//!
//! Unified error type for stateful operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Dukaan                                 │
//! │                                                                         │
//! │  Caller                       Ledger Layer                              │
//! │  ──────                       ────────────                              │
//! │                                                                         │
//! │  create_order(request)                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Lookup failure?  ── NotFound { entity, id } ───────────────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Rule violation?  ── CoreError / ValidationError ── wrapped ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ── store mutates, order returned ──────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Any error leaves every store untouched. No partial order persists.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use dukaan_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors from stateful ledger, store and messaging operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A referenced entity does not exist.
    ///
    /// Lookup failures are surfaced explicitly rather than silently
    /// no-oping, so the ledger stays auditable.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Quotation conversion was attempted a second time.
    #[error("quotation {document_number} already converted to order {order_id}")]
    AlreadyConverted {
        document_number: String,
        order_id: String,
    },

    /// A payment reminder was requested for an order with no due date.
    #[error("order {id} has no outstanding credit")]
    NotCredit { id: String },

    /// Outbound dispatch failed. The attempt is still recorded in the
    /// message log before this surfaces.
    #[error("message dispatch failed: {reason}")]
    DispatchFailed { reason: String },

    /// Business rule violation from dukaan-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl LedgerError {
    /// Creates a not found error.
    pub fn not_found(entity: &str, id: &str) -> Self {
        LedgerError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

/// Validation errors route through CoreError so callers can match on a
/// single wrapper variant.
impl From<ValidationError> for LedgerError {
    fn from(err: ValidationError) -> Self {
        LedgerError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================
