//! # Catalog Store
//!
//! Owns the product catalog.
//!
//! ## Key Operations
//! - Add / fetch / list / remove products
//! - Seeded defaults for a fresh session
//!
//! Removal is a hard delete: order lines snapshot the product name, unit
//! and price at creation time, so history survives catalog edits.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use dukaan_core::validation::{validate_name, validate_price};
use dukaan_core::{Product, Unit};

/// In-memory product catalog.
///
/// ## Usage
/// ```rust
/// use dukaan_ledger::store::CatalogStore;
/// use dukaan_core::Unit;
///
/// let mut catalog = CatalogStore::new();
/// let chair = catalog.add("Chair", Unit::Pieces, 1200.0).unwrap();
/// assert_eq!(catalog.get(&chair.id).unwrap().unit_price, 1200.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        CatalogStore::default()
    }

    /// Creates a catalog pre-loaded with the shop's standard items.
    pub fn with_defaults() -> Self {
        let mut store = CatalogStore::new();
        let defaults: [(&str, Unit, f64); 5] = [
            ("Chair", Unit::Pieces, 1200.0),
            ("Table", Unit::Pieces, 2500.0),
            ("Carpet", Unit::SqFt, 50.0),
            ("Tile", Unit::SqFt, 120.0),
            ("Cushion", Unit::Pieces, 400.0),
        ];
        for (name, unit, price) in defaults {
            // Seed data is known-good; validation cannot fail here
            let _ = store.add(name, unit, price);
        }
        store
    }

    /// Adds a product to the catalog.
    pub fn add(&mut self, name: &str, unit: Unit, unit_price: f64) -> LedgerResult<Product> {
        validate_name("product name", name)?;
        validate_price(unit_price)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            unit,
            unit_price,
            created_at: Utc::now(),
        };

        debug!(product_id = %product.id, name = %product.name, "Product added to catalog");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Fetches a product by id.
    pub fn get(&self, id: &str) -> LedgerResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| LedgerError::not_found("Product", id))
    }

    /// All products, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Removes a product. Existing order lines are unaffected.
    pub fn remove(&mut self, id: &str) -> LedgerResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| LedgerError::not_found("Product", id))?;

        let removed = self.products.remove(index);
        debug!(product_id = %removed.id, name = %removed.name, "Product removed from catalog");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
