//! # In-Memory Stores
//!
//! Each store owns its collection outright and exposes explicit
//! create/find/update operations. There is no ambient global state;
//! callers hold the stores and pass them to the components that need
//! them.

pub mod catalog;
pub mod customer;

pub use catalog::CatalogStore;
pub use customer::CustomerStore;
