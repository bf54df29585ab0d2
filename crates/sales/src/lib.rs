//! Sale records module.
//!
//! This crate owns the newest-first collection of logged sales and its
//! write-through persistence under the `sales_items` key.

pub mod record;
pub mod store;

pub use record::{SaleInput, SaleRecord};
pub use store::SalesStore;
