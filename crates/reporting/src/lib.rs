//! Derived views over the record stores.
//!
//! Everything here is a pure function of the current snapshots and is
//! recomputed on every call.

pub mod dashboard;
pub mod totals;

pub use dashboard::{Dashboard, SaleRow};
pub use totals::{
    LocationRef, LocationTotal, count, line_total, total_amount, total_quantity,
    totals_by_location,
};
