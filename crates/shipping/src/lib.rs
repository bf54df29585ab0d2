//! Shipping locations module.
//!
//! Owns the insertion-ordered list of delivery/pickup destinations that sale
//! records may point at. Sale records only hold a weak `LocationId`; nothing
//! here reaches back into them.

pub mod location;
pub mod store;

pub use location::{DEFAULT_LOCATION_NAME, ShippingLocation, UNKNOWN_LOCATION, resolve_name};
pub use store::LocationsStore;
