//! `salesbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the record
//! stores (no storage or presentation concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod timestamp;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{LocationId, SaleId};
