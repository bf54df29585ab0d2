//! `salesbook-storage`
//!
//! **Responsibility:** load-at-startup / save-on-change bridge between the
//! in-memory record stores and a local key-value backend.
//!
//! Each collection lives under one fixed key as a JSON array. Loading fails
//! soft (an unreadable entry degrades to "no data"), saving overwrites the
//! whole entry and reports failures as non-fatal [`PersistenceError`]s.

pub mod backend;
pub mod bridge;
pub mod file;

pub use backend::{InMemoryBackend, KeyValueBackend, StorageError};
pub use bridge::{Loaded, PersistenceBridge, PersistenceError};
pub use file::{FileBackend, default_data_dir};

/// Backend key holding the sale records collection.
pub const SALES_KEY: &str = "sales_items";

/// Backend key holding the shipping locations collection.
pub const LOCATIONS_KEY: &str = "shipping_locations";
