//! `salesbook-cli`
//!
//! **Responsibility:** thin command-line presentation layer over the record
//! stores. It loads configuration, opens both stores against the on-disk
//! backend and maps the `dashboard`, `add-sale` and `locations` views onto
//! store operations. Destructive actions are confirmed here, never in the
//! stores.

pub mod config;
pub mod render;
pub mod state;

pub use config::{AppConfig, ConfigError, load_app_config};
pub use state::AppState;
