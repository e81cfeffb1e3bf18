//! ConectaIA Core - Rust business logic for the ConectaIA directory app
//!
//! This library implements the core business logic behind the ConectaIA
//! screens: the curated AI-tool catalog, the discovery filter engine, the
//! on-device session store, and the account API client.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record/Enum)]).

pub mod api;
pub mod catalog;
pub mod database;
pub mod filter;
pub mod interface;
pub mod models;
mod store;
pub mod tutorials;
pub mod validation;

pub use interface::*;
pub use store::ConectaStore;

uniffi::setup_scaffolding!("conecta");
