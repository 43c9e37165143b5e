//! Shopkeep
//!
//! A client for REST record collections: customers, categories and
//! products. One generic collection manager holds the local snapshot,
//! overlays unsaved edits, projects the display rows and synchronizes
//! mutations back to the server.

pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod store;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
