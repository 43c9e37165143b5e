//! HTTP transport for the collection endpoints.

mod client;

pub use client::{ApiClient, ApiError, CollectionQuery};
