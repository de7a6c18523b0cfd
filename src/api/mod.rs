//! API client for the music catalog service.

pub mod client;
#[cfg(test)]
mod client_tests;
pub mod retry;

pub use client::{CatalogClient, CatalogClientBuilder};
pub use retry::RetryPolicy;
