//! Commerce API client

pub mod client;

// Re-export the client for convenience
pub use client::ShopClient;
