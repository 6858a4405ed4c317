//! Storefront HTTP module
//!
//! Wire types shared with the Auth and Catalog APIs, plus (behind the
//! `client` feature) a reqwest-based client for both.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{StorefrontClient, StorefrontClientBuilder, error::ClientError};
