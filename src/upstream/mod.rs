//! Upstream pollution API
//!
//! Authentication and the paged pollution listing live behind one trait so
//! the request handler can be driven without a network.

use async_trait::async_trait;

use crate::types::{PollutionPage, PollutionQuery};
use crate::Result;

pub mod client;

pub use client::PollutionApiClient;

/// Source of pollution readings
#[async_trait]
pub trait PollutionSource: Send + Sync {
    /// Exchange the configured credentials for a bearer token
    async fn login(&self) -> Result<String>;

    /// Fetch a single page of readings using a token from [`login`](Self::login)
    async fn fetch_pollution(&self, token: &str, query: &PollutionQuery) -> Result<PollutionPage>;
}
