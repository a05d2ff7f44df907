//! pollution-enricher - per-city pollution readings with encyclopedia context
//!
//! For each request the service:
//! - logs into the upstream pollution API and fetches one page of readings
//! - looks every city up in a summary service, in order
//! - returns the cities that resolved, merged with their description and a
//!   best-effort country guess

pub mod api;
pub mod config;
pub mod error;
pub mod lookup;
pub mod service;
pub mod types;
pub mod upstream;

pub use error::{Error, Result};
