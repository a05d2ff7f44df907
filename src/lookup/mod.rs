//! City metadata lookup
//!
//! A lookup never fails the request: anything other than a usable summary
//! comes back as `None` and the city is dropped by the caller.

use async_trait::async_trait;

use crate::types::CityInfo;

pub mod country;
pub mod normalize;
pub mod summary;

pub use country::{country_or_sentinel, extract_country};
pub use normalize::{is_blank, normalize_city_name};
pub use summary::SummaryClient;

/// Resolves descriptive metadata for a city name
#[async_trait]
pub trait CityLookup: Send + Sync {
    async fn resolve(&self, city: &str) -> Option<CityInfo>;
}
