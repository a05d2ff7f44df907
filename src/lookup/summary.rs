//! Summary endpoint client (`GET {base}/<encoded-name>`)

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{country_or_sentinel, normalize_city_name, CityLookup};
use crate::types::{CityInfo, NO_DESCRIPTION};
use crate::Result;

#[derive(Debug, Deserialize)]
struct SummaryDto {
    title: Option<String>,
    description: Option<String>,
}

impl SummaryDto {
    /// `None` when the page has no title or is a "Not found" placeholder.
    fn into_city_info(self) -> Option<CityInfo> {
        let title = self.title?;
        if title.contains("Not found") {
            return None;
        }

        // An empty description counts as missing.
        let description = self.description.filter(|d| !d.is_empty());
        let country = country_or_sentinel(description.as_deref());
        Some(CityInfo {
            name: title,
            description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            country,
        })
    }
}

/// Looks cities up against an encyclopedia summary service
pub struct SummaryClient {
    client: Client,
    base_url: String,
}

impl SummaryClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL for an already-normalized name
    pub fn summary_url(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(name)
        )
    }

    async fn fetch(&self, name: &str) -> Result<Option<CityInfo>> {
        let url = self.summary_url(name);
        tracing::debug!(city = %name, %url, "Fetching city info");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::info!(city = %name, "City not found in summary service");
            return Ok(None);
        }
        if status != StatusCode::OK {
            tracing::info!(city = %name, %status, "Invalid city");
            return Ok(None);
        }

        let body = response.bytes().await?;
        let summary: SummaryDto = serde_json::from_slice(&body)?;

        match summary.into_city_info() {
            Some(info) => {
                tracing::info!(
                    city = %name,
                    title = %info.name,
                    country = %info.country,
                    "Valid city"
                );
                Ok(Some(info))
            }
            None => {
                tracing::info!(city = %name, "Invalid city");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl CityLookup for SummaryClient {
    async fn resolve(&self, city: &str) -> Option<CityInfo> {
        let name = normalize_city_name(city);
        if name.is_empty() {
            tracing::warn!("City name is required");
            return None;
        }

        match self.fetch(&name).await {
            Ok(info) => info,
            Err(err) => {
                tracing::warn!(city = %name, error = %err, "Error fetching city info");
                None
            }
        }
    }
}
