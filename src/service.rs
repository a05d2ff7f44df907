//! Pollution data orchestration
//!
//! One request runs login, listing and per-city lookups strictly in order.
//! Cities are looked up one at a time so the output keeps upstream order.

use std::sync::Arc;

use reqwest::Client;

use crate::config::{AppConfig, HttpSection};
use crate::lookup::{is_blank, CityLookup, SummaryClient};
use crate::types::{EnrichedCity, PollutionQuery, PollutionRecord};
use crate::upstream::{PollutionApiClient, PollutionSource};
use crate::Result;

/// Build the shared outbound HTTP client.
///
/// Certificate verification is left at reqwest's defaults.
pub fn build_http_client(http: &HttpSection) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(http.timeout())
        .user_agent(http.user_agent.clone())
        .build()
}

pub struct PollutionService {
    source: Arc<dyn PollutionSource>,
    lookup: Arc<dyn CityLookup>,
}

impl PollutionService {
    pub fn new(source: Arc<dyn PollutionSource>, lookup: Arc<dyn CityLookup>) -> Self {
        Self { source, lookup }
    }

    /// Wire the reqwest-backed clients from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = build_http_client(&config.http)?;

        let source = PollutionApiClient::new(
            client.clone(),
            config.api.base_url.clone(),
            config.credentials(),
        );
        let lookup = SummaryClient::new(client, config.lookup.base_url.clone());

        Ok(Self::new(Arc::new(source), Arc::new(lookup)))
    }

    /// Fetch one page of readings and enrich every city that resolves.
    ///
    /// A fresh token is requested on every call.
    pub async fn pollution_data(&self, query: &PollutionQuery) -> Result<Vec<EnrichedCity>> {
        let token = self.source.login().await?;
        let page = self.source.fetch_pollution(&token, query).await?;

        let cities = enrich_records(self.lookup.as_ref(), &page.results).await;
        tracing::info!(
            received = page.results.len(),
            enriched = cities.len(),
            "Cities with valid info"
        );

        Ok(cities)
    }
}

/// Resolve each record in order, dropping those without city info.
pub async fn enrich_records(
    lookup: &dyn CityLookup,
    records: &[PollutionRecord],
) -> Vec<EnrichedCity> {
    let mut cities = Vec::with_capacity(records.len());

    for record in records {
        let name = record.name.trim_matches(is_blank);
        match lookup.resolve(name).await {
            Some(info) => cities.push(EnrichedCity::new(record, info)),
            None => tracing::info!(
                city = %name,
                pollution = ?record.pollution,
                "City info not available"
            ),
        }
    }

    cities
}
