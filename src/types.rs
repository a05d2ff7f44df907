//! Core data types
//!
//! Every value here lives for a single inbound request.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lookup::is_blank;

/// Sentinel used when no country could be read out of a description.
pub const COUNTRY_NOT_FOUND: &str = "Country not found";

/// Fallback used when the summary service returns no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Fixed login pair for the pollution API
#[derive(Clone, Deserialize, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A validated request for one page of pollution readings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollutionQuery {
    pub country: String,
    pub page: u64,
    pub limit: u64,
}

/// One upstream pollution reading.
///
/// Only `name` is interpreted; `pollution` is passed through untouched.
/// An absent `pollution` stays absent, an explicit `null` stays `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PollutionRecord {
    pub name: String,
    #[serde(default, deserialize_with = "present")]
    pub pollution: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Parsed body of the upstream pollution listing
#[derive(Debug, Clone, Deserialize)]
pub struct PollutionPage {
    pub results: Vec<PollutionRecord>,
}

/// Metadata resolved from the summary lookup service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityInfo {
    pub name: String,
    pub description: String,
    pub country: String,
}

/// A pollution record merged with its city metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedCity {
    pub name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pollution: Option<Value>,
    pub description: String,
}

impl EnrichedCity {
    pub fn new(record: &PollutionRecord, info: CityInfo) -> Self {
        Self {
            name: record.name.trim_matches(is_blank).to_string(),
            country: info.country,
            pollution: record.pollution.clone(),
            description: info.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            username: "testuser".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{creds:?}");
        assert!(printed.contains("testuser"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn pollution_page_ignores_unknown_fields() {
        let page: PollutionPage = serde_json::from_value(json!({
            "meta": { "page": 1 },
            "results": [
                { "name": "Warsaw", "pollution": 51.2, "extra": true },
                { "name": "Gdansk" },
                { "name": "Poznan", "pollution": null }
            ]
        }))
        .unwrap();

        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].pollution, Some(json!(51.2)));
        assert_eq!(page.results[1].pollution, None);
        assert_eq!(page.results[2].pollution, Some(Value::Null));
    }

    #[test]
    fn absent_pollution_is_left_out_of_output() {
        let info = CityInfo {
            name: "Gdańsk".into(),
            description: "City in Poland".into(),
            country: "Poland".into(),
        };
        let without = PollutionRecord {
            name: "Gdansk".into(),
            pollution: None,
        };
        let with_null = PollutionRecord {
            name: "Gdansk".into(),
            pollution: Some(Value::Null),
        };

        let out = serde_json::to_value(EnrichedCity::new(&without, info.clone())).unwrap();
        assert!(out.get("pollution").is_none());

        let out = serde_json::to_value(EnrichedCity::new(&with_null, info)).unwrap();
        assert_eq!(out["pollution"], Value::Null);
        assert!(out.get("pollution").is_some());
    }

    #[test]
    fn enriched_city_uses_trimmed_upstream_name() {
        let record = PollutionRecord {
            name: "  Krakow ".into(),
            pollution: Some(json!(80)),
        };
        let info = CityInfo {
            name: "Kraków".into(),
            description: "City in Poland".into(),
            country: "Poland".into(),
        };

        let city = EnrichedCity::new(&record, info);
        assert_eq!(city.name, "Krakow");
        assert_eq!(city.country, "Poland");
        assert_eq!(city.pollution, Some(json!(80)));

        let record = PollutionRecord {
            name: "\u{feff}Gdansk\u{feff}".into(),
            pollution: None,
        };
        let info = CityInfo {
            name: "Gdańsk".into(),
            description: "Port city in Poland".into(),
            country: "Poland".into(),
        };
        assert_eq!(EnrichedCity::new(&record, info).name, "Gdansk");
    }
}
