//! API handlers

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::api::{validation, AppState};
use crate::types::EnrichedCity;
use crate::Error;

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Fetch a page of pollution readings enriched with city metadata
///
/// The body is read raw so that malformed JSON gets the same 400 as a
/// missing country instead of the extractor's plain-text rejection.
pub async fn pollution_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PollutionDataResponse>, Error> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    tracing::info!(body = %payload, "Received request to fetch pollution data");

    let query = validation::parse_query(&payload).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected pollution data request");
    })?;

    let cities = state.service.pollution_data(&query).await?;

    Ok(Json(PollutionDataResponse {
        page: query.page,
        limit: query.limit,
        total: cities.len(),
        cities,
    }))
}

#[derive(Debug, Serialize)]
pub struct PollutionDataResponse {
    pub page: u64,
    pub limit: u64,
    pub total: usize,
    pub cities: Vec<EnrichedCity>,
}
