//! Reqwest-backed pollution API client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::PollutionSource;
use crate::types::{Credentials, PollutionPage, PollutionQuery};
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Client for the `/auth/login` and `/pollution` endpoints
pub struct PollutionApiClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl PollutionApiClient {
    pub fn new(client: Client, base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            credentials,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl PollutionSource for PollutionApiClient {
    async fn login(&self) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint("auth/login"))
            .json(&self.credentials)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Login request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "Login rejected by pollution API");
            return Err(Error::authentication(reason(status)));
        }

        let body = response.bytes().await?;
        let login: LoginResponse = serde_json::from_slice(&body)?;

        // An empty or missing token would otherwise be sent as a bogus bearer.
        let token = login
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::authentication("response did not contain a token"))?;

        tracing::info!("Login successful, token received");
        Ok(token)
    }

    async fn fetch_pollution(&self, token: &str, query: &PollutionQuery) -> Result<PollutionPage> {
        let response = self
            .client
            .get(self.endpoint("pollution"))
            .query(query)
            .bearer_auth(token)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Pollution request failed"))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(%status, "Pollution API returned an error");
            return Err(Error::fetch(reason(status)));
        }

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "Pollution payload received");
        let page: PollutionPage = serde_json::from_slice(&body)?;

        tracing::info!(
            country = %query.country,
            page = query.page,
            limit = query.limit,
            results = page.results.len(),
            "Pollution data fetched successfully"
        );
        Ok(page)
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}
