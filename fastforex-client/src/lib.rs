//! # FastForex Client
//!
//! A typed client for the FastForex `historical` endpoint, implementing the
//! `RateProvider` port.

use std::time::Duration;

use async_trait::async_trait;
use conversion_types::{
    ConversionDate, CurrencyCode, HistoricalRatesResponse, ProviderError, RateProvider, RateQuote,
};
use reqwest::{Client, StatusCode, header::ACCEPT};

/// Public FastForex API.
pub const DEFAULT_BASE_URL: &str = "https://api.fastforex.io";

/// Upper bound on one provider round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for client construction.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// FastForex API client.
pub struct FastForexClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl FastForexClient {
    /// Creates a new client with the default 10 second timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    /// Creates a new client with a custom request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http,
        })
    }
}

#[async_trait]
impl RateProvider for FastForexClient {
    #[tracing::instrument(skip(self))]
    async fn fetch(
        &self,
        date: ConversionDate,
        base: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<RateQuote, ProviderError> {
        tracing::debug!("Requesting historical rate");

        let date_param = date.to_string();
        let resp = self
            .http
            .get(format!("{}/historical", self.base_url))
            .header(ACCEPT, "application/json")
            .query(&[
                ("date", date_param.as_str()),
                ("from", base.code()),
                ("to", target.code()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;

        if status != StatusCode::OK {
            tracing::info!(status = status.as_u16(), "Rate provider rejected request");
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: HistoricalRatesResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidBody(e.to_string()))?;
        let rate = parsed
            .rate_for(target)
            .ok_or(ProviderError::MissingRate(base, target))?;

        Ok(RateQuote {
            date,
            base,
            target,
            rate,
        })
    }
}

// The request URL carries the API key, so it is stripped from reported errors.
fn transport(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.without_url().to_string())
}
