use crate::offers::{FlightOffer, OffersResponse};
use async_trait::async_trait;
use chrono::NaiveDate;
use skysift_core::location::LocationCode;
use std::time::Duration;
use thiserror::Error;

/// Where per-date offers come from. The contract is tolerant by design: a
/// failed query yields an empty list, never an error, so one bad date can
/// not abort a whole multi-date aggregation.
#[async_trait]
pub trait OfferSource: Send + Sync {
    async fn offers_for_date(
        &self,
        origin: &LocationCode,
        destination: &LocationCode,
        date: NaiveDate,
        token: &str,
    ) -> Vec<FlightOffer>;
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// HTTP client for the upstream flight-offers endpoint. One outbound call
/// per invocation, single adult, non-stop not required, prices in the
/// configured currency, capped at `max_results` offers.
pub struct FlightOfferClient {
    http: reqwest::Client,
    base_url: String,
    max_results: u32,
    currency: String,
}

impl FlightOfferClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        max_results: u32,
        currency: &str,
    ) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_results,
            currency: currency.to_string(),
        })
    }

    async fn fetch(
        &self,
        origin: &LocationCode,
        destination: &LocationCode,
        date: NaiveDate,
        token: &str,
    ) -> Result<Vec<FlightOffer>, FetchError> {
        let url = format!("{}/v2/shopping/flight-offers", self.base_url);
        let date_param = date.format("%Y-%m-%d").to_string();
        let max_param = self.max_results.to_string();
        let params = [
            ("originLocationCode", origin.as_str()),
            ("destinationLocationCode", destination.as_str()),
            ("departureDate", date_param.as_str()),
            ("adults", "1"),
            ("nonStop", "false"),
            ("currencyCode", self.currency.as_str()),
            ("max", max_param.as_str()),
        ];

        let response = self
            .http
            .get(&url)
            .query(&params)
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body: OffersResponse = response.json().await?;
        Ok(body.data)
    }
}

#[async_trait]
impl OfferSource for FlightOfferClient {
    async fn offers_for_date(
        &self,
        origin: &LocationCode,
        destination: &LocationCode,
        date: NaiveDate,
        token: &str,
    ) -> Vec<FlightOffer> {
        match self.fetch(origin, destination, date, token).await {
            Ok(offers) => offers,
            Err(err) => {
                tracing::warn!(%origin, %destination, %date, error = %err, "flight offer query failed, skipping date");
                Vec::new()
            }
        }
    }
}
