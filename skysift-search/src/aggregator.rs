use crate::client::OfferSource;
use crate::dates::weekly_departures;
use crate::offers::{AggregationResult, FlightOffer, FlightOfferSummary};
use chrono::Utc;
use skysift_core::duration::{format_display, parse_minutes, DurationError};
use skysift_core::location::LocationCode;
use skysift_core::provider::{AuthError, TokenProvider};
use std::sync::Arc;
use uuid::Uuid;

pub const MIN_SEARCH_MONTHS: u32 = 1;
pub const MAX_SEARCH_MONTHS: u32 = 6;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("months must be between 1 and 6, got {0}")]
    InvalidMonths(u32),

    #[error("no flights found for the requested route and period")]
    NoFlightsFound,

    #[error("flight supplier authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Drives the per-date offer source across a multi-month window of weekly
/// candidate dates, merges everything that comes back, and picks the
/// cheapest and shortest offers from the merged set.
pub struct FlightAggregator {
    source: Arc<dyn OfferSource>,
    auth: Arc<dyn TokenProvider>,
}

impl FlightAggregator {
    pub fn new(source: Arc<dyn OfferSource>, auth: Arc<dyn TokenProvider>) -> Self {
        Self { source, auth }
    }

    pub async fn search(
        &self,
        origin: &LocationCode,
        destination: &LocationCode,
        months: u32,
    ) -> Result<AggregationResult, SearchError> {
        if !(MIN_SEARCH_MONTHS..=MAX_SEARCH_MONTHS).contains(&months) {
            return Err(SearchError::InvalidMonths(months));
        }

        // One token for the whole aggregation; failure here is fatal.
        let token = self.auth.bearer_token().await?;

        let dates = weekly_departures(Utc::now().date_naive(), months);
        tracing::info!(%origin, %destination, months, dates = dates.len(), "starting multi-date flight search");

        let mut merged: Vec<FlightOffer> = Vec::new();
        for date in dates {
            let offers = self
                .source
                .offers_for_date(origin, destination, date, &token)
                .await;

            if offers.is_empty() {
                tracing::debug!(%date, "no offers for date");
                continue;
            }

            tracing::info!(%date, count = offers.len(), "merging offers");
            for mut offer in offers {
                if offer.total_price().is_none() || offer.itineraries.is_empty() {
                    tracing::warn!(%date, "skipping offer with unusable price or no itinerary");
                    continue;
                }
                offer.search_date = Some(date);
                merged.push(offer);
            }
        }

        if merged.is_empty() {
            tracing::warn!(%origin, %destination, "no usable offers across any candidate date");
            return Err(SearchError::NoFlightsFound);
        }

        let (cheapest, shortest) = select_extremes(&merged)?;
        tracing::info!(
            total = merged.len(),
            cheapest_price = cheapest.price,
            shortest_minutes = shortest.duration_minutes,
            "aggregation complete"
        );

        Ok(AggregationResult {
            id: Uuid::new_v4(),
            total_offers_found: merged.len(),
            search_period: format!("{months} months"),
            cheapest,
            shortest,
        })
    }
}

/// Pick the minimum-price and minimum-duration offers from a merged list.
/// Duration is taken from the first itinerary only; offers are treated as
/// single-itinerary for ranking. Ties go to the earliest-encountered offer.
pub fn select_extremes(
    offers: &[FlightOffer],
) -> Result<(FlightOfferSummary, FlightOfferSummary), SearchError> {
    let mut cheapest: Option<(usize, f64)> = None;
    let mut shortest: Option<(usize, u32)> = None;

    for (idx, offer) in offers.iter().enumerate() {
        let price = offer
            .total_price()
            .ok_or_else(|| SearchError::Internal("merged offer lost its price".to_string()))?;
        let itinerary = offer
            .itineraries
            .first()
            .ok_or_else(|| SearchError::Internal("merged offer lost its itinerary".to_string()))?;
        let minutes = parse_minutes(&itinerary.duration)?;

        if cheapest.map_or(true, |(_, best)| price < best) {
            cheapest = Some((idx, price));
        }
        if shortest.map_or(true, |(_, best)| minutes < best) {
            shortest = Some((idx, minutes));
        }
    }

    let (cheapest_idx, _) =
        cheapest.ok_or_else(|| SearchError::Internal("empty merged offer list".to_string()))?;
    let (shortest_idx, _) =
        shortest.ok_or_else(|| SearchError::Internal("empty merged offer list".to_string()))?;

    Ok((
        summarize(&offers[cheapest_idx])?,
        summarize(&offers[shortest_idx])?,
    ))
}

fn summarize(offer: &FlightOffer) -> Result<FlightOfferSummary, SearchError> {
    let price = offer
        .total_price()
        .ok_or_else(|| SearchError::Internal("merged offer lost its price".to_string()))?;
    let itinerary = offer
        .itineraries
        .first()
        .ok_or_else(|| SearchError::Internal("merged offer lost its itinerary".to_string()))?;
    let departure_date = offer
        .search_date
        .ok_or_else(|| SearchError::Internal("merged offer missing its query date".to_string()))?;

    Ok(FlightOfferSummary {
        price,
        currency: offer.price.currency.clone(),
        departure_date,
        duration: itinerary.duration.clone(),
        duration_display: format_display(&itinerary.duration)?,
        duration_minutes: parse_minutes(&itinerary.duration)?,
        segments: itinerary.segments.len(),
        airline: offer
            .validating_airline_codes
            .first()
            .cloned()
            .unwrap_or_default(),
        full_details: offer.clone(),
    })
}
