use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope of the upstream flight-offers query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffersResponse {
    #[serde(default)]
    pub data: Vec<FlightOffer>,
}

/// One priced itinerary as returned by the upstream source. Field names
/// follow the upstream wire format; `search_date` is attached after the
/// fact, when the offer is merged into a multi-date result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub price: OfferPrice,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(default)]
    pub validating_airline_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_date: Option<NaiveDate>,
}

impl FlightOffer {
    /// Upstream prices arrive as decimal strings; returns `None` when the
    /// string is not a non-negative number.
    pub fn total_price(&self) -> Option<f64> {
        self.price
            .total
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferPrice {
    pub total: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub duration: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub departure: SegmentPoint,
    pub arrival: SegmentPoint,
    pub carrier_code: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<Aircraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPoint {
    pub iata_code: String,
    pub at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub code: String,
}

/// The two winners of a multi-date aggregation plus the merge totals.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationResult {
    pub id: Uuid,
    pub total_offers_found: usize,
    /// Human-readable window, e.g. "3 months".
    pub search_period: String,
    pub cheapest: FlightOfferSummary,
    pub shortest: FlightOfferSummary,
}

/// Headline view of one winning offer; retains the full source offer for
/// later inspection.
#[derive(Debug, Clone, Serialize)]
pub struct FlightOfferSummary {
    pub price: f64,
    pub currency: String,
    pub departure_date: NaiveDate,
    /// Raw upstream duration token of the first itinerary, e.g. `PT9H20M`.
    pub duration: String,
    /// The same duration rendered for display, e.g. `9h 20m`.
    pub duration_display: String,
    pub duration_minutes: u32,
    pub segments: usize,
    pub airline: String,
    pub full_details: FlightOffer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_deserializes_upstream_shape() {
        let json = r#"
            {
                "price": {"total": "412.50", "currency": "USD"},
                "itineraries": [
                    {
                        "duration": "PT11H05M",
                        "segments": [
                            {
                                "departure": {"iataCode": "JFK", "at": "2025-01-01T08:00:00"},
                                "arrival": {"iataCode": "LHR", "at": "2025-01-01T19:05:00"},
                                "carrierCode": "BA",
                                "number": "178",
                                "aircraft": {"code": "777"}
                            }
                        ]
                    }
                ],
                "validatingAirlineCodes": ["BA"]
            }
        "#;
        let offer: FlightOffer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.total_price(), Some(412.50));
        assert_eq!(offer.itineraries[0].segments[0].carrier_code, "BA");
        assert!(offer.search_date.is_none());
    }

    #[test]
    fn test_unparseable_price_is_none() {
        let offer = FlightOffer {
            price: OfferPrice {
                total: "abc".to_string(),
                currency: "USD".to_string(),
            },
            itineraries: Vec::new(),
            validating_airline_codes: Vec::new(),
            search_date: None,
        };
        assert_eq!(offer.total_price(), None);

        let negative = FlightOffer {
            price: OfferPrice {
                total: "-5.00".to_string(),
                currency: "USD".to_string(),
            },
            itineraries: Vec::new(),
            validating_airline_codes: Vec::new(),
            search_date: None,
        };
        assert_eq!(negative.total_price(), None);
    }

    #[test]
    fn test_missing_arrays_default_empty() {
        let json = r#"{"price": {"total": "100.00", "currency": "USD"}}"#;
        let offer: FlightOffer = serde_json::from_str(json).unwrap();
        assert!(offer.itineraries.is_empty());
        assert!(offer.validating_airline_codes.is_empty());
    }
}
