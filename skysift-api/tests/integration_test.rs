use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use skysift_advisor::{AnywhereSearch, RecommendationEngine};
use skysift_api::{app, AppState};
use skysift_core::location::LocationCode;
use skysift_core::provider::{AuthError, TokenProvider};
use skysift_search::client::OfferSource;
use skysift_search::offers::{FlightOffer, Itinerary, OfferPrice};
use skysift_search::FlightAggregator;
use std::sync::Arc;
use tower::util::ServiceExt;

struct StaticToken;

#[async_trait]
impl TokenProvider for StaticToken {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        Ok("test-token".to_string())
    }
}

struct FailingToken;

#[async_trait]
impl TokenProvider for FailingToken {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        Err(AuthError::Rejected(401))
    }
}

struct CannedOffers {
    offers: Vec<FlightOffer>,
}

#[async_trait]
impl OfferSource for CannedOffers {
    async fn offers_for_date(
        &self,
        _origin: &LocationCode,
        _destination: &LocationCode,
        _date: NaiveDate,
        _token: &str,
    ) -> Vec<FlightOffer> {
        self.offers.clone()
    }
}

fn offer(price: &str, duration: &str) -> FlightOffer {
    FlightOffer {
        price: OfferPrice {
            total: price.to_string(),
            currency: "USD".to_string(),
        },
        itineraries: vec![Itinerary {
            duration: duration.to_string(),
            segments: Vec::new(),
        }],
        validating_airline_codes: vec!["BA".to_string()],
        search_date: None,
    }
}

fn test_state(source: Arc<dyn OfferSource>, auth: Arc<dyn TokenProvider>) -> AppState {
    AppState {
        aggregator: Arc::new(FlightAggregator::new(source, auth)),
        recommender: Arc::new(RecommendationEngine::new(None)),
        anywhere: Arc::new(AnywhereSearch::new()),
    }
}

fn default_state() -> AppState {
    test_state(
        Arc::new(CannedOffers {
            offers: vec![offer("412.50", "PT11H05M"), offer("399.00", "PT9H40M")],
        }),
        Arc::new(StaticToken),
    )
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app(default_state())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_flight_search_returns_both_winners() {
    let response = app(default_state())
        .oneshot(
            Request::builder()
                .uri("/v1/flights/search?origin=JFK&destination=LHR&months=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // two offers per date, eight candidate dates
    assert_eq!(body["total_offers_found"], 16);
    assert_eq!(body["search_period"], "2 months");
    assert_eq!(body["cheapest"]["price"], 399.00);
    // the cheap offer is also the short one
    assert_eq!(body["shortest"]["duration_minutes"], 580);
    assert_eq!(body["shortest"]["price"], 399.00);
}

#[tokio::test]
async fn test_flight_search_not_found_when_all_dates_empty() {
    let state = test_state(
        Arc::new(CannedOffers { offers: Vec::new() }),
        Arc::new(StaticToken),
    );

    let response = app(state)
        .oneshot(
            Request::builder()
                .uri("/v1/flights/search?origin=JFK&destination=LHR&months=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_flight_search_validates_input() {
    let app = app(default_state());

    let bad_code = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/v1/flights/search?origin=NEWYORK&destination=LHR")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bad_code.status(), StatusCode::BAD_REQUEST);

    let bad_months = app
        .oneshot(
            Request::builder()
                .uri("/v1/flights/search?origin=JFK&destination=LHR&months=9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bad_months.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_flight_search_auth_failure_is_bad_gateway() {
    let state = test_state(
        Arc::new(CannedOffers { offers: Vec::new() }),
        Arc::new(FailingToken),
    );

    let response = app(state)
        .oneshot(
            Request::builder()
                .uri("/v1/flights/search?origin=JFK&destination=LHR")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_recommendations_report_fallback_provenance() {
    let request = json_request(
        "/v1/destinations/recommendations",
        json!({
            "budget": 800,
            "profile": {
                "visa_free": true,
                "safety_importance": 7,
                "cost_preference": "Medium",
                "interests": ["Food", "Culture"]
            }
        }),
    );

    let response = app(default_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["source"], "curated_fallback");
    let destinations = body["destinations"].as_array().unwrap();
    assert!(!destinations.is_empty());
    for dest in destinations {
        assert!(dest["total_estimated_cost"].as_u64().unwrap() <= 800);
    }
}

#[tokio::test]
async fn test_recommendations_reject_zero_budget() {
    let request = json_request("/v1/destinations/recommendations", json!({ "budget": 0 }));
    let response = app(default_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_anywhere_search_ranks_catalog() {
    let request = json_request(
        "/v1/destinations/anywhere",
        json!({
            "budget": 1000,
            "profile": { "climate": "Tropical", "interests": ["Street Food"] }
        }),
    );

    let response = app(default_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let destinations = body.as_array().unwrap();
    assert!(!destinations.is_empty());
    let scores: Vec<u64> = destinations
        .iter()
        .map(|d| d["match_score"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}
