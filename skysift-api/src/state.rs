use skysift_advisor::{AnywhereSearch, RecommendationEngine};
use skysift_search::FlightAggregator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<FlightAggregator>,
    pub recommender: Arc<RecommendationEngine>,
    pub anywhere: Arc<AnywhereSearch>,
}
