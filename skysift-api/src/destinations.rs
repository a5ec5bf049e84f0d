use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use skysift_advisor::recommend::DEFAULT_TOP_N;
use skysift_advisor::RecommendationSet;
use skysift_core::destination::ScoredDestination;
use skysift_core::profile::PreferenceProfile;

#[derive(Debug, Deserialize)]
pub struct DestinationQuery {
    pub budget: u32,
    #[serde(default)]
    pub profile: PreferenceProfile,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

/// AI-assisted recommendations with transparent fallback; the `source`
/// field in the response reports which path served the result.
pub async fn recommend_destinations(
    State(state): State<AppState>,
    Json(query): Json<DestinationQuery>,
) -> Result<Json<RecommendationSet>, AppError> {
    let set = state
        .recommender
        .recommend(query.budget, &query.profile, query.top_n)
        .await?;
    Ok(Json(set))
}

/// Strict budget-filter search over the curated catalog.
pub async fn anywhere_search(
    State(state): State<AppState>,
    Json(query): Json<DestinationQuery>,
) -> Result<Json<Vec<ScoredDestination>>, AppError> {
    let destinations = state
        .anywhere
        .search(query.budget, &query.profile, query.top_n)?;
    Ok(Json(destinations))
}
