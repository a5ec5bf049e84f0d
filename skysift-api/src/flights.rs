use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use skysift_core::location::LocationCode;
use skysift_search::AggregationResult;

#[derive(Debug, Deserialize)]
pub struct FlightSearchParams {
    pub origin: String,
    pub destination: String,
    #[serde(default = "default_months")]
    pub months: u32,
}

fn default_months() -> u32 {
    3
}

pub async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<FlightSearchParams>,
) -> Result<Json<AggregationResult>, AppError> {
    let origin = LocationCode::parse(&params.origin)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let destination = LocationCode::parse(&params.destination)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let result = state
        .aggregator
        .search(&origin, &destination, params.months)
        .await?;

    Ok(Json(result))
}
