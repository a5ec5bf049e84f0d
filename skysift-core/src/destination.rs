use crate::profile::{Climate, CostBracket};
use serde::{Deserialize, Serialize};

/// One scoreable destination, before any budget filtering or scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationCandidate {
    pub city: String,
    pub country: String,
    /// Estimated round-trip flight cost in USD.
    pub flight_cost: u32,
    /// Estimated daily spend in USD.
    pub daily_cost: u32,
    pub climate: Climate,
    pub visa_free: bool,
    /// 0-100.
    pub safety_score: u8,
    pub cost_of_living: CostBracket,
    /// Highlight tags matched against traveler interests.
    pub highlights: Vec<String>,
}

/// A candidate that survived the budget filter, with its derived trip cost
/// and preference match score attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub candidate: DestinationCandidate,
    /// `flight_cost + daily_cost * trip_days` for the caller's trip length.
    pub total_estimated_cost: u32,
    /// 0-100, clamped.
    pub match_score: u8,
}
