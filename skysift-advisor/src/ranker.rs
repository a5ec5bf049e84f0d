use crate::scoring::{match_score, ScoringWeights};
use skysift_core::destination::{DestinationCandidate, ScoredDestination};
use skysift_core::profile::PreferenceProfile;

/// Budget-filters a candidate set, scores the survivors, and returns them
/// ranked by match score. Stateless apart from its configuration.
pub struct DestinationRanker {
    weights: ScoringWeights,
    /// Trip length used to turn a daily cost into a total estimated cost.
    trip_days: u32,
}

impl DestinationRanker {
    pub fn new(weights: ScoringWeights, trip_days: u32) -> Self {
        Self { weights, trip_days }
    }

    /// An empty result is a valid outcome, not an error: it means no
    /// candidate fits the budget.
    pub fn rank(
        &self,
        candidates: Vec<DestinationCandidate>,
        budget: u32,
        profile: &PreferenceProfile,
        top_n: usize,
    ) -> Vec<ScoredDestination> {
        let mut scored: Vec<ScoredDestination> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let total_estimated_cost =
                    candidate.flight_cost + candidate.daily_cost * self.trip_days;
                if total_estimated_cost > budget {
                    return None;
                }
                let match_score = match_score(&candidate, profile, &self.weights);
                Some(ScoredDestination {
                    candidate,
                    total_estimated_cost,
                    match_score,
                })
            })
            .collect();

        // stable: equal scores keep candidate order
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(top_n);
        scored
    }
}
