use serde::{Deserialize, Serialize};
use skysift_core::destination::DestinationCandidate;
use skysift_core::profile::PreferenceProfile;
use std::collections::HashSet;

/// Weight table for preference scoring. Two presets are in live use and
/// neither is authoritative, so both ship as named constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub base_score: f64,
    pub climate_bonus: f64,
    pub visa_bonus: f64,
    /// Multiplier applied to `(safety_score / 100) * safety_importance`.
    pub safety_scale: f64,
    pub cost_match_bonus: f64,
    /// Bonus per interest tag overlapping a destination highlight.
    pub interest_weight: f64,
}

impl ScoringWeights {
    /// Preset used by the strict budget-filter search.
    pub fn budget_filter() -> Self {
        Self {
            base_score: 0.0,
            climate_bonus: 30.0,
            visa_bonus: 20.0,
            safety_scale: 10.0,
            cost_match_bonus: 25.0,
            interest_weight: 15.0,
        }
    }

    /// Preset used when ranking provider-suggested destinations.
    pub fn ai_assisted() -> Self {
        Self {
            base_score: 50.0,
            climate_bonus: 25.0,
            visa_bonus: 20.0,
            safety_scale: 2.5,
            cost_match_bonus: 25.0,
            interest_weight: 10.0,
        }
    }
}

/// How well a destination matches a preference profile, 0-100.
///
/// Each term applies independently when its precondition holds; the sum is
/// clamped to the score range and rounded. Pure function of its inputs.
pub fn match_score(
    candidate: &DestinationCandidate,
    profile: &PreferenceProfile,
    weights: &ScoringWeights,
) -> u8 {
    let mut score = weights.base_score;

    if let Some(climate) = profile.climate {
        if candidate.climate == climate {
            score += weights.climate_bonus;
        }
    }

    if profile.visa_free && candidate.visa_free {
        score += weights.visa_bonus;
    }

    score += (candidate.safety_score as f64 / 100.0)
        * profile.safety_importance as f64
        * weights.safety_scale;

    if candidate.cost_of_living == profile.cost_preference {
        score += weights.cost_match_bonus;
    }

    let interests: HashSet<&str> = profile.interests.iter().map(String::as_str).collect();
    let highlights: HashSet<&str> = candidate.highlights.iter().map(String::as_str).collect();
    let overlap = highlights.intersection(&interests).count();
    score += weights.interest_weight * overlap as f64;

    score.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use skysift_core::profile::{Climate, CostBracket};

    fn candidate() -> DestinationCandidate {
        DestinationCandidate {
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            flight_cost: 380,
            daily_cost: 100,
            climate: Climate::Mediterranean,
            visa_free: true,
            safety_score: 88,
            cost_of_living: CostBracket::Medium,
            highlights: vec![
                "Coastline".to_string(),
                "Culture".to_string(),
                "Food".to_string(),
            ],
        }
    }

    #[test]
    fn test_budget_filter_preset_terms() {
        let profile = PreferenceProfile {
            climate: Some(Climate::Mediterranean),
            visa_free: true,
            safety_importance: 5,
            cost_preference: CostBracket::Medium,
            interests: vec!["Food".to_string()],
            region: None,
        };

        // 30 climate + 20 visa + 0.88 * 5 * 10 safety + 25 cost + 15 overlap
        // = 134, clamped to 100
        assert_eq!(
            match_score(&candidate(), &profile, &ScoringWeights::budget_filter()),
            100
        );
    }

    #[test]
    fn test_ai_assisted_preset_terms() {
        let profile = PreferenceProfile {
            climate: None,
            visa_free: false,
            safety_importance: 4,
            cost_preference: CostBracket::High,
            interests: Vec::new(),
            region: None,
        };

        // 50 base + 0.88 * 4 * 2.5 = 58.8 -> 59
        assert_eq!(
            match_score(&candidate(), &profile, &ScoringWeights::ai_assisted()),
            59
        );
    }

    #[test]
    fn test_no_climate_preference_earns_no_bonus() {
        let profile = PreferenceProfile {
            safety_importance: 0,
            ..PreferenceProfile::default()
        };

        let score = match_score(&candidate(), &profile, &ScoringWeights::budget_filter());
        // cost bracket matches Medium default, nothing else applies
        assert_eq!(score, 25);
    }

    #[test]
    fn test_duplicate_highlights_count_once() {
        let mut dest = candidate();
        dest.highlights = vec!["Food".to_string(), "Food".to_string()];
        let profile = PreferenceProfile {
            interests: vec!["Food".to_string()],
            safety_importance: 0,
            cost_preference: CostBracket::Low,
            ..PreferenceProfile::default()
        };

        assert_eq!(
            match_score(&dest, &profile, &ScoringWeights::budget_filter()),
            15
        );
    }

    #[test]
    fn test_score_bounded_for_extreme_inputs() {
        let profile = PreferenceProfile {
            climate: Some(Climate::Mediterranean),
            visa_free: true,
            safety_importance: 10,
            cost_preference: CostBracket::Medium,
            interests: vec![
                "Coastline".to_string(),
                "Culture".to_string(),
                "Food".to_string(),
            ],
            region: None,
        };

        for weights in [ScoringWeights::budget_filter(), ScoringWeights::ai_assisted()] {
            let score = match_score(&candidate(), &profile, &weights);
            assert!(score <= 100);
        }

        let hostile = DestinationCandidate {
            safety_score: 0,
            highlights: Vec::new(),
            visa_free: false,
            climate: Climate::Arctic,
            cost_of_living: CostBracket::High,
            ..candidate()
        };
        let indifferent = PreferenceProfile {
            safety_importance: 1,
            cost_preference: CostBracket::Low,
            ..PreferenceProfile::default()
        };
        assert_eq!(
            match_score(&hostile, &indifferent, &ScoringWeights::budget_filter()),
            0
        );
    }
}
