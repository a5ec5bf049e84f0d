pub mod catalog;
pub mod gemini;
pub mod ranker;
pub mod recommend;
pub mod scoring;

pub use ranker::DestinationRanker;
pub use recommend::{AnywhereSearch, RecommendationEngine, RecommendationOrigin, RecommendationSet};
pub use scoring::{match_score, ScoringWeights};

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("budget must be a positive amount")]
    InvalidBudget,
}
