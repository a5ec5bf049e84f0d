use crate::catalog::curated_destinations;
use crate::ranker::DestinationRanker;
use crate::scoring::ScoringWeights;
use crate::AdvisorError;
use serde::Serialize;
use serde_json::Value;
use skysift_core::destination::{DestinationCandidate, ScoredDestination};
use skysift_core::profile::{CostBracket, PreferenceProfile};
use skysift_core::provider::{GenerativeProvider, ProviderError};
use std::sync::Arc;

pub const DEFAULT_TOP_N: usize = 6;

/// Trip length assumed when costing provider-suggested destinations.
const RECOMMENDATION_TRIP_DAYS: u32 = 4;
/// Trip length assumed by the plain budget-filter search.
const ANYWHERE_TRIP_DAYS: u32 = 3;

/// Which path produced a recommendation set, so the presentation layer can
/// be honest about provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationOrigin {
    Generative,
    CuratedFallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSet {
    pub source: RecommendationOrigin,
    pub destinations: Vec<ScoredDestination>,
}

/// Destination recommendations sourced from a generative provider when one
/// is configured and usable, otherwise from the curated catalog. Whichever
/// source supplies the raw candidates, ranking and scoring are always done
/// here; provider-supplied scores are discarded.
pub struct RecommendationEngine {
    provider: Option<Arc<dyn GenerativeProvider>>,
    ranker: DestinationRanker,
}

impl RecommendationEngine {
    pub fn new(provider: Option<Arc<dyn GenerativeProvider>>) -> Self {
        Self {
            provider,
            ranker: DestinationRanker::new(ScoringWeights::ai_assisted(), RECOMMENDATION_TRIP_DAYS),
        }
    }

    /// Never errors for availability reasons; only invalid caller input is
    /// rejected. An empty destination list means nothing fit the budget.
    pub async fn recommend(
        &self,
        budget: u32,
        profile: &PreferenceProfile,
        top_n: usize,
    ) -> Result<RecommendationSet, AdvisorError> {
        if budget == 0 {
            return Err(AdvisorError::InvalidBudget);
        }

        if let Some(provider) = &self.provider {
            match self.suggestions_from(provider.as_ref(), budget, profile).await {
                Ok(candidates) if !candidates.is_empty() => {
                    let destinations = self.ranker.rank(candidates, budget, profile, top_n);
                    return Ok(RecommendationSet {
                        source: RecommendationOrigin::Generative,
                        destinations,
                    });
                }
                Ok(_) => {
                    tracing::warn!("provider returned no usable destination records, falling back")
                }
                Err(err) => {
                    tracing::warn!(error = %err, "generative provider unavailable, falling back")
                }
            }
        } else {
            tracing::debug!("no generative provider configured, serving curated catalog");
        }

        let destinations = self
            .ranker
            .rank(curated_destinations(), budget, profile, top_n);
        Ok(RecommendationSet {
            source: RecommendationOrigin::CuratedFallback,
            destinations,
        })
    }

    async fn suggestions_from(
        &self,
        provider: &dyn GenerativeProvider,
        budget: u32,
        profile: &PreferenceProfile,
    ) -> Result<Vec<DestinationCandidate>, ProviderError> {
        let prompt = build_prompt(budget, profile);
        let response = provider.generate(&prompt).await?;
        parse_provider_payload(&response)
    }
}

/// The plain budget-filter search over the curated catalog, the stricter of
/// the two scoring callers.
pub struct AnywhereSearch {
    ranker: DestinationRanker,
}

impl AnywhereSearch {
    pub fn new() -> Self {
        Self {
            ranker: DestinationRanker::new(ScoringWeights::budget_filter(), ANYWHERE_TRIP_DAYS),
        }
    }

    pub fn search(
        &self,
        budget: u32,
        profile: &PreferenceProfile,
        top_n: usize,
    ) -> Result<Vec<ScoredDestination>, AdvisorError> {
        if budget == 0 {
            return Err(AdvisorError::InvalidBudget);
        }
        Ok(self
            .ranker
            .rank(curated_destinations(), budget, profile, top_n))
    }
}

impl Default for AnywhereSearch {
    fn default() -> Self {
        Self::new()
    }
}

fn build_prompt(budget: u32, profile: &PreferenceProfile) -> String {
    let region_line = profile
        .region
        .as_deref()
        .map(|r| format!("- Focus on destinations in/around: {r}\n"))
        .unwrap_or_default();
    let climate = profile
        .climate
        .map(|c| format!("{c:?}"))
        .unwrap_or_else(|| "Any".to_string());
    let visa = if profile.visa_free {
        "Visa-free only"
    } else {
        "Any"
    };

    format!(
        "As a travel expert, recommend destinations for a traveler with:\n\
         - Budget: ${budget} USD (total trip cost including flights and {RECOMMENDATION_TRIP_DAYS} days on the ground)\n\
         {region_line}\
         - Climate preference: {climate}\n\
         - Visa requirements: {visa}\n\
         - Safety priority: {}/10\n\
         - Cost preference: {:?} cost destinations\n\
         - Interests: {}\n\
         \n\
         Provide 6-8 specific destination recommendations as a JSON object with a \
         \"destinations\" array. Each entry must have: city, country, \
         estimated_flight_cost (USD), daily_budget (USD), climate, visa_free (bool), \
         safety_score (0-100), cost_of_living (Low/Medium/High), highlights (array of tags).\n\
         Focus on realistic, achievable destinations that truly match the preferences and budget.",
        profile.safety_importance,
        profile.cost_preference,
        profile.interests.join(", "),
    )
}

/// Pull a `destinations` array out of free-form provider text: find the
/// first `{` and last `}`, parse that substring, then validate each record
/// individually, skipping malformed entries rather than failing the batch.
fn parse_provider_payload(response: &str) -> Result<Vec<DestinationCandidate>, ProviderError> {
    if !response.contains("destinations") {
        return Err(ProviderError::Unusable(
            "response has no destinations marker".to_string(),
        ));
    }

    let start = response
        .find('{')
        .ok_or_else(|| ProviderError::Unusable("response contains no JSON object".to_string()))?;
    let end = response
        .rfind('}')
        .filter(|end| *end > start)
        .ok_or_else(|| ProviderError::Unusable("response contains no JSON object".to_string()))?;

    let value: Value = serde_json::from_str(&response[start..=end])
        .map_err(|e| ProviderError::Unusable(format!("embedded JSON failed to parse: {e}")))?;

    let records = value
        .get("destinations")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ProviderError::Unusable("parsed JSON has no destinations array".to_string())
        })?;

    let candidates: Vec<DestinationCandidate> = records
        .iter()
        .filter_map(|record| {
            let candidate = candidate_from_record(record);
            if candidate.is_none() {
                tracing::debug!(?record, "skipping malformed destination record");
            }
            candidate
        })
        .collect();

    Ok(candidates)
}

/// Field-by-field validation of one provider record. City, country, and the
/// two cost figures are required; everything else is defaulted defensively.
/// Any `match_score` the provider volunteered is ignored.
fn candidate_from_record(record: &Value) -> Option<DestinationCandidate> {
    let city = record.get("city")?.as_str()?.trim();
    let country = record.get("country")?.as_str()?.trim();
    if city.is_empty() || country.is_empty() {
        return None;
    }

    let flight_cost = non_negative_u32(record.get("estimated_flight_cost")?)?;
    let daily_cost = record
        .get("daily_budget")
        .or_else(|| record.get("daily_cost"))
        .and_then(non_negative_u32)?;

    let climate = record
        .get("climate")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or(skysift_core::profile::Climate::Other);
    let cost_of_living = record
        .get("cost_of_living")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_else(|| CostBracket::from_daily_cost(daily_cost));

    let safety_score = record
        .get("safety_score")
        .and_then(Value::as_u64)
        .map(|s| s.min(100) as u8)
        .unwrap_or(50);
    let visa_free = record
        .get("visa_free")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let highlights = record
        .get("highlights")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(DestinationCandidate {
        city: city.to_string(),
        country: country.to_string(),
        flight_cost,
        daily_cost,
        climate,
        visa_free,
        safety_score,
        cost_of_living,
        highlights,
    })
}

fn non_negative_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).ok()
            } else {
                // tolerate decimal cost estimates
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.round() as u32)
            }
        }
        _ => None,
    }
}
