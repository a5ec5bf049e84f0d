use skysift_core::destination::DestinationCandidate;
use skysift_core::profile::{Climate, CostBracket};

fn entry(
    city: &str,
    country: &str,
    flight_cost: u32,
    climate: Climate,
    visa_free: bool,
    safety_score: u8,
    cost_of_living: CostBracket,
    highlights: [&str; 3],
) -> DestinationCandidate {
    DestinationCandidate {
        city: city.to_string(),
        country: country.to_string(),
        flight_cost,
        daily_cost: cost_of_living.typical_daily_cost(),
        climate,
        visa_free,
        safety_score,
        cost_of_living,
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}

/// Curated fallback table used when no generative provider is available or
/// its output is unusable. Spans budget tiers from backpacker to premium;
/// flight costs are rough US-departure estimates.
pub fn curated_destinations() -> Vec<DestinationCandidate> {
    use Climate::*;
    use CostBracket::*;

    vec![
        entry("Bangkok", "Thailand", 650, Tropical, true, 85, Low, ["Street Food", "Temples", "Nightlife"]),
        entry("Prague", "Czech Republic", 450, Temperate, true, 92, Medium, ["Architecture", "Beer", "History"]),
        entry("Lisbon", "Portugal", 380, Mediterranean, true, 88, Medium, ["Coastline", "Culture", "Food"]),
        entry("Istanbul", "Turkey", 420, Mediterranean, false, 75, Low, ["History", "Culture", "Food"]),
        entry("Dubai", "UAE", 580, Desert, true, 95, High, ["Luxury", "Shopping", "Architecture"]),
        entry("Tokyo", "Japan", 720, Temperate, true, 98, High, ["Technology", "Culture", "Food"]),
        entry("Reykjavik", "Iceland", 350, Arctic, true, 99, High, ["Northern Lights", "Nature", "Adventure"]),
        entry("Cape Town", "South Africa", 850, Mediterranean, true, 70, Low, ["Nature", "Wine", "Adventure"]),
        entry("Buenos Aires", "Argentina", 750, Temperate, true, 78, Low, ["Culture", "Food", "Nightlife"]),
        entry("Bali", "Indonesia", 680, Tropical, true, 80, Low, ["Beaches", "Culture", "Spirituality"]),
        entry("Amsterdam", "Netherlands", 340, Temperate, true, 90, High, ["Canals", "Art", "Culture"]),
        entry("Singapore", "Singapore", 780, Tropical, true, 97, High, ["Food", "Architecture", "Gardens"]),
    ]
}
