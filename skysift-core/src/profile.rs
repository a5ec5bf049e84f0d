use serde::{Deserialize, Deserializer, Serialize};

/// Broad climate tag attached to destinations and (optionally) requested by
/// travelers. Unknown tags from external sources collapse into `Other` so a
/// creative provider answer never breaks parsing; `Other` simply never
/// matches a requested climate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Climate {
    Tropical,
    Temperate,
    Mediterranean,
    Desert,
    Arctic,
    Mountain,
    Other,
}

impl<'de> Deserialize<'de> for Climate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Tropical" => Climate::Tropical,
            "Temperate" => Climate::Temperate,
            "Mediterranean" => Climate::Mediterranean,
            "Desert" => Climate::Desert,
            "Arctic" => Climate::Arctic,
            "Mountain" => Climate::Mountain,
            _ => Climate::Other,
        })
    }
}

/// Cost-of-living bracket for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostBracket {
    Low,
    Medium,
    High,
}

impl CostBracket {
    /// Typical daily spend in USD for the bracket, used by the curated
    /// catalog to estimate total trip cost.
    pub fn typical_daily_cost(self) -> u32 {
        match self {
            CostBracket::Low => 50,
            CostBracket::Medium => 100,
            CostBracket::High => 200,
        }
    }

    /// Bracket a raw daily spend when an external record carries a daily
    /// budget but no explicit bracket.
    pub fn from_daily_cost(daily_cost: u32) -> Self {
        match daily_cost {
            0..=74 => CostBracket::Low,
            75..=149 => CostBracket::Medium,
            _ => CostBracket::High,
        }
    }
}

/// Traveler preference profile, constructed per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Requested climate; `None` means any climate is acceptable.
    #[serde(default)]
    pub climate: Option<Climate>,
    /// Only consider destinations reachable without a visa.
    #[serde(default)]
    pub visa_free: bool,
    /// How much safety matters, on a 1-10 scale.
    #[serde(default = "default_safety_importance")]
    pub safety_importance: u8,
    /// Preferred cost-of-living bracket.
    #[serde(default = "default_cost_preference")]
    pub cost_preference: CostBracket,
    /// Free-text interest tags matched against destination highlights.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Optional target region or country, used only to steer candidate
    /// generation.
    #[serde(default, alias = "destination_region")]
    pub region: Option<String>,
}

fn default_safety_importance() -> u8 {
    5
}

fn default_cost_preference() -> CostBracket {
    CostBracket::Medium
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            climate: None,
            visa_free: false,
            safety_importance: default_safety_importance(),
            cost_preference: default_cost_preference(),
            interests: Vec::new(),
            region: None,
        }
    }
}
