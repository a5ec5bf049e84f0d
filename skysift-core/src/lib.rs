pub mod destination;
pub mod duration;
pub mod location;
pub mod profile;
pub mod provider;

pub use destination::{DestinationCandidate, ScoredDestination};
pub use duration::{format_display, parse_minutes, DurationError};
pub use location::{InvalidLocationCode, LocationCode};
pub use profile::{Climate, CostBracket, PreferenceProfile};
pub use provider::{AuthError, GenerativeProvider, ProviderError, TokenProvider};
