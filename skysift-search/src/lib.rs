pub mod aggregator;
pub mod auth;
pub mod client;
pub mod dates;
pub mod offers;

pub use aggregator::{FlightAggregator, SearchError};
pub use auth::{OauthTokenProvider, SupplierCredentials};
pub use client::{FlightOfferClient, OfferSource};
pub use offers::{AggregationResult, FlightOffer, FlightOfferSummary};
