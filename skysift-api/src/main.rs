use skysift_advisor::gemini::GeminiClient;
use skysift_advisor::{AnywhereSearch, RecommendationEngine};
use skysift_api::{app, AppState};
use skysift_core::provider::GenerativeProvider;
use skysift_search::{FlightAggregator, FlightOfferClient, OauthTokenProvider, SupplierCredentials};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skysift_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = skysift_api::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Skysift API on port {}", config.server.port);

    let supplier_timeout = Duration::from_secs(config.supplier.request_timeout_secs);
    let offer_client = FlightOfferClient::new(
        &config.supplier.base_url,
        supplier_timeout,
        config.supplier.max_offers_per_date,
        &config.supplier.currency,
    )
    .expect("Failed to build flight offer client");

    let token_provider = OauthTokenProvider::new(
        &config.supplier.base_url,
        SupplierCredentials {
            client_id: config.supplier.client_id.clone(),
            client_secret: config.supplier.client_secret.clone(),
        },
        supplier_timeout,
    )
    .expect("Failed to build supplier auth client");

    let aggregator = FlightAggregator::new(Arc::new(offer_client), Arc::new(token_provider));

    let generative: Option<Arc<dyn GenerativeProvider>> = match config.generative.api_key.as_deref()
    {
        Some(key) if !key.trim().is_empty() => {
            let client = GeminiClient::new(
                &config.generative.base_url,
                key,
                &config.generative.model,
                Duration::from_secs(config.generative.timeout_secs),
            )
            .expect("Failed to build generative provider client");
            Some(Arc::new(client))
        }
        _ => {
            tracing::warn!(
                "no generative API key configured; destination recommendations will use the curated catalog"
            );
            None
        }
    };

    let state = AppState {
        aggregator: Arc::new(aggregator),
        recommender: Arc::new(RecommendationEngine::new(generative)),
        anywhere: Arc::new(AnywhereSearch::new()),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
