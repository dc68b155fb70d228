//! Crop Advisor - Backend Server
//!
//! Crop suitability recommendations and soil/weather classification for
//! farmers, with dated farming plans for the chosen crop.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{PlanGeneratorClient, WeatherClient};
use services::{CatalogProvider, DefaultCatalogProvider, RecommendationService};
use shared::CropClassifier;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: CropClassifier,
    pub catalog: Arc<dyn CatalogProvider>,
    pub weather_client: Option<WeatherClient>,
    pub plan_client: Option<PlanGeneratorClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_advisor_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Crop Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    let classifier = RecommendationService::initialize_classifier(
        config.classifier.enabled,
        Duration::from_millis(config.classifier.warmup_ms),
    )
    .await;

    let state = build_state(config.clone(), classifier)?;

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wire external clients from configuration; empty API keys disable them
fn build_state(config: Config, classifier: CropClassifier) -> anyhow::Result<AppState> {
    let weather_client = if config.weather.api_key.is_empty() {
        tracing::warn!("Weather API key not set; condition-based classification disabled");
        None
    } else {
        Some(WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        ))
    };

    let plan_client = if config.plan_generator.api_key.is_empty() {
        tracing::warn!("Plan generator API key not set; plan generation disabled");
        None
    } else {
        Some(PlanGeneratorClient::new(
            config.plan_generator.api_endpoint.clone(),
            config.plan_generator.api_key.clone(),
            config.plan_generator.model.clone(),
            Duration::from_secs(config.plan_generator.timeout_secs),
        )?)
    };

    Ok(AppState {
        config: Arc::new(config),
        classifier,
        catalog: Arc::new(DefaultCatalogProvider::new()),
        weather_client,
        plan_client,
    })
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisor API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_app(classifier: CropClassifier) -> Router {
        let config = Config::defaults().unwrap();
        create_app(build_state(config, classifier).unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn recommend_endpoint_ranks_catalog() {
        let (status, body) = post_json(
            test_app(CropClassifier::initialize()),
            "/api/v1/crops/recommend",
            serde_json::json!({
                "region": "Punjab",
                "soil_type": "Loamy",
                "land_size": 3.0,
                "date": "2024-11-10"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["crop"]["id"], "wheat");
        assert_eq!(body[0]["level"], "excellent");
    }

    #[tokio::test]
    async fn classify_endpoint_returns_fallback_when_disabled() {
        let (status, body) = post_json(
            test_app(CropClassifier::fallback_only()),
            "/api/v1/crops/classify",
            serde_json::json!({
                "nitrogen": 50.0, "phosphorus": 50.0, "potassium": 50.0,
                "temperature": 25.0, "humidity": 60.0, "ph": 6.5, "rainfall": 200.0
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["crop_key"], "chickpea");
    }

    #[tokio::test]
    async fn recommend_endpoint_validates_land_size() {
        let (status, body) = post_json(
            test_app(CropClassifier::initialize()),
            "/api/v1/crops/recommend",
            serde_json::json!({"region": "Punjab", "soil_type": "Loamy", "land_size": -1.0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn lookup_endpoint_returns_defaults() {
        let response = test_app(CropClassifier::initialize())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/lookups/rainfall/Punjab")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
