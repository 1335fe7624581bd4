//! Brewly AI Pairing - Backend Server
//!
//! Serves coffee and pastry pairing scores, marketing copy and
//! downloadable reports over HTTP.

use axum::{routing::get, Router};
use shared::{Clock, SystemClock};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub clock: Arc<dyn Clock + Send + Sync>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brewly_server=debug,shared=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Brewly AI Pairing Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Shop UTC offset: {} minutes", config.shop.utc_offset_minutes);

    // Create application state
    let state = AppState {
        clock: Arc::new(SystemClock::from_offset_minutes(config.shop.utc_offset_minutes)),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
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
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Brewly AI Pairing API v1.0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use chrono::{FixedOffset, TimeZone};
    use shared::FixedClock;
    use tower::ServiceExt;

    fn app() -> Router {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 4, 15, 9, 0, 0)
            .unwrap();
        create_app(AppState {
            config: Arc::new(Config::default()),
            clock: Arc::new(FixedClock(now)),
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const CATALOG_REQUEST: &str = r#"{
        "coffeeId": "espresso",
        "pastryId": "almond-biscotti",
        "coffee": {"id": "espresso", "name": "Espresso - $3.50", "stock": 50, "profit": "3"},
        "pastry": {"id": "almond-biscotti", "name": "Almond Biscotti - $2.75", "stock": 50, "profit": "3"}
    }"#;

    #[tokio::test]
    async fn test_root_and_health() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_catalog_pairing_endpoint() {
        let response = app()
            .oneshot(post_json("/api/v1/pairings/catalog", CATALOG_REQUEST))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["score"], 81);
        assert_eq!(json["demand"], "High");
        assert_eq!(json["mode"], "catalog");
        assert_eq!(json["algorithm"], "BrewlyAI v2.0 Advanced");
    }

    #[tokio::test]
    async fn test_missing_selection_is_bad_request() {
        let body = CATALOG_REQUEST.replace("\"pastryId\": \"almond-biscotti\"", "\"pastryId\": \"\"");
        let response = app()
            .oneshot(post_json("/api/v1/pairings/catalog", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], "pastry_id");
        assert_eq!(json["error"]["message"], "Please select a pastry");
    }

    #[tokio::test]
    async fn test_b2b_and_custom_endpoints() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/pairings/b2b",
                r#"{"coffee":"mocha","pastry":"eclair","season":"summer","venue":"cafe","targetAudience":"tourists"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let score = json["score"].as_u64().unwrap();
        assert!((85..=99).contains(&score));
        assert_eq!(json["avgStock"], 75);
        assert_eq!(json["venue"], "cafe");

        let response = app()
            .oneshot(post_json(
                "/api/v1/pairings/custom",
                r#"{"coffee":"Dark Roast","pastry":"Berry Tart","stock":20,"profit":"7.50","notes":"Vegan"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        // 75 + 5 + 4 + 10 + 8 already reaches the ceiling
        assert_eq!(json["score"], 95);
        assert_eq!(json["customNotes"], "Vegan");
    }

    #[tokio::test]
    async fn test_report_download() {
        let response = app()
            .oneshot(post_json("/api/v1/pairings/catalog", CATALOG_REQUEST))
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let result = String::from_utf8(bytes.to_vec()).unwrap();

        let response = app()
            .oneshot(post_json("/api/v1/reports/csv", &result))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
        assert!(disposition.starts_with("attachment; filename=\"brewly_ai_pairing_"));
        assert!(disposition.ends_with(".csv\""));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(csv.starts_with("Field,Value"));

        let response = app()
            .oneshot(post_json("/api/v1/reports/pdf", &result))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
