/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router and applies the
 * cross-cutting layers.
 *
 * # Layers
 *
 * - `TraceLayer` - one span per request, logged through `tracing`
 * - `CorsLayer` - admits the configured browser origin with the
 *   `Content-Type` and `Authorization` headers
 */

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::routes::api_routes::{
    configure_auth_routes, configure_feedback_routes, configure_protected_routes,
};
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, token service, hasher)
/// * `config` - Used for the CORS origin
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router<()> {
    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_feedback_routes(router);
    let router = configure_protected_routes(router, &app_state);

    // Fallback handler for 404
    let router = router.fallback(|| async {
        (
            StatusCode::NOT_FOUND,
            axum::Json(MessageResponse::new("Not found")),
        )
    });

    router
        .layer(build_cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Build the CORS layer for the configured client origin
fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match HeaderValue::from_str(&config.cors_origin) {
        Ok(origin) => base.allow_origin(origin),
        Err(e) => {
            tracing::warn!(
                "Ignoring invalid CORS_ORIGIN {:?}: {}; cross-origin requests will be refused",
                config.cors_origin,
                e
            );
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_database;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn test_router() -> Router<()> {
        let config = AppConfig::builder()
            .secret_key("router-secret")
            .database_url("sqlite::memory:")
            .max_connections(1)
            .build()
            .unwrap();
        let pool = connect_database(&config).await.unwrap();
        let state = AppState::new(&config, pool).unwrap();
        create_router(state, &config)
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/feedbacks")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_preflight_from_configured_origin() {
        let response = test_router()
            .await
            .oneshot(preflight("http://localhost:5173"))
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:5173"))
        );
    }

    #[tokio::test]
    async fn test_preflight_from_other_origin() {
        let response = test_router()
            .await
            .oneshot(preflight("http://evil.example"))
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_dashboard_is_gated() {
        let response = test_router()
            .await
            .oneshot(
                Request::builder()
                    .uri("/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
