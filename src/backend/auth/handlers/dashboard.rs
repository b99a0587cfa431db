/**
 * Dashboard Handler
 *
 * GET /dashboard sits behind the authentication middleware and greets the
 * caller with the claims decoded from their token.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::DashboardResponse;
use crate::backend::middleware::AuthUser;

/// Protected dashboard handler
///
/// Only reachable once the middleware has admitted the request, so the
/// claims are always present.
pub async fn dashboard(AuthUser(claims): AuthUser) -> Json<DashboardResponse> {
    tracing::debug!("Dashboard accessed by {}", claims.email);

    Json(DashboardResponse {
        message: "Welcome to the dashboard!".to_string(),
        user: claims,
    })
}
