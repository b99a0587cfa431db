/**
 * API Route Handlers
 *
 * This module wires handlers onto paths.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /signup` - User registration
 * - `POST /login` - User login, returns a session token
 *
 * ## Feedback (public)
 * - `POST /api/feedbacks` - Submit feedback
 * - `GET /api/feedbacks` - List feedback
 * - `DELETE /api/feedbacks/{id}` - Delete feedback
 *
 * ## Protected
 * - `GET /dashboard` - Requires `Authorization: Bearer <token>`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{dashboard, login, signup};
use crate::backend::feedback::{create_feedback, delete_feedback, list_feedbacks};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Configure the feedback board routes
///
/// These routes do not pass through the authentication middleware.
pub fn configure_feedback_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/feedbacks", post(create_feedback).get(list_feedbacks))
        .route("/api/feedbacks/{id}", delete(delete_feedback))
}

/// Configure routes that require a valid session token
///
/// The middleware is applied with `route_layer`, so it only runs for
/// requests that matched one of these routes.
pub fn configure_protected_routes(
    router: Router<AppState>,
    app_state: &AppState,
) -> Router<AppState> {
    let protected = Router::new()
        .route("/dashboard", get(dashboard))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(protected)
}
