//! API routes for member-server

pub mod extract;
pub mod health;
pub mod members;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let member_collection = get(members::list_members).post(members::create_member);

    let member_routes = Router::new()
        .route("/members/", member_collection.clone())
        .route("/members", member_collection)
        .route(
            "/members/{id}",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        );

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness))
        .merge(member_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
