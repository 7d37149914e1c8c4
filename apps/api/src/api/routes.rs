use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{categories, health, pickmes};
use crate::api::state::AppState;

/// Builds the application router
///
/// `/health` is public; every resource route requires a bearer token.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/pickmes",
            get(pickmes::list_pickmes).post(pickmes::create_pickme),
        )
        .route(
            "/pickmes/:id",
            get(pickmes::get_pickme)
                .put(pickmes::update_pickme)
                .delete(pickmes::delete_pickme),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
