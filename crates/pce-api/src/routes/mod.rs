//! API route definitions and router builder.

pub mod health;
pub mod parserconfig;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Schemas
        .route("/parserconfig/schema", get(parserconfig::get_schema))
        .route("/parserconfig/testschema", get(parserconfig::get_test_schema))
        // Validation
        .route(
            "/parserconfig/configuration/validate",
            post(parserconfig::validate_configuration),
        )
        .route(
            "/parserconfig/configurations/validate",
            post(parserconfig::validate_configurations),
        )
        // Dry runs
        .route(
            "/parserconfig/configuration/test",
            post(parserconfig::test_configuration),
        )
        .route(
            "/parserconfig/configurations/test",
            post(parserconfig::test_configurations),
        );

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
