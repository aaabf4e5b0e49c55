//! Router construction

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, customers, health, leads};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/leads", post(leads::submit_lead))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/customers", get(customers::list_customers))
        .route("/api/v1/customers/stats", get(customers::customer_stats))
        .route("/api/v1/customers/{id}/status", patch(customers::change_status))
        .route(
            "/api/v1/customers/{id}/appointment",
            post(customers::schedule_appointment),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
