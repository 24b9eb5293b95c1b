use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, hospitals};
use crate::service::HospitalService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub hospitals: HospitalService,
}

impl AppState {
    pub fn new(hospitals: HospitalService) -> Self {
        Self { hospitals }
    }
}

/// Builds the full application router
pub fn router(state: AppState) -> Router {
    // The browser client is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Hospital routes
        .route("/hospitalapi/add", post(hospitals::add_hospital))
        .route("/hospitalapi/all", get(hospitals::get_all_hospitals))
        .route("/hospitalapi/get/:id", get(hospitals::get_hospital))
        .route("/hospitalapi/update", put(hospitals::update_hospital))
        .route("/hospitalapi/delete/:id", delete(hospitals::delete_hospital))
        .route(
            "/hospitalapi/email/:email",
            get(hospitals::get_hospital_by_email),
        )
        .route(
            "/hospitalapi/contact/:contact",
            get(hospitals::get_hospital_by_contact),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
