use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::observability;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod auth;
pub mod inquiries;
pub mod products;
pub mod settings;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

/// Build the full application router: public storefront reads, the inquiry
/// form endpoint, admin CRUD, and static product images.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: &str) -> Router {
    // Public routes (health, metrics, static assets)
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .nest_service("/public", ServeDir::new(static_dir));

    // Catalog + inquiry + settings API, same surface the Next.js admin and
    // storefront pages called.
    let api = Router::new()
        .route(
            "/api/products",
            get(products::get_products)
                .post(products::create_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/api/inquiry",
            post(inquiries::create_inquiry)
                .get(inquiries::list_inquiries)
                .patch(inquiries::update_inquiry_status)
                .delete(inquiries::delete_inquiry),
        )
        .route("/api/settings", get(settings::get_settings).post(settings::save_settings))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/change-password", post(auth::change_password));

    // Compose
    public
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
