//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{admin_routes, health_routes};
use super::openapi::ApiDoc;
use super::state::AppState;

/// Create the main router with all routes.
///
/// Access control for `/admin` is enforced upstream of this service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/admin", admin_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
