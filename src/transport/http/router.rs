use crate::domain::{Fruit, FruitForm};
use crate::transport::http::handlers::{fruits, health, home};
use crate::transport::http::middleware::{log_request, override_method};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::Request;
use axum::routing::get;
use axum::Router;
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home_handler,
        health::healthcheck_handler,
        fruits::index_handler,
        fruits::create_handler,
        fruits::new_handler,
        fruits::show_handler,
        fruits::edit_handler,
        fruits::update_handler,
        fruits::delete_handler
    ),
    components(schemas(ApiResponse, Fruit, FruitForm))
)]
pub struct ApiDoc;

/// The served application: the router behind the method override.
pub type App = MapRequest<Router, fn(Request) -> Request>;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/fruits",
            get(fruits::index_handler).post(fruits::create_handler),
        )
        .route("/fruits/new", get(fruits::new_handler))
        .route(
            "/fruits/:id",
            get(fruits::show_handler)
                .put(fruits::update_handler)
                .patch(fruits::update_handler)
                .delete(fruits::delete_handler),
        )
        .route("/fruits/:id/edit", get(fruits::edit_handler))
        .layer(axum::middleware::from_fn(log_request))
        .with_state(app_state)
}

/// Wraps a finished router so `POST ...?_method=` is rewritten before routing.
pub fn with_method_override(router: Router) -> App {
    MapRequestLayer::new(override_method as fn(Request) -> Request).layer(router)
}
