use crate::app_context::AppContext;
use crate::thumbnails::storage::ObjectStore;
use crate::{health, thumbnails};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

pub fn new<S: ObjectStore + 'static>(app_context: AppContext<S>) -> Router {
    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    tracing::info!("Initialized HTTP configuration.");

    Router::new()
        .nest("/health", health_routes)
        .route("/invocations", post(thumbnails::handlers::invoke::<S>))
        .with_state(app_context)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
        .layer(CatchPanicLayer::new())
}
