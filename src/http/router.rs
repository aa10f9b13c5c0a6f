use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::json_file::JsonFileStorage;
use crate::{favorites, health, http::cors};
use axum::{
    routing::{delete, get},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<JsonFileStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let favorites_routes = Router::new()
        .route(
            "/",
            get(favorites::handlers::list).post(favorites::handlers::save),
        )
        .route("/near", get(favorites::handlers::find_near))
        .route("/:location-id", delete(favorites::handlers::remove));

    Router::new()
        .nest("/health", health_routes)
        .nest("/favorites", favorites_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
