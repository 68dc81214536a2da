pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

pub use state::ApiState;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use middleware::{log_responses, set_request_context};

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/{slug}", get(handlers::get_post))
        .route("/api/newsletter/subscribe", post(handlers::subscribe))
        .route("/api/newsletter/count", get(handlers::subscriber_count))
        .route("/api/newsletter/subscribers", get(handlers::list_subscribers))
        .route("/healthz", get(handlers::health))
        .with_state(state)
        .layer(axum_middleware::from_fn(log_responses))
        .layer(axum_middleware::from_fn(set_request_context))
}
