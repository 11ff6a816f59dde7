//! Axum router wiring.
//!
//! Request tracking is installed with `Router::layer` so it wraps every
//! route and the static fallback, and sees the matched route pattern.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/register", post(api::register))
        .route("/data", get(api::data))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz));

    if let Some(dir) = state.cfg().server.static_dir.as_deref() {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .with_state(state)
}
