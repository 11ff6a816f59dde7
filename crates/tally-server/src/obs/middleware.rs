//! Axum middleware counting completed requests.

use axum::{
    body::Body,
    extract::{MatchedPath, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

use super::body::{CompletionBody, CompletionObserver};
use crate::app_state::AppState;

/// Labels captured at request time, recorded once the response finishes.
struct RequestObservation {
    state: AppState,
    method: String,
    route: String,
    code: String,
}

impl CompletionObserver for RequestObservation {
    fn completed(self: Box<Self>) {
        tracing::trace!(method = %self.method, route = %self.route, code = %self.code, "request completed");
        self.state
            .metrics()
            .observe(&self.method, &self.route, &self.code);
    }

    fn aborted(self: Box<Self>) {
        tracing::debug!(method = %self.method, route = %self.route, "response aborted before completion");
    }
}

/// Label shared by every request no route or static file answered.
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

/// Route label: the matched route pattern; for unmatched requests the bare
/// path (no query) only when the static fallback served it, so arbitrary
/// 404 paths cannot mint new series.
fn route_label(matched: Option<String>, path: &str, status: StatusCode) -> String {
    match matched {
        Some(pattern) => pattern,
        None if status.as_u16() < 400 => path.to_owned(),
        None => UNMATCHED_ROUTE.to_owned(),
    }
}

/// Must be installed with `Router::layer` so `MatchedPath` is populated.
///
/// If the handler future is dropped (connection lost before a response
/// exists) nothing is recorded.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let matched = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned());
    let path = req.uri().path().to_owned();

    let res = next.run(req).await;

    let obs = Box::new(RequestObservation {
        state,
        method: method.as_str().to_owned(),
        route: route_label(matched, &path, res.status()),
        code: res.status().as_u16().to_string(),
    });

    // axum swaps HEAD bodies for an empty one before hyper writes the head,
    // so there is no body end to wait for: counted when the response exists,
    // even if the client disconnects before the headers are flushed.
    if method == Method::HEAD {
        obs.completed();
        return res;
    }

    res.map(|body| Body::new(CompletionBody::new(body, obs)))
}
