//! Shared helpers for HTTP-level tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::util::ServiceExt; // for `oneshot`

use tally_core::error::{Result, TallyError};
use tally_core::model::{NewUser, User};
use tally_server::{
    app_state::AppState,
    config::TallyConfig,
    router,
    store::{MemoryStore, UserStore},
};

pub fn app_with(store: Arc<dyn UserStore>) -> (Router, AppState) {
    let state = AppState::new(TallyConfig::default(), store).unwrap();
    (router::build_router(state.clone()), state)
}

pub fn app() -> (Router, AppState) {
    app_with(Arc::new(MemoryStore::new()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).method("GET").body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and read the body to the end, completing the cycle.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub fn count(state: &AppState, method: &str, route: &str, code: &str) -> u64 {
    state.metrics().requests().get(&[method, route, code])
}

/// Store whose every call fails.
pub struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn insert(&self, _user: NewUser) -> Result<u64> {
        Err(TallyError::Persistence("disk on fire at /var/lib/secret.db".into()))
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        Err(TallyError::Persistence("disk on fire at /var/lib/secret.db".into()))
    }
}

/// Memory store that sleeps before answering.
pub struct SlowStore {
    pub inner: MemoryStore,
    pub delay: Duration,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryStore::new(),
            delay,
        }
    }
}

#[async_trait]
impl UserStore for SlowStore {
    async fn insert(&self, user: NewUser) -> Result<u64> {
        tokio::time::sleep(self.delay).await;
        self.inner.insert(user).await
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_all().await
    }
}
