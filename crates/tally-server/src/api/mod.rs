//! User endpoints.
//!
//! - `POST /register` : validate and insert one record, reply with its id
//! - `GET  /data`     : every stored record as a JSON array

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tally_core::error::TallyError;
use tally_core::model::{RegisterRequest, User};

use crate::app_state::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct Registered {
    pub id: u64,
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<Registered>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e.body_text(), "register body rejected");
        TallyError::Validation("invalid JSON body".into())
    })?;
    let user = req.validate()?;
    let id = state.store().insert(user).await?;
    tracing::info!(id, "user registered");
    Ok(Json(Registered { id }))
}

pub async fn data(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.store().list_all().await?))
}
