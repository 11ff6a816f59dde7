//! User record model.
//!
//! Records travel as camelCase JSON both on the wire and in the file store.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// A stored user row. `id` is assigned by the store, unique and monotonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub full_name: String,
    pub favorite_color: String,
    pub favorite_series: String,
}

/// Registration payload. Fields are optional at the serde layer so that a
/// missing field surfaces as a validation error rather than a decode error.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub favorite_color: Option<String>,
    #[serde(default)]
    pub favorite_series: Option<String>,
}

/// A validated record awaiting an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub favorite_color: String,
    pub favorite_series: String,
}

impl NewUser {
    pub fn with_id(self, id: u64) -> User {
        User {
            id,
            full_name: self.full_name,
            favorite_color: self.favorite_color,
            favorite_series: self.favorite_series,
        }
    }
}

impl RegisterRequest {
    /// Check that every field is present and non-blank.
    ///
    /// Values are kept as sent; blankness is judged on the trimmed value.
    pub fn validate(self) -> Result<NewUser> {
        Ok(NewUser {
            full_name: required("fullName", self.full_name)?,
            favorite_color: required("favoriteColor", self.favorite_color)?,
            favorite_series: required("favoriteSeries", self.favorite_series)?,
        })
    }
}

fn required(field: &str, v: Option<String>) -> Result<String> {
    match v {
        Some(s) if !s.trim().is_empty() => Ok(s),
        Some(_) => Err(TallyError::Validation(format!("{field} must not be empty"))),
        None => Err(TallyError::Validation(format!("{field} is required"))),
    }
}
