//! Function-key authorization.
//!
//! A key is accepted from the `code` query parameter or the
//! `x-functions-key` header. An empty key set disables the check.

use axum::extract::Query;
use axum::http::{HeaderMap, Uri};
use bookstore_kernel::settings::AuthSettings;
use serde::Deserialize;
use thiserror::Error;

/// Header carrying the function key.
pub const KEY_HEADER: &str = "x-functions-key";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("function key is missing")]
    MissingKey,
    #[error("function key is invalid")]
    InvalidKey,
}

/// Set of accepted function keys.
#[derive(Debug, Clone, Default)]
pub struct FunctionKeys {
    keys: Vec<String>,
}

impl FunctionKeys {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys
                .into_iter()
                .map(Into::into)
                .filter(|key: &String| !key.is_empty())
                .collect(),
        }
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(settings.function_keys.iter().cloned())
    }

    /// Whether requests are checked at all.
    pub fn is_enabled(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Check the key presented on a request.
    pub fn authorize(&self, uri: &Uri, headers: &HeaderMap) -> Result<(), AuthError> {
        if !self.is_enabled() {
            return Ok(());
        }

        let presented = presented_key(uri, headers).ok_or(AuthError::MissingKey)?;

        // Every configured key is compared so timing does not reveal which matched.
        let matched = self
            .keys
            .iter()
            .fold(false, |found, key| constant_time_eq(key, &presented) | found);

        if matched {
            Ok(())
        } else {
            tracing::warn!(target: "bookstore-authz", "rejected request with unknown function key");
            Err(AuthError::InvalidKey)
        }
    }
}

#[derive(Deserialize)]
struct KeyQuery {
    code: Option<String>,
}

/// Header first, then query string.
fn presented_key(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(KEY_HEADER).and_then(|v| v.to_str().ok()) {
        return Some(value.to_string());
    }

    Query::<KeyQuery>::try_from_uri(uri).ok()?.0.code
}

fn constant_time_eq(expected: &str, presented: &str) -> bool {
    let a = expected.as_bytes();
    let b = presented.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
