// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Token exchange envelopes.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::null_as_default;

/// Successful authorization code exchange.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use nestor_lib::response::OAuth2Response;
///
/// let json = r#"{"access_token":"c.abc","expires_in":315360000}"#;
/// let response: OAuth2Response = serde_json::from_str(json).unwrap();
/// assert_eq!(response.access_token, "c.abc");
/// assert_eq!(response.expires_in(), Duration::from_secs(315_360_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuth2Response {
    /// The access token used to authenticate data requests.
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,

    /// Token lifetime in seconds.
    #[serde(rename = "expires_in", deserialize_with = "null_as_default")]
    pub expires_in_secs: i64,
}

impl OAuth2Response {
    /// Returns the token lifetime. Negative lifetimes are reported as zero.
    #[must_use]
    pub fn expires_in(&self) -> Duration {
        Duration::from_secs(u64::try_from(self.expires_in_secs).unwrap_or(0))
    }
}

/// Rejected authorization code exchange.
///
/// Displays as the human-readable description; the short error code is
/// available through [`name`](Self::name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(default)]
#[error("{description}")]
pub struct OAuth2ResponseError {
    /// Short error code, e.g. `invalid_grant`.
    #[serde(rename = "error", deserialize_with = "null_as_default")]
    pub name: String,

    /// Human-readable description of the failure.
    #[serde(rename = "error_description", deserialize_with = "null_as_default")]
    pub description: String,
}

impl OAuth2ResponseError {
    /// Creates an error envelope.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns the short error code.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_envelope() {
        let json = r#"{"error":"oauth2_error","error_description":"authorization code expired"}"#;
        let err: OAuth2ResponseError = serde_json::from_str(json).unwrap();
        assert_eq!(err.name(), "oauth2_error");
        assert_eq!(err.description(), "authorization code expired");
        assert_eq!(err.to_string(), "authorization code expired");
    }

    #[test]
    fn error_envelope_without_description() {
        let err: OAuth2ResponseError = serde_json::from_str(r#"{"error":"x"}"#).unwrap();
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn null_fields_take_zero_values() {
        let response: OAuth2Response =
            serde_json::from_str(r#"{"access_token":"abc","expires_in":null}"#).unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.expires_in(), Duration::ZERO);

        let err: OAuth2ResponseError =
            serde_json::from_str(r#"{"error":null,"error_description":"bad code"}"#).unwrap();
        assert_eq!(err.name(), "");
        assert_eq!(err.to_string(), "bad code");
    }

    #[test]
    fn negative_lifetime_is_zero() {
        let response = OAuth2Response {
            access_token: "t".to_string(),
            expires_in_secs: -5,
        };
        assert_eq!(response.expires_in(), Duration::ZERO);
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let response: OAuth2Response = serde_json::from_str("{}").unwrap();
        assert_eq!(response, OAuth2Response::default());
    }
}
