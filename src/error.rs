// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `NestoR` library.
//!
//! Every failure is reported straight to the caller. Nothing is retried and
//! no distinction is made between transient and permanent failures.

use reqwest::StatusCode;
use thiserror::Error;

use crate::client::MissingToken;
use crate::response::OAuth2ResponseError;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be built or sent (malformed URL, DNS, TLS,
    /// connection failure), or the response body could not be read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The token endpoint answered with a status other than `200 OK`.
    ///
    /// Displays as the vendor's `error_description`, which is empty when the
    /// endpoint sent no body.
    #[error(transparent)]
    AuthorizationRejected(OAuth2ResponseError),

    /// The data endpoint answered with a status other than `200 OK`.
    ///
    /// Displays as the code followed by its standard reason phrase, not the
    /// reason text the server sent. A code without a registered phrase, such
    /// as 599, displays as `599 <unknown status code>`.
    #[error("{0}")]
    FetchRejected(StatusCode),

    /// A response body was present but is not valid JSON for the requested
    /// shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The client was created without an access token.
    #[error("no authorization token, register at: {authorize_url}")]
    MissingToken {
        /// Browser consent URL for obtaining an authorization code.
        authorize_url: String,
    },
}

impl Error {
    /// Returns the HTTP status of a rejected fetch, if this error is one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::FetchRejected(status) => Some(*status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Returns `true` if the vendor rejected the authorization code exchange.
    #[must_use]
    pub fn is_authorization_rejected(&self) -> bool {
        matches!(self, Self::AuthorizationRejected(_))
    }
}

impl<T> From<MissingToken<T>> for Error {
    fn from(err: MissingToken<T>) -> Self {
        Self::MissingToken {
            authorize_url: err.authorize_url().to_string(),
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
