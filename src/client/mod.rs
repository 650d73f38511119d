// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Nest API client handle.
//!
//! A [`Nest`] holds the client identifier and the access token. Every
//! operation is one independent request/response exchange: there is no
//! session, no retry and no cache.
//!
//! The token is a plain owned field. [`Nest::authorize`] takes `&mut self`
//! while data reads take `&self`, so a handle shared across tasks has to be
//! wrapped in the caller's own lock before it can be re-authorized.

mod builder;

pub use builder::NestBuilder;

use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::protocol::{
    ApiRequest, HttpConfig, HttpTransport, ResponseBody, Transport, decode_json,
};
use crate::response::{OAuth2Response, OAuth2ResponseError};

/// Path of the `devices` sub-resource.
const DEVICES_PATH: &str = "devices";

/// Client for the Nest cloud REST API.
///
/// # Examples
///
/// ```no_run
/// use nestor_lib::{Nest, Response};
///
/// # async fn example() -> nestor_lib::Result<()> {
/// let nest = Nest::connect("my-client-id", "c.my-access-token")?;
///
/// let mut response = Response::default();
/// nest.all(&mut response).await?;
///
/// for (id, thermostat) in &response.devices.thermostats {
///     println!("{id}: {} at {}", thermostat.name, thermostat.ambient_temperature());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Nest<T = HttpTransport> {
    client_id: String,
    token: String,
    config: HttpConfig,
    transport: T,
}

impl Nest<HttpTransport> {
    /// Creates a client with the default endpoints and HTTP transport.
    ///
    /// No network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`MissingToken`] if `token` is empty. The error still carries
    /// a usable client (see [`MissingToken::into_client`]) together with the
    /// browser consent URL for obtaining an authorization code.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nestor_lib::Nest;
    ///
    /// # async fn example() -> nestor_lib::Result<()> {
    /// let mut nest = match Nest::connect("my-client-id", "") {
    ///     Ok(nest) => nest,
    ///     Err(missing) => {
    ///         println!("Open {} and paste the PIN", missing.authorize_url());
    ///         missing.into_client()
    ///     }
    /// };
    ///
    /// nest.authorize("my-client-secret", "PIN1234").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn connect(
        client_id: impl Into<String>,
        token: impl Into<String>,
    ) -> std::result::Result<Self, MissingToken> {
        Self::builder(client_id).token(token).connect()
    }

    /// Returns a builder for a client with custom endpoints or transport.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    #[must_use]
    pub fn builder(client_id: impl Into<String>) -> NestBuilder {
        NestBuilder::new(client_id)
    }
}

impl<T> Nest<T> {
    pub(crate) fn from_parts(
        client_id: String,
        token: String,
        config: HttpConfig,
        transport: T,
    ) -> Self {
        Self {
            client_id,
            token,
            config,
            transport,
        }
    }

    /// Returns the client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the access token, empty if none has been obtained yet.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns `true` if an access token is set.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Replaces the access token, e.g. with one the caller stored earlier.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// Returns the endpoint configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the browser consent URL for this client.
    #[must_use]
    pub fn authorize_url(&self) -> String {
        self.config.authorize_url(&self.client_id)
    }
}

impl<T: Transport> Nest<T> {
    /// Exchanges an authorization code for an access token.
    ///
    /// On success the token is stored on this client. On failure the stored
    /// token is left untouched.
    ///
    /// # Arguments
    ///
    /// * `secret` - The client secret
    /// * `code` - The authorization code (PIN) from the browser consent flow
    ///
    /// # Errors
    ///
    /// - `Error::Http` if the request cannot be sent or the body read
    /// - `Error::AuthorizationRejected` if the endpoint answers with a status
    ///   other than `200 OK`; its text is the vendor's error description
    /// - `Error::Decode` if a non-empty body is not the expected JSON
    pub async fn authorize(&mut self, secret: &str, code: &str) -> Result<()> {
        let url = self.config.access_token_url(&self.client_id, secret, code);

        tracing::debug!(client_id = %self.client_id, "Exchanging authorization code");

        let response = self
            .transport
            .send(ApiRequest::post(url, self.config.user_agent()))
            .await?;
        let status = response.status();

        tracing::debug!(status = %status, "Received token endpoint response");

        let body = response.into_body().into_bytes().await?;

        if status != StatusCode::OK {
            let rejection: OAuth2ResponseError = decode_json(&body)?.unwrap_or_default();
            tracing::warn!(
                status = %status,
                error = %rejection.name(),
                "Authorization code rejected"
            );
            return Err(Error::AuthorizationRejected(rejection));
        }

        let granted: OAuth2Response = decode_json(&body)?.unwrap_or_default();
        self.token = granted.access_token;

        tracing::info!(
            client_id = %self.client_id,
            expires_in_secs = granted.expires_in_secs,
            "Access token stored"
        );

        Ok(())
    }

    /// Fetches the root resource and decodes it into `destination`.
    ///
    /// Decode into [`Response`](crate::Response) for the full device set, or
    /// into a narrower type of your own.
    ///
    /// # Errors
    ///
    /// See [`devices`](Self::devices).
    pub async fn all<D: DeserializeOwned>(&self, destination: &mut D) -> Result<()> {
        self.get("", destination).await
    }

    /// Fetches the `devices` sub-resource and decodes it into `destination`.
    ///
    /// Decode into [`Devices`](crate::Devices) or a narrower type of your own.
    /// An empty response body leaves `destination` unchanged.
    ///
    /// # Errors
    ///
    /// - `Error::Http` if the request cannot be sent or the body read
    /// - `Error::FetchRejected` if the endpoint answers with a status other
    ///   than `200 OK`; `destination` is left unchanged
    /// - `Error::Decode` if a non-empty body is not valid JSON for `D`
    pub async fn devices<D: DeserializeOwned>(&self, destination: &mut D) -> Result<()> {
        self.get(DEVICES_PATH, destination).await
    }

    async fn get<D: DeserializeOwned>(&self, path: &str, destination: &mut D) -> Result<()> {
        let url = self.config.data_url(path, &self.token);

        tracing::debug!(path = %path, "Fetching device data");

        let response = self
            .transport
            .send(ApiRequest::get(url, self.config.user_agent()))
            .await?;
        let status = response.status();

        if status != StatusCode::OK {
            tracing::warn!(path = %path, status = %status, "Device data request rejected");
            return Err(Error::FetchRejected(status));
        }

        let body = response.into_body().into_bytes().await?;

        tracing::debug!(path = %path, bytes = body.len(), "Received device data");

        if let Some(decoded) = decode_json(&body)? {
            *destination = decoded;
        }

        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Nest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() {
            "<none>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Nest")
            .field("client_id", &self.client_id)
            .field("token", &token)
            .field("config", &self.config)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Returned when a client is created without an access token.
///
/// Not fatal: the client inside is fully usable for
/// [`Nest::authorize`]. Converts into [`Error::MissingToken`] for callers
/// that want to treat it as a plain error.
pub struct MissingToken<T = HttpTransport> {
    client: Box<Nest<T>>,
    authorize_url: String,
}

impl<T> MissingToken<T> {
    pub(crate) fn new(client: Nest<T>) -> Self {
        let authorize_url = client.authorize_url();
        Self {
            client: Box::new(client),
            authorize_url,
        }
    }

    /// Returns the browser consent URL where an authorization code can be
    /// obtained.
    #[must_use]
    pub fn authorize_url(&self) -> &str {
        &self.authorize_url
    }

    /// Returns the client.
    #[must_use]
    pub fn client(&self) -> &Nest<T> {
        &self.client
    }

    /// Consumes the error and returns the client.
    #[must_use]
    pub fn into_client(self) -> Nest<T> {
        *self.client
    }
}

impl<T> fmt::Debug for MissingToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MissingToken")
            .field("client_id", &self.client.client_id)
            .field("authorize_url", &self.authorize_url)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for MissingToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no authorization token, register at: {}",
            self.authorize_url
        )
    }
}

impl<T> std::error::Error for MissingToken<T> {}
