// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nest client builder.

use crate::client::{MissingToken, Nest};
use crate::protocol::{HttpConfig, HttpTransport, Transport};

/// Builder for [`Nest`] clients.
///
/// Created with [`Nest::builder`] for the HTTP transport, or with
/// [`NestBuilder::with_transport`] for any other [`Transport`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use nestor_lib::Nest;
/// use nestor_lib::protocol::HttpConfig;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let http = reqwest::Client::builder()
///     .timeout(Duration::from_secs(15))
///     .build()?;
///
/// let nest = Nest::builder("my-client-id")
///     .token("c.my-access-token")
///     .config(HttpConfig::default().with_user_agent("thermo-panel/2.1"))
///     .http_client(http)
///     .connect()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NestBuilder<T = HttpTransport> {
    client_id: String,
    token: String,
    config: HttpConfig,
    transport: T,
}

impl NestBuilder<HttpTransport> {
    /// Creates a builder using the default HTTP transport.
    pub(crate) fn new(client_id: impl Into<String>) -> Self {
        Self::with_transport(client_id, HttpTransport::default())
    }

    /// Uses a pre-configured `reqwest` client, e.g. one with a timeout.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = HttpTransport::from_client(client);
        self
    }
}

impl<T: Transport> NestBuilder<T> {
    /// Creates a builder using the given transport.
    #[must_use]
    pub fn with_transport(client_id: impl Into<String>, transport: T) -> Self {
        Self {
            client_id: client_id.into(),
            token: String::new(),
            config: HttpConfig::default(),
            transport,
        }
    }

    /// Sets the access token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the endpoint configuration.
    #[must_use]
    pub fn config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the transport.
    #[must_use]
    pub fn transport<U: Transport>(self, transport: U) -> NestBuilder<U> {
        NestBuilder {
            client_id: self.client_id,
            token: self.token,
            config: self.config,
            transport,
        }
    }

    /// Creates the client. No network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`MissingToken`], carrying the usable client, if no token was
    /// set.
    pub fn connect(self) -> Result<Nest<T>, MissingToken<T>> {
        let nest = Nest::from_parts(self.client_id, self.token, self.config, self.transport);

        if nest.has_token() {
            Ok(nest)
        } else {
            tracing::debug!(
                client_id = %nest.client_id(),
                "No access token, authorization required"
            );
            Err(MissingToken::new(nest))
        }
    }
}
