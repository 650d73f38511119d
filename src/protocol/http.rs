// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport and endpoint configuration for the Nest cloud API.

use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::error::Result;
use crate::protocol::{ApiRequest, ResponseBody, Transport, TransportResponse};

// ============================================================================
// HttpConfig - Vendor endpoints
// ============================================================================

/// Endpoints and user agent used to talk to the vendor.
///
/// The defaults point at the production API. Override the base URLs to talk
/// to a staging host or a local mock server.
///
/// # Examples
///
/// ```
/// use nestor_lib::protocol::HttpConfig;
///
/// let config = HttpConfig::default();
/// assert_eq!(
///     config.data_url("devices", "c.tok"),
///     "https://developer-api.nest.com/devices?auth=c.tok"
/// );
///
/// let config = HttpConfig::default()
///     .with_api_url("http://127.0.0.1:8080/")
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.data_url("", "t"), "http://127.0.0.1:8080/?auth=t");
/// assert_eq!(config.user_agent(), "my-app/1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    api_url: String,
    oauth_url: String,
    login_url: String,
    user_agent: String,
}

impl HttpConfig {
    /// Default data API base URL.
    pub const DEFAULT_API_URL: &'static str = "https://developer-api.nest.com";
    /// Default token endpoint base URL.
    pub const DEFAULT_OAUTH_URL: &'static str = "http://api.home.nest.com";
    /// Default browser consent base URL.
    pub const DEFAULT_LOGIN_URL: &'static str = "https://home.nest.com";
    /// Default `User-Agent` header value.
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    /// Sets the data API base URL.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = trim_base(url.into());
        self
    }

    /// Sets the token endpoint base URL.
    #[must_use]
    pub fn with_oauth_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_url = trim_base(url.into());
        self
    }

    /// Sets the browser consent base URL.
    #[must_use]
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = trim_base(url.into());
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the data API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the token endpoint base URL.
    #[must_use]
    pub fn oauth_url(&self) -> &str {
        &self.oauth_url
    }

    /// Returns the browser consent base URL.
    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Builds the browser consent URL for a client.
    ///
    /// The client identifier is inserted verbatim so the URL shows it
    /// exactly as registered.
    #[must_use]
    pub fn authorize_url(&self, client_id: &str) -> String {
        format!(
            "{}/login/oauth2?client_id={client_id}&state=STATE",
            self.login_url
        )
    }

    /// Builds the token endpoint URL for an authorization code exchange.
    #[must_use]
    pub fn access_token_url(&self, client_id: &str, secret: &str, code: &str) -> String {
        format!(
            "{}/oauth2/access_token?code={}&client_id={}&client_secret={}&grant_type=authorization_code",
            self.oauth_url,
            urlencoding::encode(code),
            urlencoding::encode(client_id),
            urlencoding::encode(secret)
        )
    }

    /// Builds a data URL.
    ///
    /// `path` and `token` are interpolated verbatim: the path must be a clean
    /// segment and the token URL-safe.
    #[must_use]
    pub fn data_url(&self, path: &str, token: &str) -> String {
        format!("{}/{path}?auth={token}", self.api_url)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            oauth_url: Self::DEFAULT_OAUTH_URL.to_string(),
            login_url: Self::DEFAULT_LOGIN_URL.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

// ============================================================================
// HttpTransport - reqwest implementation
// ============================================================================

/// [`Transport`] backed by a `reqwest` client.
///
/// No timeout is set by default. To bound request time, build a
/// `reqwest::Client` with the desired settings and wrap it with
/// [`from_client`](Self::from_client).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use nestor_lib::protocol::HttpTransport;
///
/// let client = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// let transport = HttpTransport::from_client(client);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a default `reqwest` client.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, like
    /// `reqwest::Client::new`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns the wrapped `reqwest` client.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Transport for HttpTransport {
    type Body = reqwest::Response;

    async fn send(&self, request: ApiRequest) -> Result<TransportResponse<Self::Body>> {
        let response = self
            .client
            .request(request.method().clone(), request.url())
            .header(USER_AGENT, request.user_agent())
            .header(ACCEPT, request.accept())
            .send()
            .await?;

        Ok(TransportResponse::new(response.status(), response))
    }
}

impl ResponseBody for reqwest::Response {
    async fn into_bytes(self) -> Result<Vec<u8>> {
        Ok(self.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints() {
        let config = HttpConfig::default();
        assert_eq!(config.api_url(), "https://developer-api.nest.com");
        assert_eq!(config.oauth_url(), "http://api.home.nest.com");
        assert_eq!(config.login_url(), "https://home.nest.com");
        assert!(config.user_agent().starts_with("nestor_lib/"));
    }

    #[test]
    fn authorize_url() {
        let config = HttpConfig::default();
        assert_eq!(
            config.authorize_url("abc-123"),
            "https://home.nest.com/login/oauth2?client_id=abc-123&state=STATE"
        );
    }

    #[test]
    fn authorize_url_keeps_client_id_verbatim() {
        let config = HttpConfig::default();
        assert_eq!(
            config.authorize_url("my app+1"),
            "https://home.nest.com/login/oauth2?client_id=my app+1&state=STATE"
        );
    }

    #[test]
    fn access_token_url() {
        let config = HttpConfig::default();
        assert_eq!(
            config.access_token_url("client", "s3cret", "PIN42"),
            "http://api.home.nest.com/oauth2/access_token?code=PIN42&client_id=client&client_secret=s3cret&grant_type=authorization_code"
        );
    }

    #[test]
    fn access_token_url_encodes_parameters() {
        let config = HttpConfig::default();
        let url = config.access_token_url("id", "a&b", "c d");
        assert!(url.contains("code=c%20d"));
        assert!(url.contains("client_secret=a%26b"));
    }

    #[test]
    fn data_url_root_and_devices() {
        let config = HttpConfig::default();
        assert_eq!(
            config.data_url("", "tok"),
            "https://developer-api.nest.com/?auth=tok"
        );
        assert_eq!(
            config.data_url("devices", "tok"),
            "https://developer-api.nest.com/devices?auth=tok"
        );
    }

    #[test]
    fn base_urls_are_trimmed() {
        let config = HttpConfig::default()
            .with_api_url("http://localhost:1234//")
            .with_oauth_url("http://localhost:1235/")
            .with_login_url("http://localhost:1236");
        assert_eq!(config.api_url(), "http://localhost:1234");
        assert_eq!(config.oauth_url(), "http://localhost:1235");
        assert_eq!(config.login_url(), "http://localhost:1236");
    }

    #[test]
    fn transport_from_client() {
        let transport = HttpTransport::from_client(Client::new());
        let _ = transport.client();
    }
}
