// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer between the client and the vendor's HTTP endpoints.
//!
//! - [`Transport`]: sends one [`ApiRequest`] and hands back the status and an
//!   owned body
//! - [`HttpTransport`]: the `reqwest` implementation used by default
//! - [`HttpConfig`]: vendor endpoints and the identifying user agent
//!
//! The response body is an owned value. Whether a caller reads it or bails
//! out early on a bad status, dropping it releases the underlying stream.

mod http;

pub use http::{HttpConfig, HttpTransport};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Media type requested from every endpoint.
pub const ACCEPT_JSON: &str = "application/json";

/// A single request to one of the vendor's endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    url: String,
    user_agent: String,
}

impl ApiRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Creates a `GET` request.
    #[must_use]
    pub fn get(url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self::new(Method::GET, url, user_agent)
    }

    /// Creates a `POST` request without a body.
    #[must_use]
    pub fn post(url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self::new(Method::POST, url, user_agent)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the full request URL, query string included.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the `Accept` header value.
    #[must_use]
    pub fn accept(&self) -> &'static str {
        ACCEPT_JSON
    }
}

/// Status and body of a response, as returned by a [`Transport`].
#[derive(Debug)]
pub struct TransportResponse<B> {
    status: StatusCode,
    body: B,
}

impl<B> TransportResponse<B> {
    /// Creates a response.
    #[must_use]
    pub fn new(status: StatusCode, body: B) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }
}

/// An owned response body.
///
/// Dropping the value, read or not, releases the underlying stream.
#[allow(async_fn_in_trait)]
pub trait ResponseBody {
    /// Reads the whole body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` if the body cannot be read.
    async fn into_bytes(self) -> Result<Vec<u8>>;
}

/// Sends requests to the vendor's endpoints.
///
/// Implement this to route requests through another HTTP stack or a test
/// double.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Body type of the responses.
    type Body: ResponseBody;

    /// Sends the request and waits for the response head.
    ///
    /// # Arguments
    ///
    /// * `request` - The request to send
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` if the request cannot be built or sent.
    async fn send(&self, request: ApiRequest) -> Result<TransportResponse<Self::Body>>;
}

/// Decodes the first JSON value of `body`.
///
/// A body holding nothing but whitespace, or a literal `null`, yields
/// `Ok(None)`. Bytes after the first value are ignored.
pub(crate) fn decode_json<T: DeserializeOwned>(
    body: &[u8],
) -> std::result::Result<Option<T>, serde_json::Error> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<T>>()
        .next()
        .transpose()
        .map(Option::flatten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_empty_body_is_none() {
        assert_eq!(decode_json::<serde_json::Value>(b"").unwrap(), None);
        assert_eq!(decode_json::<serde_json::Value>(b" \r\n\t").unwrap(), None);
    }

    #[test]
    fn decode_null_body_is_none() {
        assert_eq!(decode_json::<u32>(b"null").unwrap(), None);
        assert_eq!(decode_json::<u32>(b" null\n").unwrap(), None);
    }

    #[test]
    fn decode_first_value_only() {
        let value: Option<u32> = decode_json(b"7 trailing").unwrap();
        assert_eq!(value, Some(7));
    }

    #[test]
    fn decode_malformed_body_fails() {
        assert!(decode_json::<serde_json::Value>(b"{\"devices\":").is_err());
        assert!(decode_json::<serde_json::Value>(b"<html>").is_err());
    }

    #[test]
    fn request_headers() {
        let request = ApiRequest::get("https://example.test/devices?auth=t", "agent/1");
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.user_agent(), "agent/1");
        assert_eq!(request.accept(), "application/json");

        let request = ApiRequest::post("http://example.test/oauth2/access_token", "agent/1");
        assert_eq!(request.method(), &Method::POST);
    }

    #[test]
    fn transport_response_parts() {
        let response = TransportResponse::new(StatusCode::OK, vec![1_u8, 2]);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.into_body(), vec![1, 2]);
    }
}
