// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tests with a transport double that records requests and tracks body
//! release.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use nestor_lib::protocol::{ApiRequest, ResponseBody, TransportResponse};
use nestor_lib::{Devices, Error, Nest, NestBuilder, Response, Transport};
use reqwest::StatusCode;

/// Body that counts how many times it has been released.
struct TrackedBody {
    data: Vec<u8>,
    released: Arc<AtomicUsize>,
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl ResponseBody for TrackedBody {
    async fn into_bytes(self) -> nestor_lib::Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}

/// Transport answering every request with the same canned response.
struct CannedTransport {
    status: StatusCode,
    body: Vec<u8>,
    released: Arc<AtomicUsize>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl CannedTransport {
    fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            released: Arc::new(AtomicUsize::new(0)),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for CannedTransport {
    type Body = TrackedBody;

    async fn send(&self, request: ApiRequest) -> nestor_lib::Result<TransportResponse<TrackedBody>> {
        self.requests.lock().unwrap().push(request);
        Ok(TransportResponse::new(
            self.status,
            TrackedBody {
                data: self.body.clone(),
                released: Arc::clone(&self.released),
            },
        ))
    }
}

fn client(status: StatusCode, body: &str) -> Nest<CannedTransport> {
    NestBuilder::with_transport("client-id", CannedTransport::new(status, body))
        .token("tok")
        .connect()
        .unwrap()
}

// ============================================================================
// Body release
// ============================================================================

#[tokio::test]
async fn body_released_after_successful_decode() {
    let nest = client(
        StatusCode::OK,
        r#"{"devices":{"thermostats":{"t1":{"device_id":"t1"}},"smoke_co_alarms":{}}}"#,
    );

    let mut response = Response::default();
    nest.all(&mut response).await.unwrap();

    assert_eq!(response.devices.thermostats.len(), 1);
    assert_eq!(nest.transport().released(), 1);
}

#[tokio::test]
async fn body_released_after_empty_body() {
    let nest = client(StatusCode::OK, "");

    let mut devices = Devices::default();
    nest.devices(&mut devices).await.unwrap();

    assert!(devices.is_empty());
    assert_eq!(nest.transport().released(), 1);
}

#[tokio::test]
async fn body_released_after_decode_error() {
    let nest = client(StatusCode::OK, "{not json");

    let mut devices = Devices::default();
    let err = nest.devices(&mut devices).await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(nest.transport().released(), 1);
}

#[tokio::test]
async fn body_released_after_rejected_status() {
    let nest = client(StatusCode::SERVICE_UNAVAILABLE, "{}");

    let mut response = Response::default();
    let err = nest.all(&mut response).await.unwrap_err();

    assert_eq!(err.to_string(), "503 Service Unavailable");
    assert_eq!(nest.transport().released(), 1);
}

#[tokio::test]
async fn body_released_once_per_call() {
    let nest = client(StatusCode::OK, r#"{"thermostats":{}}"#);

    let mut devices = Devices::default();
    for _ in 0..3 {
        nest.devices(&mut devices).await.unwrap();
    }

    assert_eq!(nest.transport().released(), 3);
}

#[tokio::test]
async fn body_released_after_authorization() {
    let transport = CannedTransport::new(StatusCode::OK, r#"{"access_token":"abc","expires_in":60}"#);
    let mut nest = NestBuilder::with_transport("client-id", transport)
        .connect()
        .unwrap_or_else(nestor_lib::MissingToken::into_client);

    nest.authorize("secret", "PIN").await.unwrap();

    assert_eq!(nest.token(), "abc");
    assert_eq!(nest.transport().released(), 1);
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn data_requests_use_token_and_fixed_headers() {
    let nest = client(StatusCode::OK, "");

    let mut response = Response::default();
    nest.all(&mut response).await.unwrap();
    let mut devices = Devices::default();
    nest.devices(&mut devices).await.unwrap();

    let requests = nest.transport().requests();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].method(), &reqwest::Method::GET);
    assert_eq!(requests[0].url(), "https://developer-api.nest.com/?auth=tok");
    assert_eq!(
        requests[1].url(),
        "https://developer-api.nest.com/devices?auth=tok"
    );

    for request in &requests {
        assert_eq!(request.accept(), "application/json");
        assert_eq!(request.user_agent(), nestor_lib::HttpConfig::DEFAULT_USER_AGENT);
    }
}

#[tokio::test]
async fn authorization_request_shape() {
    let transport = CannedTransport::new(StatusCode::OK, "{}");
    let mut nest = NestBuilder::with_transport("client-id", transport)
        .token("old")
        .connect()
        .unwrap();

    nest.authorize("secret", "PIN").await.unwrap();

    let requests = nest.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method(), &reqwest::Method::POST);
    assert_eq!(
        requests[0].url(),
        "http://api.home.nest.com/oauth2/access_token?code=PIN&client_id=client-id&client_secret=secret&grant_type=authorization_code"
    );
}
