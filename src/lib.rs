// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `NestoR` Lib - A Rust client for the Nest thermostat cloud API.
//!
//! This library completes the OAuth2 authorization code exchange and reads
//! thermostat and smoke/CO alarm state from the vendor's REST API.
//!
//! # Supported Features
//!
//! - **Authorization**: Exchange a browser-issued PIN for an access token
//! - **Device data**: Fetch the root resource or the `devices` sub-resource
//! - **Typed decoding**: Decode into [`Response`], [`Devices`] or any
//!   `serde` type of your own
//!
//! Token storage, token refresh and writes (setting temperatures) are left
//! to the application.
//!
//! # Quick Start
//!
//! ## First Run: Obtain a Token
//!
//! ```no_run
//! use nestor_lib::Nest;
//!
//! #[tokio::main]
//! async fn main() -> nestor_lib::Result<()> {
//!     // No token yet: the error carries the consent URL and the client
//!     let mut nest = match Nest::connect("my-client-id", "") {
//!         Ok(nest) => nest,
//!         Err(missing) => {
//!             println!("Authorize at {}", missing.authorize_url());
//!             missing.into_client()
//!         }
//!     };
//!
//!     nest.authorize("my-client-secret", "PIN1234").await?;
//!     println!("Token: {}", nest.token());
//!     Ok(())
//! }
//! ```
//!
//! ## Reading Thermostats
//!
//! ```no_run
//! use nestor_lib::{Devices, Nest};
//!
//! #[tokio::main]
//! async fn main() -> nestor_lib::Result<()> {
//!     let nest = Nest::connect("my-client-id", "c.my-access-token")?;
//!
//!     let mut devices = Devices::default();
//!     nest.devices(&mut devices).await?;
//!
//!     for thermostat in devices.thermostats.values() {
//!         println!(
//!             "{}: {} {} ({})",
//!             thermostat.name,
//!             thermostat.ambient_temperature(),
//!             thermostat.temperature_scale,
//!             thermostat.hvac_mode
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Decoding Only What You Need
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! #[derive(Default, serde::Deserialize)]
//! struct Humidity {
//!     thermostats: HashMap<String, Reading>,
//! }
//!
//! #[derive(serde::Deserialize)]
//! struct Reading {
//!     humidity: f64,
//! }
//!
//! # async fn example(nest: nestor_lib::Nest) -> nestor_lib::Result<()> {
//! let mut humidity = Humidity::default();
//! nest.devices(&mut humidity).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use client::{MissingToken, Nest, NestBuilder};
pub use error::{Error, Result};
pub use protocol::{HttpConfig, HttpTransport, Transport};
pub use response::{Alarm, Devices, OAuth2Response, OAuth2ResponseError, Response, Thermostat};
pub use types::TemperatureScale;
