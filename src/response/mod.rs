// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding targets for the vendor's JSON responses.
//!
//! Every record is created fresh from one response body and owned by the
//! caller afterwards. Nothing is cached or merged with earlier snapshots.
//!
//! - [`Response`] - Root resource envelope
//! - [`Devices`] - The `devices` sub-resource
//! - [`Thermostat`] / [`Alarm`] - Individual devices
//! - [`OAuth2Response`] / [`OAuth2ResponseError`] - Token exchange results

mod devices;
mod oauth2;
mod thermostat;

pub use devices::{Alarm, Devices, Response};
pub use oauth2::{OAuth2Response, OAuth2ResponseError};
pub use thermostat::Thermostat;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Decodes `null` as the default value of `T`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a device map, treating a `null` map as empty and `null` entries
/// as default records.
fn null_map_as_default<'de, D, V>(deserializer: D) -> Result<HashMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    let map = Option::<HashMap<String, Option<V>>>::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(id, value)| (id, value.unwrap_or_default()))
        .collect())
}
