// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device collection and top-level envelope decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Thermostat, null_as_default, null_map_as_default};

/// A smoke/CO alarm.
///
/// The vendor reports alarm details, but none are modelled yet; the record
/// only marks the presence of a device under its identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {}

/// All devices returned by one API call, keyed by device identifier.
///
/// This is the shape of the `devices` sub-resource.
///
/// # Examples
///
/// ```
/// use nestor_lib::response::Devices;
///
/// let json = r#"{
///     "thermostats": { "t1": { "device_id": "t1" } },
///     "smoke_co_alarms": { "a1": {} }
/// }"#;
/// let devices: Devices = serde_json::from_str(json).unwrap();
/// assert_eq!(devices.thermostat("t1").unwrap().device_id, "t1");
/// assert!(devices.alarm("a1").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Devices {
    /// Thermostats keyed by device identifier.
    #[serde(default, deserialize_with = "null_map_as_default")]
    pub thermostats: HashMap<String, Thermostat>,

    /// Smoke/CO alarms keyed by device identifier.
    #[serde(
        rename = "smoke_co_alarms",
        default,
        deserialize_with = "null_map_as_default"
    )]
    pub alarms: HashMap<String, Alarm>,
}

impl Devices {
    /// Returns the thermostat with the given identifier.
    #[must_use]
    pub fn thermostat(&self, device_id: &str) -> Option<&Thermostat> {
        self.thermostats.get(device_id)
    }

    /// Returns the alarm with the given identifier.
    #[must_use]
    pub fn alarm(&self, device_id: &str) -> Option<&Alarm> {
        self.alarms.get(device_id)
    }

    /// Returns `true` if no device of any kind was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thermostats.is_empty() && self.alarms.is_empty()
    }
}

/// Envelope of the root resource.
///
/// Decode into this when calling [`Nest::all`](crate::Nest::all).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Devices visible to the access token.
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: Devices,
}

impl Response {
    /// Consumes the envelope and returns the devices.
    #[must_use]
    pub fn into_devices(self) -> Devices {
        self.devices
    }
}
