// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat snapshot decoding.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::types::TemperatureScale;

/// Reported state of one thermostat.
///
/// Field names follow the vendor's snake_case keys. Missing keys and `null`
/// values decode to the zero value of the field, so a partial payload is
/// never an error.
///
/// # Examples
///
/// ```
/// use nestor_lib::response::Thermostat;
///
/// let json = r#"{
///     "device_id": "t1",
///     "name": "Hallway",
///     "is_online": true,
///     "temperature_scale": "C",
///     "ambient_temperature_c": 21.5,
///     "ambient_temperature_f": 71,
///     "hvac_mode": "heat"
/// }"#;
/// let thermostat: Thermostat = serde_json::from_str(json).unwrap();
/// assert!(thermostat.is_online);
/// assert_eq!(thermostat.ambient_temperature(), 21.5);
/// assert_eq!(thermostat.humidity, 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thermostat {
    /// Vendor-assigned device identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub device_id: String,
    /// Locale of the device, e.g. `en-US`.
    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,
    /// Firmware version.
    #[serde(deserialize_with = "null_as_default")]
    pub software_version: String,
    /// Short display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Long display name, including the room.
    #[serde(deserialize_with = "null_as_default")]
    pub name_long: String,
    /// Timestamp of the last successful cloud connection (RFC 3339).
    #[serde(deserialize_with = "null_as_default")]
    pub last_connection: String,
    /// Whether the device is currently connected.
    #[serde(deserialize_with = "null_as_default")]
    pub is_online: bool,
    /// Whether the HVAC system can cool.
    #[serde(deserialize_with = "null_as_default")]
    pub can_cool: bool,
    /// Whether the HVAC system can heat.
    #[serde(deserialize_with = "null_as_default")]
    pub can_heat: bool,
    /// Whether emergency heat is in use.
    #[serde(deserialize_with = "null_as_default")]
    pub is_using_emergency_heat: bool,
    /// Whether the HVAC system has a fan.
    #[serde(deserialize_with = "null_as_default")]
    pub has_fan: bool,
    /// Whether the fan timer is running.
    #[serde(deserialize_with = "null_as_default")]
    pub fan_timer_active: bool,
    /// Fan timer timeout flag.
    #[serde(deserialize_with = "null_as_default")]
    pub fan_timer_timeout: bool,
    /// Whether the energy-saving leaf is displayed.
    #[serde(deserialize_with = "null_as_default")]
    pub has_leaf: bool,
    /// Scale used on the device display.
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_scale: TemperatureScale,
    /// Target temperature in Fahrenheit.
    #[serde(deserialize_with = "null_as_default")]
    pub target_temperature_f: f64,
    /// Target temperature in Celsius.
    #[serde(deserialize_with = "null_as_default")]
    pub target_temperature_c: f64,
    /// Upper target of the heat-cool range in Fahrenheit.
    #[serde(deserialize_with = "null_as_default")]
    pub target_temperature_high_f: f64,
    /// Upper target of the heat-cool range in Celsius.
    #[serde(deserialize_with = "null_as_default")]
    pub target_temperature_high_c: f64,
    /// Lower target of the heat-cool range in Fahrenheit.
    #[serde(deserialize_with = "null_as_default")]
    pub target_temperature_low_f: f64,
    /// Lower target of the heat-cool range in Celsius.
    #[serde(deserialize_with = "null_as_default")]
    pub target_temperature_low_c: f64,
    /// Upper away temperature in Fahrenheit.
    #[serde(deserialize_with = "null_as_default")]
    pub away_temperature_high_f: f64,
    /// Upper away temperature in Celsius.
    #[serde(deserialize_with = "null_as_default")]
    pub away_temperature_high_c: f64,
    /// Lower away temperature in Fahrenheit.
    #[serde(deserialize_with = "null_as_default")]
    pub away_temperature_low_f: f64,
    /// Lower away temperature in Celsius.
    #[serde(deserialize_with = "null_as_default")]
    pub away_temperature_low_c: f64,
    /// HVAC mode, e.g. `heat`, `cool`, `heat-cool` or `off`.
    #[serde(deserialize_with = "null_as_default")]
    pub hvac_mode: String,
    /// Ambient temperature in Fahrenheit.
    #[serde(deserialize_with = "null_as_default")]
    pub ambient_temperature_f: f64,
    /// Ambient temperature in Celsius.
    #[serde(deserialize_with = "null_as_default")]
    pub ambient_temperature_c: f64,
    /// Relative humidity in percent.
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,
}

impl Thermostat {
    /// Returns the ambient temperature in the device's display scale.
    ///
    /// Fahrenheit is used unless the device reports Celsius.
    #[must_use]
    pub fn ambient_temperature(&self) -> f64 {
        if self.temperature_scale.is_celsius() {
            self.ambient_temperature_c
        } else {
            self.ambient_temperature_f
        }
    }

    /// Returns the target temperature in the device's display scale.
    #[must_use]
    pub fn target_temperature(&self) -> f64 {
        if self.temperature_scale.is_celsius() {
            self.target_temperature_c
        } else {
            self.target_temperature_f
        }
    }

    /// Parses [`last_connection`](Self::last_connection).
    ///
    /// Returns `None` when the field is empty or not a valid RFC 3339
    /// timestamp.
    #[must_use]
    pub fn last_connection_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.last_connection).ok()
    }
}
