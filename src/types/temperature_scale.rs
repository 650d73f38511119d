// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display temperature scale reported by a thermostat.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Temperature scale a thermostat uses for its own display.
///
/// The vendor reports `"F"` or `"C"`. The raw string is kept as-is so that
/// any other value survives decoding unchanged.
///
/// # Examples
///
/// ```
/// use nestor_lib::types::TemperatureScale;
///
/// let scale: TemperatureScale = serde_json::from_str(r#""C""#).unwrap();
/// assert!(scale.is_celsius());
/// assert!(!scale.is_fahrenheit());
/// assert_eq!(scale.as_str(), "C");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemperatureScale(String);

impl TemperatureScale {
    const FAHRENHEIT: &'static str = "F";
    const CELSIUS: &'static str = "C";

    /// Creates a scale from the vendor's raw value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The Fahrenheit scale (`"F"`).
    #[must_use]
    pub fn fahrenheit() -> Self {
        Self::new(Self::FAHRENHEIT)
    }

    /// The Celsius scale (`"C"`).
    #[must_use]
    pub fn celsius() -> Self {
        Self::new(Self::CELSIUS)
    }

    /// Returns the raw vendor value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the Fahrenheit scale.
    #[must_use]
    pub fn is_fahrenheit(&self) -> bool {
        self.0 == Self::FAHRENHEIT
    }

    /// Returns `true` for the Celsius scale.
    #[must_use]
    pub fn is_celsius(&self) -> bool {
        self.0 == Self::CELSIUS
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemperatureScale {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
