// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the decoded API records.
//!
//! - [`TemperatureScale`] - Display scale of a thermostat (`F` or `C`)

mod temperature_scale;

pub use temperature_scale::TemperatureScale;
