// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tile instance identifier.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::ValueError;

/// Identifier of a tile instance.
///
/// The host normally assigns it and passes it in as a string; the builder
/// falls back to a random one. The connection adapter hands it to the
/// protocol object at initialize time.
///
/// # Examples
///
/// ```
/// use lift_tile::DeviceId;
///
/// let id: DeviceId = "6f1c0a52-3b7e-4d8a-9c31-5e2f7a9b0d44".parse()?;
/// assert_eq!(id.to_string(), "6f1c0a52-3b7e-4d8a-9c31-5e2f7a9b0d44");
/// # Ok::<(), lift_tile::ValueError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(Uuid);

impl DeviceId {
    /// Creates a random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::random()
    }
}

impl FromStr for DeviceId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ValueError::InvalidDeviceId(s.to_string()))
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_differ() {
        assert_ne!(DeviceId::random(), DeviceId::random());
    }

    #[test]
    fn host_assigned_id_survives_display() {
        let id: DeviceId = " A1A2A3A4-B1B2-C1C2-D1D2-D3D4D5D6D7D8 ".parse().unwrap();
        assert_eq!(id.to_string(), "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8");
        assert_eq!(id.to_string().parse::<DeviceId>().unwrap(), id);
    }

    #[test]
    fn rejects_non_uuid() {
        assert_eq!(
            "lift-1".parse::<DeviceId>(),
            Err(ValueError::InvalidDeviceId("lift-1".to_string()))
        );
    }
}
