// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Driver configuration.
//!
//! The host hands the driver a JSON configuration blob. [`DriverData`] is the
//! part the protocol object consumes at initialize time; [`LoggingConfig`]
//! carries the logging flags the device threads into its transport and
//! protocol. Every field has a default, so `{}` is a valid document.
//!
//! # Examples
//!
//! ```
//! use lift_tile::config::TileConfig;
//!
//! let config = TileConfig::from_json(r#"{
//!     "Logging": { "Enabled": true, "TxDebug": true },
//!     "DriverData": {
//!         "GeneralInformation": { "Manufacturer": "Purjes", "BaseModel": "TV Lift" }
//!     }
//! }"#)?;
//!
//! assert!(config.logging.enabled);
//! assert!(!config.logging.rx_debug);
//! assert_eq!(config.driver_data.general_information.manufacturer, "Purjes");
//! # Ok::<(), lift_tile::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Top-level driver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TileConfig {
    /// Logging flags.
    pub logging: LoggingConfig,
    /// Data handed to the protocol at initialize time.
    pub driver_data: DriverData,
}

impl TileConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(ConfigError::from)
            .map_err(Into::into)
    }

    /// Sets the logging flags.
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Sets the driver data.
    #[must_use]
    pub fn with_driver_data(mut self, driver_data: DriverData) -> Self {
        self.driver_data = driver_data;
        self
    }
}

/// Logging flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LoggingConfig {
    /// Whether driver log entries are written.
    pub enabled: bool,
    /// Whether the transport logs received traffic.
    pub rx_debug: bool,
    /// Whether the transport logs transmitted traffic.
    pub tx_debug: bool,
}

impl LoggingConfig {
    /// Creates a configuration with logging enabled and traffic debug off.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

/// Configuration blob consumed by the protocol object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DriverData {
    /// Descriptive information about the driver.
    pub general_information: GeneralInformation,
    /// Supported feature flags.
    pub device_support: DeviceSupport,
}

impl DriverData {
    /// Parses a driver data document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(ConfigError::from)
            .map_err(Into::into)
    }
}

/// Descriptive driver information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GeneralInformation {
    /// Device manufacturer.
    pub manufacturer: String,
    /// Base model name.
    pub base_model: String,
    /// Device type shown by the host.
    pub device_type: String,
    /// Free-form description.
    pub description: String,
    /// Driver version.
    pub version: String,
}

impl Default for GeneralInformation {
    fn default() -> Self {
        Self {
            manufacturer: String::new(),
            base_model: "TV Lift".to_string(),
            device_type: "ExtensionDevice".to_string(),
            description: String::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Feature flags advertised to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeviceSupport {
    /// The tile exposes a UI page.
    pub has_ui: bool,
    /// The tile raises programmable events.
    pub has_programmable_events: bool,
}

impl Default for DeviceSupport {
    fn default() -> Self {
        Self {
            has_ui: true,
            has_programmable_events: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = TileConfig::from_json("{}").unwrap();
        assert_eq!(config, TileConfig::default());
        assert!(!config.logging.enabled);
        assert_eq!(config.driver_data.general_information.base_model, "TV Lift");
        assert!(config.driver_data.device_support.has_programmable_events);
    }

    #[test]
    fn partial_logging_section() {
        let config = TileConfig::from_json(r#"{"Logging": {"RxDebug": true}}"#).unwrap();
        assert!(!config.logging.enabled);
        assert!(config.logging.rx_debug);
        assert!(!config.logging.tx_debug);
    }

    #[test]
    fn driver_data_fields() {
        let data = DriverData::from_json(
            r#"{
                "GeneralInformation": {
                    "Manufacturer": "Purjes",
                    "Description": "Lift control",
                    "Version": "1.2.0"
                },
                "DeviceSupport": { "HasUi": false }
            }"#,
        )
        .unwrap();

        assert_eq!(data.general_information.manufacturer, "Purjes");
        assert_eq!(data.general_information.description, "Lift control");
        assert_eq!(data.general_information.version, "1.2.0");
        assert_eq!(data.general_information.device_type, "ExtensionDevice");
        assert!(!data.device_support.has_ui);
        assert!(data.device_support.has_programmable_events);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let err = TileConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Json(_))));
    }

    #[test]
    fn wrong_field_type_is_config_error() {
        let err = TileConfig::from_json(r#"{"Logging": {"Enabled": "yes"}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn builder_setters() {
        let config = TileConfig::default()
            .with_logging(LoggingConfig::enabled())
            .with_driver_data(DriverData::default());
        assert!(config.logging.enabled);
    }
}
