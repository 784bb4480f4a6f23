// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol object registered with the host.

use std::sync::Arc;

use crate::config::DriverData;
use crate::connection::TileTransport;
use crate::device_id::DeviceId;
use crate::logging::LogConfig;

/// Protocol half of the connection pair.
///
/// Wraps the transport and the tile's identifier, and keeps the driver data
/// it was initialized with.
#[derive(Debug, Clone)]
pub struct TileProtocol {
    transport: Arc<TileTransport>,
    device_id: DeviceId,
    log: LogConfig,
    driver_data: Option<DriverData>,
}

impl TileProtocol {
    /// Creates a protocol over `transport` for the tile `device_id`.
    ///
    /// Logging is disabled until [`with_log`](Self::with_log) is called.
    #[must_use]
    pub fn new(transport: Arc<TileTransport>, device_id: DeviceId) -> Self {
        Self {
            transport,
            device_id,
            log: LogConfig::disabled(),
            driver_data: None,
        }
    }

    /// Sets the logging configuration.
    #[must_use]
    pub fn with_log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// Loads the driver data handed over by the host.
    pub fn initialize(&mut self, driver_data: &DriverData) {
        tracing::debug!(
            device = %self.device_id,
            model = %driver_data.general_information.base_model,
            "Protocol initialized"
        );
        self.driver_data = Some(driver_data.clone());
    }

    /// Returns `true` once [`initialize`](Self::initialize) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.driver_data.is_some()
    }

    /// Returns the driver data, if initialized.
    #[must_use]
    pub fn driver_data(&self) -> Option<&DriverData> {
        self.driver_data.as_ref()
    }

    /// Returns the tile identifier.
    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Returns the wrapped transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<TileTransport> {
        &self.transport
    }

    /// Returns the logging configuration.
    #[must_use]
    pub fn log(&self) -> &LogConfig {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;

    fn transport() -> Arc<TileTransport> {
        Arc::new(TileTransport::new(
            LogConfig::disabled(),
            &LoggingConfig::default(),
        ))
    }

    #[test]
    fn new_protocol_is_not_initialized() {
        let id = DeviceId::random();
        let protocol = TileProtocol::new(transport(), id);

        assert!(!protocol.is_initialized());
        assert!(protocol.driver_data().is_none());
        assert_eq!(protocol.device_id(), id);
        assert!(!protocol.log().is_enabled());
    }

    #[test]
    fn initialize_keeps_driver_data() {
        let mut data = DriverData::default();
        data.general_information.manufacturer = "Purjes".to_string();

        let mut protocol = TileProtocol::new(transport(), DeviceId::random());
        protocol.initialize(&data);

        assert!(protocol.is_initialized());
        assert_eq!(protocol.driver_data(), Some(&data));
    }

    #[test]
    fn shares_transport() {
        let transport = transport();
        let protocol = TileProtocol::new(transport.clone(), DeviceId::random());
        assert!(Arc::ptr_eq(protocol.transport(), &transport));
    }
}
