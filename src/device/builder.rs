// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lift tile builder.

use crate::command::Dispatcher;
use crate::config::{DriverData, TileConfig};
use crate::device::LiftTile;
use crate::device_id::DeviceId;
use crate::error::Result;
use crate::host::DeviceHost;
use crate::logging::{LevelChannel, LogConfig};

/// Builder for [`LiftTile`].
///
/// # Examples
///
/// ```
/// use lift_tile::config::TileConfig;
/// use lift_tile::{LiftTile, NullHost};
///
/// let config = TileConfig::from_json(r#"{"Logging": {"Enabled": true}}"#)?;
///
/// let tile = LiftTile::builder(NullHost)
///     .with_config(config)
///     .with_log_sink(|line| eprintln!("{line}"))
///     .build()?;
///
/// assert!(tile.log().is_enabled());
/// # Ok::<(), lift_tile::Error>(())
/// ```
#[derive(Debug)]
pub struct LiftTileBuilder<H> {
    host: H,
    id: Option<DeviceId>,
    config: TileConfig,
    log: LogConfig,
    dispatcher: Dispatcher,
}

impl<H: DeviceHost> LiftTileBuilder<H> {
    pub(crate) fn new(host: H) -> Self {
        Self {
            host,
            id: None,
            config: TileConfig::default(),
            log: LogConfig::disabled(),
            dispatcher: Dispatcher::with_buttons(),
        }
    }

    /// Sets the tile identifier. A random one is generated otherwise.
    #[must_use]
    pub fn with_id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the whole configuration, including the logging enable flag.
    #[must_use]
    pub fn with_config(mut self, config: TileConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the driver data handed to the protocol at initialize time.
    #[must_use]
    pub fn with_driver_data(mut self, driver_data: DriverData) -> Self {
        self.config.driver_data = driver_data;
        self
    }

    /// Turns driver logging on or off.
    #[must_use]
    pub fn with_logging_enabled(mut self, enabled: bool) -> Self {
        self.config.logging.enabled = enabled;
        self
    }

    /// Sets the generic log sink.
    #[must_use]
    pub fn with_log_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.log = self.log.with_sink(sink);
        self
    }

    /// Sets the severity-specific log channel.
    #[must_use]
    pub fn with_log_channel<C>(mut self, channel: C) -> Self
    where
        C: LevelChannel + 'static,
    {
        self.log = self.log.with_channel(channel);
        self
    }

    /// Replaces the command table.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Builds the tile and publishes its initial properties to the host.
    ///
    /// # Errors
    ///
    /// Returns error if the property definitions collide.
    pub fn build(self) -> Result<LiftTile<H>> {
        let log = self.log.with_enabled(self.config.logging.enabled);
        LiftTile::new(
            self.host,
            self.id.unwrap_or_default(),
            self.config,
            log,
            self.dispatcher,
        )
    }
}
