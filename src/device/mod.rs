// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The lift tile device.
//!
//! [`LiftTile`] is what the host loads. It owns the tile properties, the
//! four button notification channels and the command table, and drives the
//! two-phase connection lifecycle:
//!
//! 1. [`LiftTile::initialize`] builds the transport/protocol pair and
//!    registers it with the host
//! 2. [`LiftTile::connect`] marks the tile connected
//!
//! Commands arrive through [`LiftTile::dispatch`] at any time.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use lift_tile::subscription::Subscribable;
//! use lift_tile::{LiftTile, NullHost};
//!
//! let tile = LiftTile::builder(NullHost).build()?;
//! tile.initialize()?;
//! tile.connect();
//!
//! let presses = Arc::new(AtomicU32::new(0));
//! let counter = presses.clone();
//! tile.on_lift_window(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! tile.dispatch("Button3Command", &[])?;
//! tile.dispatch("SomethingElse", &[])?;
//! assert!(tile.dispatch("", &[]).is_err());
//!
//! assert_eq!(presses.load(Ordering::SeqCst), 1);
//! # Ok::<(), lift_tile::Error>(())
//! ```

mod builder;

pub use builder::LiftTileBuilder;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::command::{Command, Dispatcher, HandlerContext};
use crate::config::TileConfig;
use crate::connection::{Connection, TileProtocol, TileTransport};
use crate::device_id::DeviceId;
use crate::error::{Error, Result};
use crate::host::DeviceHost;
use crate::logging::LogConfig;
use crate::property::{
    DEFAULT_MAIN_ICON, DEFAULT_MAIN_PAGE_TITLE, MAIN_ICON_KEY, MAIN_PAGE_TITLE_KEY,
    PropertyDefinition, PropertyRegistry,
};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::types::Button;

/// The four-button TV lift tile.
///
/// Create one with [`LiftTile::builder`].
pub struct LiftTile<H: DeviceHost> {
    id: DeviceId,
    host: H,
    config: TileConfig,
    log: LogConfig,
    properties: RwLock<PropertyRegistry>,
    callbacks: CallbackRegistry,
    dispatcher: Dispatcher,
    connection: RwLock<Option<Connection>>,
    connected: AtomicBool,
}

impl<H: DeviceHost> LiftTile<H> {
    /// Starts building a tile loaded by `host`.
    pub fn builder(host: H) -> LiftTileBuilder<H> {
        LiftTileBuilder::new(host)
    }

    pub(crate) fn new(
        host: H,
        id: DeviceId,
        config: TileConfig,
        log: LogConfig,
        dispatcher: Dispatcher,
    ) -> Result<Self> {
        let tile = Self {
            id,
            host,
            config,
            log,
            properties: RwLock::new(PropertyRegistry::new()),
            callbacks: CallbackRegistry::new(),
            dispatcher,
            connection: RwLock::new(None),
            connected: AtomicBool::new(false),
        };
        tile.define_properties()?;
        Ok(tile)
    }

    /// Returns the tile identifier.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TileConfig {
        &self.config
    }

    /// Returns the logging configuration.
    #[must_use]
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    // ========== Commands ==========

    /// Handles a command from the host.
    ///
    /// Known button commands raise their notification; any other non-empty
    /// name is ignored. Either way pending properties are committed to the
    /// host afterwards. Parameters are accepted but not read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCommand`] if `command` is empty. Nothing is
    /// routed or committed in that case.
    pub fn dispatch(&self, command: &str, parameters: &[String]) -> Result<()> {
        if command.is_empty() {
            return Err(Error::EmptyCommand);
        }

        self.log.debug("DoCommand", command);

        let ctx = HandlerContext {
            log: &self.log,
            callbacks: &self.callbacks,
        };
        self.dispatcher.route(&ctx, command, parameters);

        self.commit();
        Ok(())
    }

    /// Handles a typed command.
    ///
    /// # Errors
    ///
    /// Same as [`dispatch`](Self::dispatch).
    pub fn send_command<C: Command>(&self, command: &C) -> Result<()> {
        self.dispatch(&command.name(), &command.parameters())
    }

    /// Presses a button.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in command table; a custom table may route
    /// the name elsewhere but the call still succeeds.
    pub fn press(&self, button: Button) -> Result<()> {
        self.dispatch(button.command_name(), &[])
    }

    // ========== Properties ==========

    /// External property write. Always rejected.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedProperty`]; no tile property is
    /// writable from outside the driver.
    pub fn set_property_value<T>(&self, key: &str, _value: T) -> Result<()> {
        self.log.debug("SetDriverPropertyValue", key);
        Err(Error::UnsupportedProperty)
    }

    /// External property write on a sub-object. Always rejected.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedProperty`].
    pub fn set_object_property_value<T>(
        &self,
        object_id: &str,
        key: &str,
        _value: T,
    ) -> Result<()> {
        tracing::trace!(object = object_id, key, "Rejected object property write");
        self.log.debug("SetDriverPropertyValueWithObject", key);
        Err(Error::UnsupportedProperty)
    }

    /// Returns the current value of a property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<String> {
        self.properties.read().get(key).map(ToString::to_string)
    }

    /// Returns every `(key, value)` pair in definition order.
    #[must_use]
    pub fn properties(&self) -> Vec<(String, String)> {
        self.properties.read().snapshot()
    }

    fn define_properties(&self) -> Result<()> {
        self.log.debug("CreateDeviceDefinition", "");

        {
            let mut properties = self.properties.write();

            properties.define(PropertyDefinition::string(MAIN_ICON_KEY))?;
            properties.define(PropertyDefinition::string(MAIN_PAGE_TITLE_KEY))?;
            for button in Button::ALL {
                properties.define(PropertyDefinition::string(button.label_key()))?;
            }

            properties.set(MAIN_ICON_KEY, DEFAULT_MAIN_ICON);
            properties.set(MAIN_PAGE_TITLE_KEY, DEFAULT_MAIN_PAGE_TITLE);
            for button in Button::ALL {
                properties.set(button.label_key(), button.default_label());
            }
        }

        self.commit();
        Ok(())
    }

    /// Pushes pending property values to the host as one batch.
    fn commit(&self) {
        let changes = self.properties.write().take_pending();
        tracing::trace!(device = %self.id, count = changes.len(), "Committing properties");
        self.host.commit(&changes);
    }

    // ========== Lifecycle ==========

    /// Builds the transport/protocol pair and registers it with the host.
    ///
    /// The protocol is initialized with the configured driver data before it
    /// is registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyInitialized`] on a second call.
    pub fn initialize(&self) -> Result<()> {
        self.log.debug("Initialize", "CustomTile");

        let connection = {
            let mut slot = self.connection.write();
            if slot.is_some() {
                return Err(Error::AlreadyInitialized);
            }

            let transport = Arc::new(TileTransport::new(
                self.log.clone(),
                &self.config.logging,
            ));
            let mut protocol =
                TileProtocol::new(transport.clone(), self.id).with_log(self.log.clone());
            protocol.initialize(&self.config.driver_data);

            let connection = Connection {
                transport,
                protocol: Arc::new(protocol),
            };
            *slot = Some(connection.clone());
            connection
        };

        self.host.register_transport(connection.transport);
        self.host.register_protocol(connection.protocol);
        tracing::debug!(device = %self.id, "Registered connection with host");
        Ok(())
    }

    /// Marks the tile connected.
    ///
    /// No handshake takes place and the flag is advisory, so this also
    /// succeeds before [`initialize`](Self::initialize).
    pub fn connect(&self) {
        self.log.debug("Connect", "Connect");
        self.connected.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`initialize`](Self::initialize) has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.connection.read().is_some()
    }

    /// Returns `true` once [`connect`](Self::connect) has succeeded.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Returns the transport/protocol pair, if initialized.
    #[must_use]
    pub fn connection(&self) -> Option<Connection> {
        self.connection.read().clone()
    }
}

impl<H: DeviceHost> Subscribable for LiftTile<H> {
    fn on_button_pressed<F>(&self, button: Button, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.on_button_pressed(button, callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

impl<H: DeviceHost> std::fmt::Debug for LiftTile<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiftTile")
            .field("id", &self.id)
            .field("log", &self.log)
            .field("callbacks", &self.callbacks)
            .field("dispatcher", &self.dispatcher)
            .field("initialized", &self.is_initialized())
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
