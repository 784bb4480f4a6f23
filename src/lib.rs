// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `lift_tile` - A four-button TV lift tile for home-automation controllers.
//!
//! The tile is an extension device loaded by a controller runtime (the
//! host). It publishes a small UI (an icon, a title and four button labels)
//! and turns the commands the UI sends back into programmable events:
//!
//! | Button | Command | Event |
//! |--------|---------|-------|
//! | 1 | `Button1Command` | Lift Down |
//! | 2 | `Button2Command` | Lift Bed |
//! | 3 | `Button3Command` | Lift Window |
//! | 4 | `Button4Command` | Lift Sitting |
//!
//! # Quick Start
//!
//! ```
//! use lift_tile::subscription::Subscribable;
//! use lift_tile::{LiftTile, NullHost};
//!
//! let tile = LiftTile::builder(NullHost)
//!     .with_logging_enabled(true)
//!     .build()?;
//!
//! tile.initialize()?;
//! tile.connect();
//!
//! tile.on_lift_down(|| println!("lowering the TV"));
//! tile.dispatch("Button1Command", &[])?;
//! # Ok::<(), lift_tile::Error>(())
//! ```
//!
//! # Host integration
//!
//! The runtime implements [`DeviceHost`] to receive committed property
//! batches and the transport/protocol pair built at initialize time.

pub mod command;
pub mod config;
pub mod connection;
mod device;
mod device_id;
pub mod error;
mod host;
pub mod logging;
pub mod property;
pub mod subscription;
pub mod types;

pub use command::{ButtonCommand, Command, Dispatcher, RawCommand};
pub use config::{DriverData, LoggingConfig, TileConfig};
pub use connection::{Connection, TileProtocol, TileTransport};
pub use device::{LiftTile, LiftTileBuilder};
pub use device_id::DeviceId;
pub use error::{ConfigError, Error, Result, ValueError};
pub use host::{DeviceHost, NullHost};
pub use logging::{LogConfig, LogLevel};
pub use property::{PropertyChange, PropertyRegistry};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::Button;
