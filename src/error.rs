// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `lift_tile` driver.
//!
//! Every failure is returned to the immediate caller (the host runtime) as
//! an explicit value. Nothing is retried and nothing escalates to a panic.
//! An unrecognized command is not an error: it is accepted and ignored.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The command string handed to the dispatcher was empty.
    #[error("command string is empty")]
    EmptyCommand,

    /// A property write came in through the external property interface.
    ///
    /// No property of the tile is settable from outside the driver, so this
    /// is returned for every key, including the ones the tile defines.
    #[error("The property with object does not exist.")]
    UnsupportedProperty,

    /// A property with the same key was already defined.
    #[error("property already defined: {0}")]
    DuplicateProperty(String),

    /// `initialize` was called more than once.
    #[error("device is already initialized")]
    AlreadyInitialized,

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A value could not be converted to a tile type.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A button index is outside the range 1-4.
    #[error("button index {0} is out of range [1, 4]")]
    InvalidButtonIndex(u8),

    /// A string is not one of the four button command names.
    #[error("not a button command: {0}")]
    UnknownButtonCommand(String),

    /// A device identifier string is not a UUID.
    #[error("invalid device id: {0}")]
    InvalidDeviceId(String),
}

/// Errors related to loading driver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
