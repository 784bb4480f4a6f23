// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport object registered with the host.

use crate::config::LoggingConfig;
use crate::logging::LogConfig;

/// Transport half of the connection pair.
///
/// The tile talks to nothing but its host, so the transport carries no I/O.
/// It exists so the host has a transport to drive, configured with the same
/// logging as the tile.
#[derive(Debug, Clone)]
pub struct TileTransport {
    log: LogConfig,
    rx_debug: bool,
    tx_debug: bool,
}

impl TileTransport {
    /// Creates a transport using `log` for its entries and the traffic
    /// debug flags from `flags`.
    #[must_use]
    pub fn new(log: LogConfig, flags: &LoggingConfig) -> Self {
        Self {
            log,
            rx_debug: flags.rx_debug,
            tx_debug: flags.tx_debug,
        }
    }

    /// Returns the logging configuration.
    #[must_use]
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    /// Returns `true` if received traffic is logged.
    #[must_use]
    pub fn rx_debug(&self) -> bool {
        self.rx_debug
    }

    /// Returns `true` if transmitted traffic is logged.
    #[must_use]
    pub fn tx_debug(&self) -> bool {
        self.tx_debug
    }
}
