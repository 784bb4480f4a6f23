// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection objects handed to the host.
//!
//! At initialize time the tile builds a [`TileTransport`] and a
//! [`TileProtocol`] wrapping it, then registers both with its host. The tile
//! keeps ownership; the host receives shared back-references.

mod protocol;
mod transport;

pub use protocol::TileProtocol;
pub use transport::TileTransport;

use std::sync::Arc;

/// The transport/protocol pair built by `initialize`.
#[derive(Debug, Clone)]
pub struct Connection {
    /// The transport.
    pub transport: Arc<TileTransport>,
    /// The protocol wrapping `transport`.
    pub protocol: Arc<TileProtocol>,
}
