// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host runtime port.
//!
//! The controller runtime that loads the tile implements [`DeviceHost`]. The
//! tile pushes committed property batches through it and registers its
//! connection objects with it.

use std::sync::Arc;

use crate::connection::{TileProtocol, TileTransport};
use crate::property::PropertyChange;

/// Services the host runtime provides to a tile.
pub trait DeviceHost: Send + Sync {
    /// Publishes a batch of property values.
    ///
    /// Called once per commit, possibly with an empty batch.
    fn commit(&self, changes: &[PropertyChange]);

    /// Takes a reference to the tile's transport.
    fn register_transport(&self, transport: Arc<TileTransport>);

    /// Takes a reference to the tile's protocol.
    fn register_protocol(&self, protocol: Arc<TileProtocol>);
}

impl<H: DeviceHost + ?Sized> DeviceHost for Arc<H> {
    fn commit(&self, changes: &[PropertyChange]) {
        (**self).commit(changes);
    }

    fn register_transport(&self, transport: Arc<TileTransport>) {
        (**self).register_transport(transport);
    }

    fn register_protocol(&self, protocol: Arc<TileProtocol>) {
        (**self).register_protocol(protocol);
    }
}

/// Host that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl DeviceHost for NullHost {
    fn commit(&self, _changes: &[PropertyChange]) {}

    fn register_transport(&self, _transport: Arc<TileTransport>) {}

    fn register_protocol(&self, _protocol: Arc<TileProtocol>) {}
}
