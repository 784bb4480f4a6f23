// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that raise button notifications.

use crate::subscription::SubscriptionId;
use crate::types::Button;

/// Trait for types that raise the four lift notifications.
///
/// # Examples
///
/// ```
/// use lift_tile::subscription::Subscribable;
/// use lift_tile::{LiftTile, NullHost};
///
/// let tile = LiftTile::builder(NullHost).build()?;
///
/// let sub_id = tile.on_lift_down(|| println!("lift going down"));
/// tile.dispatch("Button1Command", &[])?;
///
/// tile.unsubscribe(sub_id);
/// # Ok::<(), lift_tile::Error>(())
/// ```
pub trait Subscribable {
    /// Subscribes to presses of `button`.
    fn on_button_pressed<F>(&self, button: Button, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static;

    /// Subscribes to the "Lift Down" event.
    fn on_lift_down<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_button_pressed(Button::Down, callback)
    }

    /// Subscribes to the "Lift Bed" event.
    fn on_lift_bed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_button_pressed(Button::Bed, callback)
    }

    /// Subscribes to the "Lift Window" event.
    fn on_lift_window<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_button_pressed(Button::Window, callback)
    }

    /// Subscribes to the "Lift Sitting" event.
    fn on_lift_sitting<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_button_pressed(Button::Sitting, callback)
    }

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
