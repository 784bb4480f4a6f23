// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for button notifications.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - One notification channel per button

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::types::Button;

/// Unique identifier for a subscription.
///
/// IDs are unique within a tile's lifetime, across all four channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Button notifications carry no payload.
type ButtonCallback = Arc<dyn Fn() + Send + Sync>;

/// A single notification channel.
#[derive(Default)]
struct Channel {
    subscribers: RwLock<HashMap<SubscriptionId, ButtonCallback>>,
}

impl Channel {
    /// Calls every subscriber and returns how many were called.
    ///
    /// Subscribers are cloned out first so a callback may subscribe or
    /// unsubscribe without deadlocking.
    fn fire(&self) -> usize {
        let subscribers: Vec<ButtonCallback> = self.subscribers.read().values().cloned().collect();
        for callback in &subscribers {
            callback();
        }
        subscribers.len()
    }
}

/// Registry holding the four button notification channels.
///
/// Uses `parking_lot::RwLock` for interior mutability so subscriptions can
/// be added through a shared reference to the tile.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    channels: [Channel; 4],
}

impl CallbackRegistry {
    /// Creates a registry with four empty channels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            channels: Default::default(),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn channel(&self, button: Button) -> &Channel {
        &self.channels[usize::from(button.index() - 1)]
    }

    /// Registers a callback on the channel of `button`.
    pub fn on_button_pressed<F>(&self, button: Button, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.channel(button)
            .subscribers
            .write()
            .insert(id, Arc::new(callback));
        tracing::trace!(subscription = %id, channel = %button, "Subscribed");
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.channels
            .iter()
            .any(|channel| channel.subscribers.write().remove(&id).is_some())
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        for channel in &self.channels {
            channel.subscribers.write().clear();
        }
    }

    /// Fires the channel of `button`.
    ///
    /// Callbacks run synchronously in arbitrary order. Returns the number of
    /// callbacks invoked; zero subscribers is a no-op.
    pub fn fire(&self, button: Button) -> usize {
        self.channel(button).fire()
    }

    /// Returns the number of callbacks registered on `button`.
    #[must_use]
    pub fn subscriber_count(&self, button: Button) -> usize {
        self.channel(button).subscribers.read().len()
    }

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        Button::ALL.iter().map(|b| self.subscriber_count(*b)).sum()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    fn counter() -> (Arc<AtomicU32>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicU32::new(0));
        let handle = count.clone();
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn subscription_id_display() {
        assert_eq!(SubscriptionId::new(42).to_string(), "Sub(42)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn fire_without_subscribers_is_noop() {
        let registry = CallbackRegistry::new();
        for button in Button::ALL {
            assert_eq!(registry.fire(button), 0);
        }
    }

    #[test]
    fn fire_reaches_only_its_channel() {
        let registry = CallbackRegistry::new();
        let (down, on_down) = counter();
        let (bed, on_bed) = counter();

        registry.on_button_pressed(Button::Down, on_down);
        registry.on_button_pressed(Button::Bed, on_bed);

        assert_eq!(registry.fire(Button::Down), 1);
        assert_eq!(down.load(Ordering::SeqCst), 1);
        assert_eq!(bed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn multiple_subscribers_same_channel() {
        let registry = CallbackRegistry::new();
        let (first, on_first) = counter();
        let (second, on_second) = counter();

        registry.on_button_pressed(Button::Window, on_first);
        registry.on_button_pressed(Button::Window, on_second);

        assert_eq!(registry.subscriber_count(Button::Window), 2);
        assert_eq!(registry.fire(Button::Window), 2);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let registry = CallbackRegistry::new();
        let (count, on_press) = counter();

        let id = registry.on_button_pressed(Button::Sitting, on_press);
        registry.fire(Button::Sitting);
        assert!(registry.unsubscribe(id));
        registry.fire(Button::Sitting);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn ids_unique_across_channels() {
        let registry = CallbackRegistry::new();
        let a = registry.on_button_pressed(Button::Down, || {});
        let b = registry.on_button_pressed(Button::Bed, || {});
        let c = registry.on_button_pressed(Button::Down, || {});

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let registry = Arc::new(CallbackRegistry::new());
        let slot = Arc::new(RwLock::new(None::<SubscriptionId>));

        let reg = registry.clone();
        let own = slot.clone();
        let id = registry.on_button_pressed(Button::Bed, move || {
            if let Some(id) = *own.read() {
                reg.unsubscribe(id);
            }
        });
        *slot.write() = Some(id);

        assert_eq!(registry.fire(Button::Bed), 1);
        assert_eq!(registry.fire(Button::Bed), 0);
    }

    #[test]
    fn clear_removes_everything() {
        let registry = CallbackRegistry::new();
        for button in Button::ALL {
            registry.on_button_pressed(button, || {});
        }
        assert_eq!(registry.callback_count(), 4);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_debug() {
        let registry = CallbackRegistry::new();
        registry.on_button_pressed(Button::Down, || {});

        let debug = format!("{registry:?}");
        assert!(debug.contains("CallbackRegistry"));
        assert!(debug.contains("callback_count: 1"));
    }
}
