// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Button notification channels.
//!
//! The tile raises one notification per button. Each channel holds zero or
//! more subscriber callbacks; firing a channel with no subscribers does
//! nothing.
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - The four channels and their subscribers
//! - [`Subscribable`] - Trait for types that raise button notifications

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
