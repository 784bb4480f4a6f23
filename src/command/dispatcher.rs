// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command routing.
//!
//! The [`Dispatcher`] maps command names to [`CommandHandler`]s. Names that
//! are not in the table go to a fallback handler, [`UnhandledCommand`] by
//! default, which only logs.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::logging::LogConfig;
use crate::subscription::CallbackRegistry;
use crate::types::Button;

/// Log source of routing entries.
const SWITCH_SOURCE: &str = "Switch";

/// What a handler can reach while it runs.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    /// The tile's logging configuration.
    pub log: &'a LogConfig,
    /// The tile's notification channels.
    pub callbacks: &'a CallbackRegistry,
}

/// Handles one command name.
///
/// Any `Fn(&HandlerContext, &[String])` closure is a handler.
pub trait CommandHandler: Send + Sync {
    /// Runs the handler.
    fn handle(&self, ctx: &HandlerContext<'_>, parameters: &[String]);
}

impl<F> CommandHandler for F
where
    F: Fn(&HandlerContext<'_>, &[String]) + Send + Sync,
{
    fn handle(&self, ctx: &HandlerContext<'_>, parameters: &[String]) {
        self(ctx, parameters);
    }
}

/// Turns a closure into a [`CommandHandler`].
///
/// Only needed to pin down the closure signature at the call site.
pub fn handler_fn<F>(f: F) -> F
where
    F: Fn(&HandlerContext<'_>, &[String]) + Send + Sync,
{
    f
}

/// Handler raising the notification of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonHandler {
    button: Button,
}

impl ButtonHandler {
    /// Creates the handler for `button`.
    #[must_use]
    pub const fn new(button: Button) -> Self {
        Self { button }
    }
}

impl CommandHandler for ButtonHandler {
    fn handle(&self, ctx: &HandlerContext<'_>, _parameters: &[String]) {
        let n = self.button.index();
        ctx.log
            .debug(&format!("Button{n}Event"), &format!("Button {n} Pressed"));
        ctx.callbacks.fire(self.button);
    }
}

/// Fallback handler for names nobody registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnhandledCommand;

impl CommandHandler for UnhandledCommand {
    fn handle(&self, ctx: &HandlerContext<'_>, _parameters: &[String]) {
        ctx.log.debug(SWITCH_SOURCE, "Unhandled command!");
    }
}

/// Table from command name to handler.
///
/// # Examples
///
/// ```
/// use lift_tile::command::{Dispatcher, HandlerContext};
/// use lift_tile::logging::LogConfig;
/// use lift_tile::subscription::CallbackRegistry;
/// use lift_tile::types::Button;
///
/// let dispatcher = Dispatcher::with_buttons();
/// let callbacks = CallbackRegistry::new();
/// let log = LogConfig::disabled();
/// let ctx = HandlerContext { log: &log, callbacks: &callbacks };
///
/// callbacks.on_button_pressed(Button::Bed, || println!("bed"));
/// assert!(dispatcher.route(&ctx, "Button2Command", &[]));
/// assert!(!dispatcher.route(&ctx, "Unknown", &[]));
/// ```
pub struct Dispatcher {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
    fallback: Arc<dyn CommandHandler>,
}

impl Dispatcher {
    /// Creates an empty table with [`UnhandledCommand`] as fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: Arc::new(UnhandledCommand),
        }
    }

    /// Creates a table with one [`ButtonHandler`] per button.
    #[must_use]
    pub fn with_buttons() -> Self {
        let mut dispatcher = Self::new();
        for button in Button::ALL {
            dispatcher.register(button.command_name(), ButtonHandler::new(button));
        }
        dispatcher
    }

    /// Registers `handler` for `name`, returning the handler it replaces.
    pub fn register<H>(
        &mut self,
        name: impl Into<String>,
        handler: H,
    ) -> Option<Arc<dyn CommandHandler>>
    where
        H: CommandHandler + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler))
    }

    /// Replaces the fallback handler.
    pub fn set_fallback<H>(&mut self, handler: H)
    where
        H: CommandHandler + 'static,
    {
        self.fallback = Arc::new(handler);
    }

    /// Returns `true` if `name` has a registered handler.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the registered names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Runs the handler for `command`, or the fallback.
    ///
    /// Matching is exact string equality. A match is logged under
    /// `"Switch"` before its handler runs. Returns `true` on a match.
    pub fn route(
        &self,
        ctx: &HandlerContext<'_>,
        command: &str,
        parameters: &[String],
    ) -> bool {
        match self.handlers.get(command) {
            Some(handler) => {
                ctx.log.debug(SWITCH_SOURCE, command);
                handler.handle(ctx, parameters);
                true
            }
            None => {
                self.fallback.handle(ctx, parameters);
                false
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_buttons()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Dispatcher").field("commands", &names).finish()
    }
}
