// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands the host sends to the tile, and their routing.
//!
//! A command is a name plus a list of string parameters. The tile knows four
//! names, one per button; any other non-empty name is accepted and ignored.
//!
//! | Command | Raises |
//! |---------|--------|
//! | `Button1Command` | Lift Down |
//! | `Button2Command` | Lift Bed |
//! | `Button3Command` | Lift Window |
//! | `Button4Command` | Lift Sitting |
//!
//! # Examples
//!
//! ```
//! use lift_tile::command::{ButtonCommand, Command};
//! use lift_tile::types::Button;
//!
//! let cmd: ButtonCommand = "Button4Command".parse()?;
//! assert_eq!(cmd.button(), Button::Sitting);
//! assert_eq!(cmd.name(), "Button4Command");
//! # Ok::<(), lift_tile::Error>(())
//! ```

mod button;
mod dispatcher;

pub use button::ButtonCommand;
pub use dispatcher::{
    ButtonHandler, CommandHandler, Dispatcher, HandlerContext, UnhandledCommand, handler_fn,
};

/// A command that can be sent to the tile.
pub trait Command {
    /// Returns the command name.
    fn name(&self) -> String;

    /// Returns the command parameters.
    ///
    /// The tile accepts parameters on every command but none of its
    /// handlers reads them.
    fn parameters(&self) -> Vec<String> {
        Vec::new()
    }
}

/// A command built from an arbitrary name and parameters.
///
/// # Examples
///
/// ```
/// use lift_tile::command::{Command, RawCommand};
///
/// let cmd = RawCommand::new("Button1Command").with_parameter("fast");
/// assert_eq!(cmd.name(), "Button1Command");
/// assert_eq!(cmd.parameters(), ["fast"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawCommand {
    name: String,
    parameters: Vec<String>,
}

impl RawCommand {
    /// Creates a command with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameters.push(parameter.into());
        self
    }
}

impl Command for RawCommand {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn parameters(&self) -> Vec<String> {
        self.parameters.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_command_defaults_to_no_parameters() {
        let cmd = RawCommand::new("Anything");
        assert_eq!(cmd.name(), "Anything");
        assert!(cmd.parameters().is_empty());
    }

    #[test]
    fn raw_command_keeps_parameter_order() {
        let cmd = RawCommand::new("X").with_parameter("a").with_parameter("b");
        assert_eq!(cmd.parameters(), ["a", "b"]);
    }
}
