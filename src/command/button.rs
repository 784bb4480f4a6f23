// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Button press commands.

use std::fmt;
use std::str::FromStr;

use crate::command::Command;
use crate::error::ValueError;
use crate::types::Button;

/// Command pressing one of the tile buttons.
///
/// # Examples
///
/// ```
/// use lift_tile::command::{ButtonCommand, Command};
/// use lift_tile::types::Button;
///
/// let cmd = ButtonCommand::new(Button::Window);
/// assert_eq!(cmd.name(), "Button3Command");
/// assert_eq!(cmd.to_string(), "Button3Command");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonCommand(Button);

impl ButtonCommand {
    /// Creates a command pressing `button`.
    #[must_use]
    pub const fn new(button: Button) -> Self {
        Self(button)
    }

    /// Returns the pressed button.
    #[must_use]
    pub const fn button(&self) -> Button {
        self.0
    }
}

impl From<Button> for ButtonCommand {
    fn from(button: Button) -> Self {
        Self(button)
    }
}

impl Command for ButtonCommand {
    fn name(&self) -> String {
        self.0.command_name().to_string()
    }
}

impl fmt::Display for ButtonCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.command_name())
    }
}

impl FromStr for ButtonCommand {
    type Err = ValueError;

    /// Parses a command name. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Button::from_command_name(s)
            .map(Self)
            .ok_or_else(|| ValueError::UnknownButtonCommand(s.to_string()))
    }
}
