// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The four lift buttons of the tile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// One of the four tile buttons.
///
/// Each button has a position (1-4), a command name the host sends when the
/// button is pressed, a programmable event it raises, and a UI label.
///
/// # Examples
///
/// ```
/// use lift_tile::types::Button;
///
/// let bed = Button::new(2).unwrap();
/// assert_eq!(bed, Button::Bed);
/// assert_eq!(bed.command_name(), "Button2Command");
/// assert_eq!(bed.event_label(), "Lift Bed");
/// assert_eq!(bed.label_key(), "Button2Text");
///
/// assert!(Button::new(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Button {
    /// Button 1, lowers the lift.
    Down,
    /// Button 2, bed viewing position.
    Bed,
    /// Button 3, window viewing position.
    Window,
    /// Button 4, sitting position.
    Sitting,
}

impl Button {
    /// All buttons in position order.
    pub const ALL: [Self; 4] = [Self::Down, Self::Bed, Self::Window, Self::Sitting];

    /// Returns the button at the given position (1-4).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidButtonIndex`] if `index` is not 1-4.
    pub const fn new(index: u8) -> Result<Self, ValueError> {
        match index {
            1 => Ok(Self::Down),
            2 => Ok(Self::Bed),
            3 => Ok(Self::Window),
            4 => Ok(Self::Sitting),
            _ => Err(ValueError::InvalidButtonIndex(index)),
        }
    }

    /// Returns the button position (1-4).
    #[must_use]
    pub const fn index(&self) -> u8 {
        match self {
            Self::Down => 1,
            Self::Bed => 2,
            Self::Window => 3,
            Self::Sitting => 4,
        }
    }

    /// Returns the command name the host sends for this button.
    #[must_use]
    pub const fn command_name(&self) -> &'static str {
        match self {
            Self::Down => "Button1Command",
            Self::Bed => "Button2Command",
            Self::Window => "Button3Command",
            Self::Sitting => "Button4Command",
        }
    }

    /// Returns the name of the notification channel this button fires.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Down => "Button1",
            Self::Bed => "Button2",
            Self::Window => "Button3",
            Self::Sitting => "Button4",
        }
    }

    /// Returns the programmable event label shown to integrators.
    #[must_use]
    pub const fn event_label(&self) -> &'static str {
        match self {
            Self::Down => "Lift Down",
            Self::Bed => "Lift Bed",
            Self::Window => "Lift Window",
            Self::Sitting => "Lift Sitting",
        }
    }

    /// Returns the key of the property holding this button's UI label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::Down => "Button1Text",
            Self::Bed => "Button2Text",
            Self::Window => "Button3Text",
            Self::Sitting => "Button4Text",
        }
    }

    /// Returns the label the tile shows for this button.
    #[must_use]
    pub const fn default_label(&self) -> &'static str {
        match self {
            Self::Down => "Down",
            Self::Bed => "Bed",
            Self::Window => "Window",
            Self::Sitting => "Sitting",
        }
    }

    /// Returns the button whose command name is exactly `name`.
    #[must_use]
    pub fn from_command_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.command_name() == name)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

impl TryFrom<u8> for Button {
    type Error = ValueError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for button in Button::ALL {
            assert_eq!(Button::new(button.index()), Ok(button));
        }
    }

    #[test]
    fn invalid_index() {
        assert_eq!(Button::new(0), Err(ValueError::InvalidButtonIndex(0)));
        assert_eq!(Button::try_from(9), Err(ValueError::InvalidButtonIndex(9)));
    }

    #[test]
    fn names_follow_position() {
        for button in Button::ALL {
            let n = button.index();
            assert_eq!(button.command_name(), format!("Button{n}Command"));
            assert_eq!(button.event_name(), format!("Button{n}"));
            assert_eq!(button.label_key(), format!("Button{n}Text"));
        }
    }

    #[test]
    fn event_labels() {
        let labels: Vec<_> = Button::ALL.iter().map(Button::event_label).collect();
        assert_eq!(
            labels,
            ["Lift Down", "Lift Bed", "Lift Window", "Lift Sitting"]
        );
    }

    #[test]
    fn from_command_name_is_exact() {
        assert_eq!(Button::from_command_name("Button3Command"), Some(Button::Window));
        assert_eq!(Button::from_command_name("button3command"), None);
        assert_eq!(Button::from_command_name("Button3Command "), None);
        assert_eq!(Button::from_command_name(""), None);
    }

    #[test]
    fn display_uses_event_name() {
        assert_eq!(Button::Sitting.to_string(), "Button4");
    }
}
