// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UI properties of the tile.
//!
//! The tile publishes six string properties to the host: an icon, a page
//! title and one label per button. Values are set by the driver only and
//! reach the host in batches through a commit.
//!
//! | Key | Value |
//! |-----|-------|
//! | `MainIcon` | `icGenericDeviceOn` |
//! | `MainPageTitle` | `TV Lift` |
//! | `Button1Text` | `Down` |
//! | `Button2Text` | `Bed` |
//! | `Button3Text` | `Window` |
//! | `Button4Text` | `Sitting` |

mod registry;

pub use registry::{PropertyChange, PropertyDefinition, PropertyRegistry, PropertyType};

/// Key of the tile icon property.
pub const MAIN_ICON_KEY: &str = "MainIcon";

/// Key of the main page title property.
pub const MAIN_PAGE_TITLE_KEY: &str = "MainPageTitle";

/// Icon shown on the tile.
pub const DEFAULT_MAIN_ICON: &str = "icGenericDeviceOn";

/// Title of the main page.
pub const DEFAULT_MAIN_PAGE_TITLE: &str = "TV Lift";
