// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::artwork::Category;
use crate::gallery::{NavKey, TouchInput};
use crate::ui::gallery;
use crate::ui::home;
use crate::ui::navbar;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    /// A gallery page message, tagged with the category of the page that
    /// produced it so late results from an unmounted page are dropped.
    Gallery(Category, gallery::Message),
    LightboxKey(NavKey),
    LightboxTouch(TouchInput),
    WindowResized(Size),
    /// Animation tick while a spinner spins or an image fades in.
    Tick(Instant),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `en-US`, `fr`).
    pub lang: Option<String>,
    /// Catalog root: a directory or an `http(s)://` base URL.
    pub catalog: Option<String>,
    /// Gallery to open at startup instead of the home page.
    pub category: Option<String>,
}
