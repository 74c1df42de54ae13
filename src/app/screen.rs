// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::domain::artwork::Category;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Gallery(Category),
}

impl Screen {
    /// Category shown by this screen, if it is a gallery.
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Screen::Home => None,
            Screen::Gallery(category) => Some(category),
        }
    }
}
