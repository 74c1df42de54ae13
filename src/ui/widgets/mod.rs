// SPDX-License-Identifier: MPL-2.0
pub mod loading_spinner;
pub mod scroll_lockable;

pub use loading_spinner::LoadingSpinner;
pub use scroll_lockable::{scroll_lockable, ScrollLockable};
