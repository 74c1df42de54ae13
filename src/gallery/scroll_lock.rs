// SPDX-License-Identifier: MPL-2.0
//! Page-level scroll lock shared by modal views.
//!
//! While any holder has the lock, the gallery grid must not scroll. The lock
//! is reference counted: only the first acquire produces a [`ScrollEffect::Lock`]
//! and only the release that brings the count back to zero produces
//! [`ScrollEffect::Unlock`]. A release without a matching acquire is a no-op,
//! so a doubled close can never unlock a page someone else still holds.

/// Side effect the presentation layer must apply after a lock transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEffect {
    /// Nothing changed.
    None,
    /// Stop background scrolling and pad content by `compensation` pixels
    /// so hiding the scrollbar does not shift the layout.
    Lock { compensation: f32 },
    /// Restore background scrolling and remove the padding.
    Unlock,
}

/// Reference-counted scroll lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollLock {
    holders: u32,
    compensation: f32,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock. `scrollbar_width` is only recorded by the first holder.
    pub fn acquire(&mut self, scrollbar_width: f32) -> ScrollEffect {
        self.holders += 1;
        if self.holders == 1 {
            self.compensation = scrollbar_width.max(0.0);
            log::trace!("Scroll lock acquired (compensation {}px)", self.compensation);
            ScrollEffect::Lock {
                compensation: self.compensation,
            }
        } else {
            ScrollEffect::None
        }
    }

    /// Releases one hold on the lock.
    pub fn release(&mut self) -> ScrollEffect {
        match self.holders {
            0 => ScrollEffect::None,
            1 => {
                self.holders = 0;
                self.compensation = 0.0;
                log::trace!("Scroll lock released");
                ScrollEffect::Unlock
            }
            _ => {
                self.holders -= 1;
                ScrollEffect::None
            }
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    /// Padding that replaces the hidden scrollbar while locked.
    #[must_use]
    pub fn compensation(&self) -> f32 {
        if self.is_locked() {
            self.compensation
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn holders(&self) -> u32 {
        self.holders
    }
}
