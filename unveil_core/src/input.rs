// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete inputs delivered by the host.

use kurbo::Point;

use crate::stage::PlayIntent;

/// Keys the landing page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// The space bar.
    Space,
    /// Escape.
    Escape,
    /// Any other key.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// One event from the UI host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// The reveal control was clicked.
    RevealActivated,
    /// A key was pressed.
    KeyDown {
        /// Which key.
        key: Key,
        /// Whether the reveal control had focus.
        on_reveal_control: bool,
    },
    /// The close control was clicked.
    CloseActivated,
    /// The fallback play control was clicked.
    FallbackActivated,
    /// A playback request was rejected by the platform.
    PlaybackRejected(PlayIntent),
    /// The pointer moved, in viewport coordinates.
    PointerMoved(Point),
    /// The pointer entered or left a statistic element.
    StatHover {
        /// Index of the statistic element.
        index: usize,
        /// `true` on enter, `false` on leave.
        entered: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_key_names() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Spacebar"), Key::Space);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("Esc"), Key::Escape);
        assert_eq!(Key::from_dom("a"), Key::Other);
        assert_eq!(Key::from_dom("enter"), Key::Other, "key names are case sensitive");
    }
}
