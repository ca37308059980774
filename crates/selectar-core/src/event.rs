//! Logical input events for the dropdown control.
//!
//! The control has no layout knowledge, so pointer events arrive already
//! resolved to a logical target: hit-testing coordinates against the rendered
//! surface is the host's job.

use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Pointer click resolved to a logical target
    Click {
        /// What was clicked
        target: ClickTarget,
        /// Button pressed
        button: MouseButton,
    },
    /// Pointer hovering over an option row in the open list
    Hover {
        /// Index of the hovered option
        index: usize,
    },
    /// Key pressed while the control holds input focus
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Control gained input focus
    FocusIn,
    /// Control lost input focus
    FocusOut,
}

/// Logical click target within the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickTarget {
    /// The control surface itself (the value/trigger area)
    Surface,
    /// An option row in the open list, by display index
    Option(usize),
    /// The clear-all button
    Clear,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Keyboard key identifiers recognized by the control.
///
/// Keys outside this set never reach the control; keys inside it that carry
/// no behavior in the current state are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter/Return key
    Enter,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Home key
    Home,
    /// End key
    End,
}

impl Event {
    /// Check if this is a pointer event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::Click { .. } | Self::Hover { .. })
    }

    /// Check if this is a keyboard event.
    #[must_use]
    pub const fn is_keyboard(&self) -> bool {
        matches!(self, Self::KeyDown { .. })
    }

    /// Check if this is a focus event.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self, Self::FocusIn | Self::FocusOut)
    }

    /// Get the click target if this is a click event.
    #[must_use]
    pub const fn click_target(&self) -> Option<ClickTarget> {
        match self {
            Self::Click { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Get the key if this is a keyboard event.
    #[must_use]
    pub const fn key(&self) -> Option<Key> {
        match self {
            Self::KeyDown { key } => Some(*key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_is_pointer() {
        let click = Event::Click {
            target: ClickTarget::Surface,
            button: MouseButton::Left,
        };
        assert!(click.is_pointer());
        assert!(Event::Hover { index: 2 }.is_pointer());
        assert!(!Event::KeyDown { key: Key::Enter }.is_pointer());
    }

    #[test]
    fn test_event_is_keyboard() {
        assert!(Event::KeyDown { key: Key::Down }.is_keyboard());
        assert!(!Event::FocusOut.is_keyboard());
        assert!(!Event::Hover { index: 0 }.is_keyboard());
    }

    #[test]
    fn test_event_is_focus() {
        assert!(Event::FocusIn.is_focus());
        assert!(Event::FocusOut.is_focus());
        assert!(!Event::KeyDown { key: Key::Tab }.is_focus());
    }

    #[test]
    fn test_event_click_target() {
        let click = Event::Click {
            target: ClickTarget::Option(3),
            button: MouseButton::Left,
        };
        assert_eq!(click.click_target(), Some(ClickTarget::Option(3)));
        assert_eq!(Event::FocusIn.click_target(), None);
    }

    #[test]
    fn test_event_key() {
        assert_eq!(Event::KeyDown { key: Key::Escape }.key(), Some(Key::Escape));
        assert_eq!(Event::Hover { index: 0 }.key(), None);
    }

    #[test]
    fn test_click_target_equality() {
        assert_eq!(ClickTarget::Option(1), ClickTarget::Option(1));
        assert_ne!(ClickTarget::Option(1), ClickTarget::Option(2));
        assert_ne!(ClickTarget::Surface, ClickTarget::Clear);
    }

    #[test]
    fn test_event_serialization_roundtrip() {
        let events = vec![
            Event::Click {
                target: ClickTarget::Surface,
                button: MouseButton::Left,
            },
            Event::Click {
                target: ClickTarget::Option(4),
                button: MouseButton::Left,
            },
            Event::Click {
                target: ClickTarget::Clear,
                button: MouseButton::Left,
            },
            Event::Hover { index: 1 },
            Event::KeyDown { key: Key::Enter },
            Event::FocusIn,
            Event::FocusOut,
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let deserialized: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(event, deserialized);
        }
    }
}
