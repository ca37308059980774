//! Focus-scoped keyboard routing.
//!
//! Controls must not listen to the global key stream for their whole program
//! lifetime: a listener is attached while its control is active, released on
//! teardown, and receives keys only while it holds input focus. [`KeyRouter`]
//! is the registry the host drives; it answers "who gets this event" and
//! reports who must be blurred when focus moves.

use selectar_core::Event;
use std::collections::HashSet;

/// Identifier for an attached keyboard listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Result of a focus handoff.
///
/// The host delivers `FocusOut` to `blurred` (which closes an open list) and
/// `FocusIn` to `focused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusChange {
    /// Listener that lost focus, if any
    pub blurred: Option<ListenerId>,
    /// Listener that gained focus, if any
    pub focused: Option<ListenerId>,
}

/// Registry of active keyboard listeners and the one holding focus.
#[derive(Debug, Default)]
pub struct KeyRouter {
    next_id: u64,
    attached: HashSet<ListenerId>,
    focused: Option<ListenerId>,
}

impl KeyRouter {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener for an active control.
    ///
    /// Returns the id used for focus and routing until [`Self::detach`].
    pub fn attach(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.attached.insert(id);
        id
    }

    /// Release a listener on control teardown.
    ///
    /// A detached listener is never routed to again; if it held focus, focus
    /// is dropped. Returns whether the id was attached.
    pub fn detach(&mut self, id: ListenerId) -> bool {
        let removed = self.attached.remove(&id);
        if removed && self.focused == Some(id) {
            self.focused = None;
        }
        removed
    }

    /// Move input focus to `id`.
    ///
    /// Focusing an unattached id changes nothing. The previously focused
    /// listener is reported so the host can deliver its blur.
    pub fn focus(&mut self, id: ListenerId) -> FocusChange {
        if !self.attached.contains(&id) || self.focused == Some(id) {
            return FocusChange::default();
        }
        let blurred = self.focused.take();
        self.focused = Some(id);
        FocusChange {
            blurred,
            focused: Some(id),
        }
    }

    /// Drop input focus entirely, reporting who lost it.
    pub fn blur(&mut self) -> Option<ListenerId> {
        self.focused.take()
    }

    /// The listener currently holding focus.
    #[must_use]
    pub const fn focused(&self) -> Option<ListenerId> {
        self.focused
    }

    /// Whether `id` is currently attached.
    #[must_use]
    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.attached.contains(&id)
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Whether no listeners are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Resolve which listener should receive `event`.
    ///
    /// Keyboard events go to the focused listener only; with no focus they
    /// are dropped. Pointer and focus events are position-routed by the host
    /// and resolve to nobody here.
    #[must_use]
    pub fn route(&self, event: &Event) -> Option<ListenerId> {
        if event.is_keyboard() {
            self.focused
        } else {
            None
        }
    }
}
