//! Transient open/highlight state for the dropdown.

/// Open flag plus highlighted-option cursor.
///
/// The highlighted index is only meaningful while the list is open: every
/// closed→open transition resets it to the first option, and rendering logic
/// must not read it while closed. It stays within `[0, len - 1]` for the
/// current option count; out-of-range moves are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    open: bool,
    highlighted: usize,
}

impl InteractionState {
    /// Fresh state: closed, cursor on the first option.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            highlighted: 0,
        }
    }

    /// Whether the options list is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current highlight cursor. Only meaningful while open.
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open the list, resetting the cursor to the first option.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.highlighted = 0;
        }
    }

    /// Close the list.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggle open/closed.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move the cursor to `index` if it is a valid position.
    pub fn highlight(&mut self, index: usize, len: usize) {
        if index < len {
            self.highlighted = index;
        }
    }

    /// Move the cursor down one option, stopping at the last. No wraparound.
    pub fn step_down(&mut self, len: usize) {
        if self.highlighted + 1 < len {
            self.highlighted += 1;
        }
    }

    /// Move the cursor up one option, stopping at the first. No wraparound.
    pub fn step_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Re-clamp the cursor after the option list changed length.
    pub fn clamp_to(&mut self, len: usize) {
        if self.highlighted >= len {
            self.highlighted = len.saturating_sub(1);
        }
    }
}
