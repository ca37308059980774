//! Select/Dropdown control for choosing from options.
//!
//! The control is *controlled* in the classic sense: the committed value is
//! owned by the caller. Every event handler recomputes its decision from the
//! value the caller last supplied, proposes a replacement through the change
//! callback, and leaves applying it to the owner, who feeds the new value
//! back with [`Select::set_value`] for the displayed state to update.

use crate::interaction::InteractionState;
use selectar_core::{ClickTarget, Event, Key, MouseButton, SelectOption, Selection, SelectionMode};
use serde::Serialize;

/// Change callback for a single-select control.
pub type SingleChanged = Box<dyn FnMut(Option<SelectOption>)>;

/// Change callback for a multi-select control.
pub type MultiChanged = Box<dyn FnMut(Vec<SelectOption>)>;

/// Mode-specific value shape and change callback.
///
/// The discriminant is fixed at construction through [`Select::single`] and
/// [`Select::multiple`]; a control never switches shape at runtime.
enum Binding {
    Single {
        value: Option<SelectOption>,
        on_change: SingleChanged,
    },
    Multiple {
        values: Vec<SelectOption>,
        on_change: MultiChanged,
    },
}

impl Binding {
    /// Snapshot of the caller-supplied current value.
    fn selection(&self) -> Selection {
        match self {
            Self::Single { value, .. } => Selection::Single(value.clone()),
            Self::Multiple { values, .. } => Selection::Multiple(values.clone()),
        }
    }

    /// Hand a proposed replacement to the owner.
    ///
    /// The stored value is not touched here; the owner feeds the new value
    /// back through [`Select::set_value`].
    fn notify(&mut self, next: Selection) {
        match (self, next) {
            (Self::Single { on_change, .. }, Selection::Single(value)) => on_change(value),
            (Self::Multiple { on_change, .. }, Selection::Multiple(values)) => on_change(values),
            // toggled/cleared preserve the mode, so the shapes always match
            _ => {}
        }
    }

    /// Accept a value fed back by the owner. A wrong-shape value is ignored.
    fn accept(&mut self, value: Selection) -> bool {
        match (self, value) {
            (Self::Single { value: current, .. }, Selection::Single(next)) => {
                *current = next;
                true
            }
            (Self::Multiple { values: current, .. }, Selection::Multiple(next)) => {
                *current = next;
                true
            }
            _ => false,
        }
    }
}

/// Dropdown-selection control.
pub struct Select {
    /// Candidate options; order is display and index order
    options: Vec<SelectOption>,
    /// Mode discriminant, current value, change callback
    binding: Binding,
    /// Open flag and highlight cursor, owned by this instance only
    state: InteractionState,
}

impl Select {
    /// Create a single-select control.
    #[must_use]
    pub fn single(
        options: Vec<SelectOption>,
        value: Option<SelectOption>,
        on_change: impl FnMut(Option<SelectOption>) + 'static,
    ) -> Self {
        Self {
            options,
            binding: Binding::Single {
                value,
                on_change: Box::new(on_change),
            },
            state: InteractionState::new(),
        }
    }

    /// Create a multi-select control.
    #[must_use]
    pub fn multiple(
        options: Vec<SelectOption>,
        values: Vec<SelectOption>,
        on_change: impl FnMut(Vec<SelectOption>) + 'static,
    ) -> Self {
        Self {
            options,
            binding: Binding::Multiple {
                values,
                on_change: Box::new(on_change),
            },
            state: InteractionState::new(),
        }
    }

    /// The fixed selection mode of this instance.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self.binding {
            Binding::Single { .. } => SelectionMode::Single,
            Binding::Multiple { .. } => SelectionMode::Multiple,
        }
    }

    /// Whether the options list is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Current highlight cursor. Only meaningful while the list is open.
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.state.highlighted()
    }

    /// The candidate options.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Number of candidate options.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Snapshot of the current committed value.
    #[must_use]
    pub fn value(&self) -> Selection {
        self.binding.selection()
    }

    /// Feed a new committed value back in (controlled-component contract).
    ///
    /// Returns `false` if the value's shape does not match the control's
    /// mode, in which case nothing changes.
    pub fn set_value(&mut self, value: Selection) -> bool {
        self.binding.accept(value)
    }

    /// Replace the option list, re-clamping the highlight cursor so it stays
    /// valid if the list shrank while open.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.state.clamp_to(self.options.len());
    }

    /// Process one input event.
    ///
    /// All transitions happen synchronously before this returns; the only
    /// externally observable effect is an invocation of the change callback.
    pub fn event(&mut self, event: &Event) {
        match *event {
            Event::Click {
                target,
                button: MouseButton::Left,
            } => match target {
                ClickTarget::Surface => self.state.toggle(),
                ClickTarget::Option(index) => {
                    self.commit(index);
                    self.state.close();
                }
                // The clear click is consumed here: it must not double as a
                // surface toggle, so the open flag stays as it was.
                ClickTarget::Clear => self.clear(),
            },
            Event::Hover { index } => self.state.highlight(index, self.options.len()),
            Event::KeyDown { key } => self.key_down(key),
            Event::FocusOut => self.state.close(),
            _ => {}
        }
    }

    /// Render instructions for the host.
    #[must_use]
    pub fn view(&self) -> SelectView {
        let selection = self.binding.selection();
        let list_visible = self.state.is_open();
        let items = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| ItemView {
                label: option.label.clone(),
                selected: selection.contains(option),
                highlighted: list_visible && index == self.state.highlighted(),
            })
            .collect();
        SelectView {
            display: selection.labels().into_iter().map(String::from).collect(),
            list_visible,
            items,
        }
    }

    /// Keyboard table. Only reached while this control holds input focus.
    fn key_down(&mut self, key: Key) {
        match key {
            Key::Enter | Key::Space => {
                // Commit only if the list was already open at keypress time.
                // From closed, the press just opens.
                if self.state.is_open() {
                    self.commit(self.state.highlighted());
                    self.state.close();
                } else {
                    self.state.open();
                }
            }
            Key::Down => {
                if self.state.is_open() {
                    self.state.step_down(self.options.len());
                } else {
                    self.state.open();
                }
            }
            Key::Up => {
                if self.state.is_open() {
                    self.state.step_up();
                } else {
                    self.state.open();
                }
            }
            Key::Escape => self.state.close(),
            _ => {}
        }
    }

    /// Toggle the option at `index` against the current value and propose
    /// the result. No target (empty or shrunk list) and no-change toggles
    /// (single mode, re-selecting the current option) stay silent.
    fn commit(&mut self, index: usize) {
        let Some(option) = self.options.get(index).cloned() else {
            return;
        };
        let current = self.binding.selection();
        let next = current.toggled(&option);
        if next != current {
            self.binding.notify(next);
        }
    }

    /// Propose the cleared value for this mode.
    fn clear(&mut self) {
        let next = self.binding.selection().cleared();
        self.binding.notify(next);
    }
}

/// Per-option render instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Display label
    pub label: String,
    /// Part of the committed selection
    pub selected: bool,
    /// Under the highlight cursor; only set while the list is visible
    pub highlighted: bool,
}

/// Snapshot the control hands the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    /// Labels of the committed value, in selection order
    pub display: Vec<String>,
    /// Whether the options list is visible
    pub list_visible: bool,
    /// One entry per candidate option, in display order
    pub items: Vec<ItemView>,
}
