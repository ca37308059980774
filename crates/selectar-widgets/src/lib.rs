//! The Selectar dropdown control.
//!
//! [`Select`] is a controlled component: the committed value is owned by the
//! caller, the control only proposes replacements through its change callback.
//! The control reacts to the logical events defined in `selectar-core` and
//! exposes a [`SelectView`] snapshot for the rendering layer.
//!
//! Keyboard events are focus-scoped: [`KeyRouter`] keeps listeners attached
//! only while their control is active and routes keys to the focused one.

pub mod input;
pub mod interaction;
pub mod select;

pub use input::{FocusChange, KeyRouter, ListenerId};
pub use interaction::InteractionState;
pub use select::{ItemView, MultiChanged, Select, SelectView, SingleChanged};
