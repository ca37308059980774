//! Core types for the Selectar dropdown control.
//!
//! This crate provides the rendering-free foundation of the control:
//! - Option data: [`SelectOption`], [`OptionValue`]
//! - The selection model: [`Selection`], [`SelectionMode`]
//! - Logical input events: [`Event`], [`Key`], [`ClickTarget`]
//!
//! Everything here is pure data and pure functions; the interaction state
//! machine that consumes these types lives in `selectar-widgets`.

mod event;
mod option;
mod selection;

pub use event::{ClickTarget, Event, Key, MouseButton};
pub use option::{OptionValue, SelectOption};
pub use selection::{Selection, SelectionMode};
