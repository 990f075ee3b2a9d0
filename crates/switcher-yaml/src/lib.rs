//! YAML style definitions for the switcher control.
//!
//! A [`SwitcherStyle`] is the configuration surface of the control: track
//! and hover colors, tint colors, slot icons and labels. It is read once at
//! construction and never mutated by the widgets.

mod error;
mod style;

pub use error::StyleError;
pub use style::{SlotStyle, SwitcherStyle, TintStyle, TrackStyle};
