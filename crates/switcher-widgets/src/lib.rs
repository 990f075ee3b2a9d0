//! Widgets for the two-choice switcher control.
//!
//! - [`HoverTrack`]: capsule track with a draggable, snapping thumb
//! - [`SwitcherView`]: hover track plus tinted icon/label slots

pub mod hover_track;
pub mod switcher;

pub use hover_track::{fill_capsule, HoverTrack, Side, TrackEvent, SNAP_THRESHOLD, THUMB_MARGIN_DP};
pub use switcher::{slot_tints, Slot, SwitcherEvent, SwitcherView};
