//! Core types and traits for the switcher control.
//!
//! This crate provides the foundation the switcher widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`] with exact per-channel interpolation
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - Rendering: [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Frame-stepped animation: [`RatioTween`], [`interpolated_ratio`]
//! - Brick verification: [`Brick`], [`BrickAssertion`]

pub mod animation;
pub mod brick;
mod canvas;
mod color;
mod constraints;
mod draw;
mod error;
mod event;
mod geometry;
pub mod widget;

pub use animation::{interpolated_ratio, RatioTween};
pub use brick::{Brick, BrickAssertion, BrickBudget, BrickVerification};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use error::{check_ratio, RatioError};
pub use event::{Event, MouseButton, PointerId, PointerType};
pub use geometry::{Insets, Point, Rect, Size};
pub use widget::{Canvas, LayoutResult, TextStyle, TypeId, Widget};
