//! Draw commands recorded from a paint pass.
//!
//! Everything the switcher paints reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// A single solid-fill drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },

    /// Fill a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Draw a tinted image
    Image {
        /// Image source identifier
        source: String,
        /// Destination bounds
        bounds: Rect,
        /// Tint color
        tint: Color,
    },
}

impl DrawCommand {
    /// Create a filled rectangle command.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect { bounds, color }
    }

    /// Create a filled circle command.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
        }
    }

    /// The color this command paints with.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Rect { color, .. } | Self::Circle { color, .. } => *color,
            Self::Text { style, .. } => style.color,
            Self::Image { tint, .. } => *tint,
        }
    }
}
