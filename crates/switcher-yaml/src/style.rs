//! Style types for the switcher control.

use crate::StyleError;
use serde::{Deserialize, Serialize};
use switcher_core::{Color, Insets};

/// Complete style of a switcher, usually loaded from `switcher.yaml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitcherStyle {
    /// Track and thumb appearance
    #[serde(default)]
    pub track: TrackStyle,
    /// Slot tint colors
    #[serde(default)]
    pub tint: TintStyle,
    /// Left slot content
    #[serde(default)]
    pub left: SlotStyle,
    /// Right slot content
    #[serde(default)]
    pub right: SlotStyle,
}

/// Track and thumb appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackStyle {
    /// Capsule background color
    #[serde(default = "default_background")]
    pub background: Color,
    /// Thumb color when fully left
    #[serde(default = "default_hover_left")]
    pub hover_left: Color,
    /// Thumb color when fully right
    #[serde(default = "default_hover_right")]
    pub hover_right: Color,
    /// Pixels per density-independent unit
    #[serde(default = "default_density")]
    pub density: f32,
    /// Padding between the widget bounds and the capsule
    #[serde(default)]
    pub padding: Insets,
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_hover_left() -> Color {
    Color::BLUE
}

fn default_hover_right() -> Color {
    Color::RED
}

const fn default_density() -> f32 {
    1.0
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            background: default_background(),
            hover_left: default_hover_left(),
            hover_right: default_hover_right(),
            density: default_density(),
            padding: Insets::ZERO,
        }
    }
}

/// Slot tint colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TintStyle {
    /// Tint of the selected slot
    #[serde(default = "default_enabled")]
    pub enabled: Color,
    /// Tint of the unselected slot
    #[serde(default = "default_disabled")]
    pub disabled: Color,
}

fn default_enabled() -> Color {
    Color::WHITE
}

fn default_disabled() -> Color {
    Color::BLACK
}

impl Default for TintStyle {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            disabled: default_disabled(),
        }
    }
}

/// Icon and label of one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotStyle {
    /// Icon source identifier, resolved by the host
    #[serde(default)]
    pub icon: Option<String>,
    /// Label text
    #[serde(default)]
    pub label: String,
    /// Label font size in pixels
    #[serde(default = "default_label_size")]
    pub label_size: f32,
}

const fn default_label_size() -> f32 {
    14.0
}

impl Default for SlotStyle {
    fn default() -> Self {
        Self {
            icon: None,
            label: String::new(),
            label_size: default_label_size(),
        }
    }
}

impl SlotStyle {
    /// Create a slot with a label and no icon.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the icon source.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    fn validate(&self, side: &str) -> Result<(), StyleError> {
        if !(self.label_size.is_finite() && self.label_size > 0.0) {
            return Err(StyleError::invalid(
                format!("{side}.label_size"),
                format!("must be a positive number, got {}", self.label_size),
            ));
        }
        Ok(())
    }
}

impl SwitcherStyle {
    /// Parse and validate a style from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or a value fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        let style: Self = serde_yaml_ng::from_str(yaml)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, StyleError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), StyleError> {
        let density = self.track.density;
        if !(density.is_finite() && density > 0.0) {
            return Err(StyleError::invalid(
                "track.density",
                format!("must be a positive number, got {density}"),
            ));
        }

        let padding = self.track.padding;
        for (name, value) in [
            ("left", padding.left),
            ("top", padding.top),
            ("right", padding.right),
            ("bottom", padding.bottom),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(StyleError::invalid(
                    format!("track.padding.{name}"),
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        self.left.validate("left")?;
        self.right.validate("right")
    }
}
