//! Hover track: the capsule track and draggable thumb of a switcher.
//!
//! The track owns a continuous `ratio` in [0, 1] (0 = thumb fully left,
//! 1 = fully right). Pointer input drags the thumb, and releasing or
//! cancelling a gesture snaps it to the nearer endpoint with a short linear
//! animation. Every state transition is reported as a [`TrackEvent`] in an
//! outbox the owner drains with [`HoverTrack::drain_events`].

use serde::{Deserialize, Serialize};
use std::any::Any;
use switcher_core::{
    animation::DEFAULT_DURATION, check_ratio, Brick, BrickAssertion, BrickBudget,
    BrickVerification, Canvas, Color, Constraints, Event, Insets, LayoutResult, MouseButton,
    Point, RatioError, RatioTween, Rect, Size, TypeId, Widget,
};
use tracing::{debug, trace, warn};

/// Inset of the thumb from the capsule edges, in density-independent units.
pub const THUMB_MARGIN_DP: f32 = 4.0;

/// Release ratios at or above this value snap right.
pub const SNAP_THRESHOLD: f64 = 0.5;

const PREFERRED_WIDTH_DP: f32 = 160.0;
const PREFERRED_HEIGHT_DP: f32 = 40.0;

/// One of the two endpoints of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Ratio 0.0
    Left,
    /// Ratio 1.0
    Right,
}

impl Side {
    /// Endpoint a release at `ratio` snaps to.
    #[must_use]
    pub fn snap(ratio: f64) -> Self {
        if ratio < SNAP_THRESHOLD {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Ratio of this endpoint.
    #[must_use]
    pub const fn ratio(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Right => 1.0,
        }
    }
}

/// Message emitted by the hover track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrackEvent {
    /// The ratio changed (direct, animated frame, or drag)
    RatioChanged {
        /// The new ratio
        ratio: f64,
    },
    /// A drag started on the thumb
    DragStarted,
    /// The drag that started on the thumb ended
    DragFinished,
    /// A gesture ended and the thumb is heading to the left endpoint
    SnappedLeft,
    /// A gesture ended and the thumb is heading to the right endpoint
    SnappedRight,
}

/// Capsule track with a draggable thumb.
#[derive(Debug, Clone)]
pub struct HoverTrack {
    /// Thumb position in [0, 1]
    ratio: f64,
    /// Whether a drag started inside the thumb is in progress
    dragging: bool,
    /// Capsule background color
    track_color: Color,
    /// Thumb color at ratio 0
    hover_color_left: Color,
    /// Thumb color at ratio 1
    hover_color_right: Color,
    /// Pixels per density-independent unit
    density: f32,
    /// Padding between bounds and capsule
    padding: Insets,
    /// Snap animation length in seconds
    animation_duration: f64,
    /// Bounds from the last layout pass
    bounds: Rect,
    /// Seconds advanced through `tick`
    clock: f64,
    /// Running snap/select animation
    animation: Option<RatioTween>,
    /// Previous pointer position of the current gesture
    last_pointer: Option<Point>,
    /// Undrained messages
    events: Vec<TrackEvent>,
    /// Set on every visible change, cleared by the host
    redraw_requested: bool,
}

impl Default for HoverTrack {
    fn default() -> Self {
        Self {
            ratio: 0.0,
            dragging: false,
            track_color: Color::WHITE,
            hover_color_left: Color::BLUE,
            hover_color_right: Color::RED,
            density: 1.0,
            padding: Insets::ZERO,
            animation_duration: DEFAULT_DURATION,
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
            clock: 0.0,
            animation: None,
            last_pointer: None,
            events: Vec::new(),
            redraw_requested: false,
        }
    }
}

impl HoverTrack {
    /// Create a new hover track at ratio 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capsule background color.
    #[must_use]
    pub const fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the thumb colors at the left and right endpoints.
    #[must_use]
    pub const fn hover_colors(mut self, left: Color, right: Color) -> Self {
        self.hover_color_left = left;
        self.hover_color_right = right;
        self
    }

    /// Set the density scale for the thumb margin.
    #[must_use]
    pub fn density(mut self, density: f32) -> Self {
        self.density = density.max(0.1);
        self
    }

    /// Set the padding between bounds and capsule.
    #[must_use]
    pub const fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the snap animation length in seconds.
    #[must_use]
    pub fn animation_duration(mut self, seconds: f64) -> Self {
        self.animation_duration = seconds.max(0.0);
        self
    }

    /// Get the current ratio.
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Whether a drag on the thumb is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether an animation is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the capsule background color.
    #[must_use]
    pub const fn get_track_color(&self) -> Color {
        self.track_color
    }

    /// Get the density scale.
    #[must_use]
    pub const fn get_density(&self) -> f32 {
        self.density
    }

    /// Set the ratio, optionally animating to it.
    ///
    /// Any accepted call supersedes a running animation. Without animation
    /// a changed value is applied immediately and reported once; an
    /// animated change is applied frame by frame from [`Self::tick`].
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::OutOfRange`] if `value` is outside [0, 1];
    /// the track is left untouched.
    pub fn set_ratio(&mut self, value: f64, animate: bool) -> Result<(), RatioError> {
        let value = check_ratio(value).map_err(|err| {
            warn!(value, "rejected out-of-range ratio");
            err
        })?;
        self.move_to(value, animate);
        Ok(())
    }

    /// Animate the thumb to an endpoint.
    pub fn animate_to(&mut self, side: Side) {
        self.move_to(side.ratio(), true);
    }

    /// Advance the animation clock by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.clock += dt;
        }
        self.step_animation();
    }

    /// Handle a pointer press at `position`.
    ///
    /// Starts a drag when the press lands on the thumb, halting any running
    /// animation.
    pub fn pointer_down(&mut self, position: Point) {
        self.last_pointer = Some(position);
        self.dragging = self.thumb_rect().contains_point(&position);
        if self.dragging {
            self.animation = None;
            debug!(ratio = self.ratio, "thumb drag started");
            self.events.push(TrackEvent::DragStarted);
        }
    }

    /// Handle a drag step.
    ///
    /// `distance_x` is the previous x minus the current x, the scroll
    /// distance convention of gesture detectors, so dragging right is
    /// negative and increases the ratio. Ignored unless dragging.
    pub fn pointer_move(&mut self, distance_x: f64) {
        let half_width = self.track_width() / 2.0;
        if !self.dragging || !distance_x.is_finite() || half_width <= 0.0 {
            return;
        }
        let delta = -distance_x / half_width;
        self.move_to(self.ratio + delta, false);
    }

    /// Handle a pointer release at `position` and snap to an endpoint.
    ///
    /// The release ratio is the dragged ratio during a drag, otherwise the
    /// horizontal release position across the bounds.
    pub fn pointer_up(&mut self, position: Point) {
        let release = if self.dragging {
            self.ratio
        } else {
            self.ratio_at(position.x)
        };
        self.finish_gesture(release);
    }

    /// Handle a cancelled gesture, snapping from the current ratio.
    pub fn pointer_cancel(&mut self) {
        self.finish_gesture(self.ratio);
    }

    /// Route an input event to the pointer handlers and drain the
    /// messages it produced.
    ///
    /// Only the primary pointer and the left mouse button are handled.
    /// Moves, releases and cancels outside a press-initiated gesture are
    /// ignored.
    pub fn handle_event(&mut self, event: &Event) -> Vec<TrackEvent> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Event::PointerDown {
                position,
                is_primary: true,
                ..
            } => self.pointer_down(*position),
            Event::MouseMove { position }
            | Event::PointerMove {
                position,
                is_primary: true,
                ..
            } => {
                if let Some(last) = self.last_pointer {
                    self.last_pointer = Some(*position);
                    self.pointer_move(f64::from(last.x - position.x));
                }
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            }
            | Event::PointerUp {
                position,
                is_primary: true,
                ..
            } => {
                if self.last_pointer.is_some() {
                    self.pointer_up(*position);
                }
            }
            Event::PointerCancel { .. } => {
                if self.last_pointer.is_some() {
                    self.pointer_cancel();
                }
            }
            _ => {}
        }
        self.drain_events()
    }

    /// Take all undrained messages, oldest first.
    pub fn drain_events(&mut self) -> Vec<TrackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Take the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Bounds minus padding.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.bounds.deflate(self.padding)
    }

    /// Current thumb rectangle, also the drag hit area.
    #[must_use]
    pub fn thumb_rect(&self) -> Rect {
        let content = self.content_rect();
        let margin = self.margin();
        let travel = content.width / 2.0 - margin;
        let offset = (f64::from(travel) * self.ratio) as f32 + margin;
        Rect::new(
            content.x + offset,
            content.y + margin,
            travel.max(0.0),
            2.0f32.mul_add(-margin, content.height).max(0.0),
        )
    }

    /// Thumb color interpolated between the endpoint colors.
    #[must_use]
    pub fn hover_color(&self) -> Color {
        self.hover_color_left
            .lerp(&self.hover_color_right, self.ratio)
    }

    fn margin(&self) -> f32 {
        THUMB_MARGIN_DP * self.density
    }

    fn track_width(&self) -> f64 {
        f64::from(self.bounds.width)
    }

    /// Whether the content is large enough to hold a thumb.
    fn has_thumb_room(&self) -> bool {
        let content = self.content_rect();
        let margin = self.margin();
        content.width > 2.0 * margin && content.height > 2.0 * margin
    }

    fn ratio_at(&self, x: f32) -> f64 {
        let width = self.track_width();
        let x = f64::from(x - self.bounds.x);
        if width <= 0.0 || !x.is_finite() {
            self.ratio
        } else {
            (x / width).clamp(0.0, 1.0)
        }
    }

    fn finish_gesture(&mut self, release: f64) {
        let side = Side::snap(release);
        self.move_to(side.ratio(), true);

        let was_dragging = std::mem::take(&mut self.dragging);
        self.last_pointer = None;
        if was_dragging {
            self.events.push(TrackEvent::DragFinished);
        }
        debug!(release, ?side, was_dragging, "gesture snapped");
        self.events.push(match side {
            Side::Left => TrackEvent::SnappedLeft,
            Side::Right => TrackEvent::SnappedRight,
        });
    }

    /// Infallible entry for internally computed ratios, which are clamped.
    fn move_to(&mut self, value: f64, animate: bool) {
        let value = value.clamp(0.0, 1.0);
        if animate {
            self.animation = Some(RatioTween::new(
                self.ratio,
                value,
                self.clock,
                self.animation_duration,
            ));
            self.step_animation();
        } else {
            self.animation = None;
            self.apply_ratio(value);
        }
    }

    fn step_animation(&mut self) {
        let Some(tween) = self.animation else {
            return;
        };
        if tween.is_complete_at(self.clock) {
            self.animation = None;
        }
        self.apply_ratio(tween.value_at(self.clock));
    }

    fn apply_ratio(&mut self, value: f64) {
        let value = value.clamp(0.0, 1.0);
        if value != self.ratio {
            self.ratio = value;
            trace!(ratio = value, "ratio changed");
            self.events.push(TrackEvent::RatioChanged { ratio: value });
            self.redraw_requested = true;
        }
    }
}

/// Fill a pill shape: two end circles joined by a rectangle.
pub fn fill_capsule(canvas: &mut dyn Canvas, rect: Rect, color: Color) {
    let radius = rect.height / 2.0;
    let center_y = rect.y + radius;
    let left_cx = rect.x + radius;
    let right_cx = rect.right() - radius;

    canvas.fill_circle(Point::new(left_cx, center_y), radius, color);
    canvas.fill_circle(Point::new(right_cx, center_y), radius, color);
    if right_cx > left_cx {
        canvas.fill_rect(Rect::from_edges(left_cx, rect.y, right_cx, rect.bottom()), color);
    }
}

const TRACK_ASSERTIONS: &[BrickAssertion] = &[
    BrickAssertion::RatioInRange,
    BrickAssertion::ThumbWithinTrack,
    BrickAssertion::MaxLatencyMs(16),
];

impl Brick for HoverTrack {
    fn brick_name(&self) -> &'static str {
        "HoverTrack"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        TRACK_ASSERTIONS
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        let content = self.content_rect();
        let thumb = self.thumb_rect();
        BrickVerification::builder()
            .check(
                BrickAssertion::RatioInRange,
                (0.0..=1.0).contains(&self.ratio),
                || format!("ratio {} outside [0, 1]", self.ratio),
            )
            .check(
                BrickAssertion::ThumbWithinTrack,
                !self.has_thumb_room() || content.contains_rect(&thumb),
                || format!("thumb {thumb:?} outside content {content:?}"),
            )
            .check(BrickAssertion::MaxLatencyMs(16), true, String::new)
            .finish()
    }
}

impl Widget for HoverTrack {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(
            PREFERRED_WIDTH_DP * self.density,
            PREFERRED_HEIGHT_DP * self.density,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        fill_capsule(canvas, self.content_rect(), self.track_color);
        if self.has_thumb_room() {
            fill_capsule(canvas, self.thumb_rect(), self.hover_color());
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let events = self.handle_event(event);
        if events.is_empty() {
            None
        } else {
            Some(Box::new(events))
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
