//! Two-choice switcher: a hover track with an icon/label slot over each half.

use crate::hover_track::{HoverTrack, Side, TrackEvent};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use switcher_core::{
    check_ratio, Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color,
    Constraints, Event, LayoutResult, Point, RatioError, Rect, Size, TextStyle, TypeId, Widget,
};
use switcher_yaml::{SlotStyle, SwitcherStyle};
use tracing::{debug, warn};

/// Icon side relative to the label size.
const ICON_SCALE: f32 = 1.5;

/// Notification emitted by a switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwitcherEvent {
    /// The user grabbed the thumb
    UserControlStarted,
    /// The user released the grabbed thumb
    UserControlFinished,
    /// A gesture settled on the left choice
    LeftSelected,
    /// A gesture settled on the right choice
    RightSelected,
}

impl SwitcherEvent {
    /// Map a track message to the notification it produces, if any.
    #[must_use]
    pub const fn from_track(event: TrackEvent) -> Option<Self> {
        match event {
            TrackEvent::RatioChanged { .. } => None,
            TrackEvent::DragStarted => Some(Self::UserControlStarted),
            TrackEvent::DragFinished => Some(Self::UserControlFinished),
            TrackEvent::SnappedLeft => Some(Self::LeftSelected),
            TrackEvent::SnappedRight => Some(Self::RightSelected),
        }
    }
}

/// Callback invoked for every switcher notification.
type Listener = Box<dyn Fn(&SwitcherEvent) + Send + Sync>;

/// Content of one half of the switcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    icon: Option<String>,
    label: String,
    label_size: f32,
}

impl Slot {
    /// Create a slot with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            icon: None,
            label: label.into(),
            label_size: 14.0,
        }
    }

    /// Set the icon source.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the label font size.
    #[must_use]
    pub fn label_size(mut self, size: f32) -> Self {
        self.label_size = size.max(1.0);
        self
    }

    /// Get the label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the icon source.
    #[must_use]
    pub fn icon_source(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect, tint: Color) {
        let size = self.label_size;
        let icon_side = if self.icon.is_some() {
            size * ICON_SCALE
        } else {
            0.0
        };
        let gap = if self.icon.is_some() && !self.label.is_empty() {
            size * 0.5
        } else {
            0.0
        };
        // ~0.6 em per character
        let label_width = self.label.chars().count() as f32 * size * 0.6;

        let center_y = area.center().y;
        let mut x = area.x + (area.width - icon_side - gap - label_width) / 2.0;
        if let Some(icon) = &self.icon {
            let bounds = Rect::new(x, center_y - icon_side / 2.0, icon_side, icon_side);
            canvas.draw_image(icon, bounds, tint);
            x += icon_side + gap;
        }
        if !self.label.is_empty() {
            canvas.draw_text(
                &self.label,
                Point::new(x, center_y - size / 2.0),
                &TextStyle { size, color: tint },
            );
        }
    }
}

impl From<&SlotStyle> for Slot {
    fn from(style: &SlotStyle) -> Self {
        Self {
            icon: style.icon.clone().filter(|icon| !icon.is_empty()),
            label: style.label.clone(),
            label_size: style.label_size,
        }
    }
}

/// Slot tints at `ratio`: the left slot fades from `enabled` to `disabled`
/// as the thumb moves right, the right slot does the opposite.
#[must_use]
pub fn slot_tints(enabled: Color, disabled: Color, ratio: f64) -> (Color, Color) {
    (
        enabled.lerp(&disabled, ratio),
        enabled.lerp(&disabled, 1.0 - ratio),
    )
}

/// Two-choice switcher control.
pub struct SwitcherView {
    track: HoverTrack,
    left: Slot,
    right: Slot,
    enabled_tint: Color,
    disabled_tint: Color,
    left_tint: Color,
    right_tint: Color,
    listeners: Vec<Listener>,
    bounds: Rect,
}

impl fmt::Debug for SwitcherView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitcherView")
            .field("track", &self.track)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("left_tint", &self.left_tint)
            .field("right_tint", &self.right_tint)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl SwitcherView {
    /// Create a switcher with default colors.
    #[must_use]
    pub fn new(left: Slot, right: Slot) -> Self {
        let enabled_tint = Color::WHITE;
        let disabled_tint = Color::BLACK;
        let (left_tint, right_tint) = slot_tints(enabled_tint, disabled_tint, 0.0);
        Self {
            track: HoverTrack::new(),
            left,
            right,
            enabled_tint,
            disabled_tint,
            left_tint,
            right_tint,
            listeners: Vec::new(),
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Build a switcher from a validated style.
    #[must_use]
    pub fn from_style(style: &SwitcherStyle) -> Self {
        let track = HoverTrack::new()
            .track_color(style.track.background)
            .hover_colors(style.track.hover_left, style.track.hover_right)
            .density(style.track.density)
            .padding(style.track.padding);
        Self::new(Slot::from(&style.left), Slot::from(&style.right))
            .track(track)
            .tints(style.tint.enabled, style.tint.disabled)
    }

    /// Replace the hover track, laying it out in the current bounds.
    #[must_use]
    pub fn track(mut self, track: HoverTrack) -> Self {
        self.track = track;
        self.track.layout(self.bounds);
        self.recolor(self.track.ratio());
        self
    }

    /// Set the selected and unselected slot tints.
    #[must_use]
    pub fn tints(mut self, enabled: Color, disabled: Color) -> Self {
        self.enabled_tint = enabled;
        self.disabled_tint = disabled;
        self.recolor(self.track.ratio());
        self
    }

    /// Register a notification listener. Listeners run in registration order.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&SwitcherEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Get the hover track.
    #[must_use]
    pub const fn hover_track(&self) -> &HoverTrack {
        &self.track
    }

    /// Get the current ratio.
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.track.ratio()
    }

    /// Tint currently applied to the left slot.
    #[must_use]
    pub const fn left_tint(&self) -> Color {
        self.left_tint
    }

    /// Tint currently applied to the right slot.
    #[must_use]
    pub const fn right_tint(&self) -> Color {
        self.right_tint
    }

    /// Get the left slot.
    #[must_use]
    pub const fn left_slot(&self) -> &Slot {
        &self.left
    }

    /// Get the right slot.
    #[must_use]
    pub const fn right_slot(&self) -> &Slot {
        &self.right
    }

    /// Animate to the left choice.
    pub fn select_left(&mut self) {
        self.track.animate_to(Side::Left);
        self.process_track_events();
    }

    /// Animate to the right choice.
    pub fn select_right(&mut self) {
        self.track.animate_to(Side::Right);
        self.process_track_events();
    }

    /// Set the ratio on the track.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::OutOfRange`] if `value` is outside [0, 1].
    pub fn set_ratio(&mut self, value: f64, animate: bool) -> Result<(), RatioError> {
        self.track.set_ratio(value, animate)?;
        self.process_track_events();
        Ok(())
    }

    /// Advance animations by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.track.tick(dt);
        self.process_track_events();
    }

    /// Take the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        self.track.take_redraw_request()
    }

    /// Recolor both slots for a new ratio.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::OutOfRange`] if `ratio` is outside [0, 1];
    /// the tints are left untouched.
    pub fn on_ratio_changed(&mut self, ratio: f64) -> Result<(), RatioError> {
        let ratio = check_ratio(ratio)?;
        self.recolor(ratio);
        Ok(())
    }

    fn recolor(&mut self, ratio: f64) {
        (self.left_tint, self.right_tint) =
            slot_tints(self.enabled_tint, self.disabled_tint, ratio);
    }

    fn process_events(&mut self, events: Vec<TrackEvent>) -> Vec<SwitcherEvent> {
        let mut notifications = Vec::new();
        for event in events {
            if let TrackEvent::RatioChanged { ratio } = event {
                if let Err(err) = self.on_ratio_changed(ratio) {
                    warn!(%err, "dropped ratio update");
                }
            }
            if let Some(notification) = SwitcherEvent::from_track(event) {
                debug!(?notification, "switcher notification");
                for listener in &self.listeners {
                    listener(&notification);
                }
                notifications.push(notification);
            }
        }
        notifications
    }

    fn process_track_events(&mut self) -> Vec<SwitcherEvent> {
        let events = self.track.drain_events();
        self.process_events(events)
    }

    fn halves(&self) -> (Rect, Rect) {
        let content = self.track.content_rect();
        let half = content.width / 2.0;
        (
            Rect::new(content.x, content.y, half, content.height),
            Rect::new(content.x + half, content.y, half, content.height),
        )
    }
}

const SWITCHER_ASSERTIONS: &[BrickAssertion] = &[
    BrickAssertion::RatioInRange,
    BrickAssertion::ThumbWithinTrack,
    BrickAssertion::MaxLatencyMs(16),
];

impl Brick for SwitcherView {
    fn brick_name(&self) -> &'static str {
        "SwitcherView"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        SWITCHER_ASSERTIONS
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        self.track.verify()
    }
}

impl Widget for SwitcherView {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.track.measure(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.track.layout(bounds)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if !self.can_render() {
            warn!(ratio = self.ratio(), "switcher failed verification, skipping paint");
            return;
        }
        self.track.paint(canvas);
        let (left_area, right_area) = self.halves();
        self.left.paint(canvas, left_area, self.left_tint);
        self.right.paint(canvas, right_area, self.right_tint);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let events = self.track.handle_event(event);
        let notifications = self.process_events(events);
        if notifications.is_empty() {
            None
        } else {
            Some(Box::new(notifications))
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use switcher_core::{DrawCommand, RecordingCanvas};

    fn laid_out() -> SwitcherView {
        let mut view = SwitcherView::new(Slot::new("List"), Slot::new("Map"));
        view.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
        view
    }

    fn record(view: &mut SwitcherView) -> Arc<Mutex<Vec<SwitcherEvent>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        view.subscribe(move |e| sink.lock().unwrap().push(*e));
        log
    }

    fn settle(view: &mut SwitcherView) {
        for _ in 0..60 {
            view.tick(1.0 / 60.0);
        }
    }

    // ===== Tints =====

    #[test]
    fn test_initial_tints_select_left() {
        let view = laid_out();
        assert_eq!(view.left_tint(), Color::WHITE);
        assert_eq!(view.right_tint(), Color::BLACK);
    }

    #[test]
    fn test_slot_tints_at_endpoints() {
        assert_eq!(
            slot_tints(Color::WHITE, Color::BLACK, 1.0),
            (Color::BLACK, Color::WHITE)
        );
        assert_eq!(
            slot_tints(Color::WHITE, Color::BLACK, 0.0),
            (Color::WHITE, Color::BLACK)
        );
    }

    #[test]
    fn test_slot_tints_midpoint_match() {
        let (left, right) = slot_tints(Color::WHITE, Color::BLACK, 0.5);
        assert_eq!(left, right);
        assert_eq!(left.r, 127);
    }

    #[test]
    fn test_ratio_change_recolors_both_slots() {
        let mut view = laid_out();
        view.set_ratio(0.25, false).unwrap();
        let (left, right) = slot_tints(Color::WHITE, Color::BLACK, 0.25);
        assert_eq!(view.left_tint(), left);
        assert_eq!(view.right_tint(), right);
    }

    #[test]
    fn test_on_ratio_changed_rejects_out_of_range() {
        let mut view = laid_out();
        assert!(view.on_ratio_changed(1.5).is_err());
        assert!(view.on_ratio_changed(f64::NAN).is_err());
        assert_eq!(view.left_tint(), Color::WHITE);

        view.on_ratio_changed(1.0).unwrap();
        assert_eq!(view.left_tint(), Color::BLACK);
        assert_eq!(view.right_tint(), Color::WHITE);
    }

    #[test]
    fn test_set_ratio_error_propagates() {
        let mut view = laid_out();
        assert!(matches!(
            view.set_ratio(-0.5, true),
            Err(RatioError::OutOfRange { .. })
        ));
        assert_eq!(view.ratio(), 0.0);
    }

    #[test]
    fn test_custom_tints_follow_animation() {
        let mut view = laid_out().tints(Color::RED, Color::BLUE);
        assert_eq!(view.left_tint(), Color::RED);
        view.select_right();
        settle(&mut view);
        assert_eq!(view.left_tint(), Color::BLUE);
        assert_eq!(view.right_tint(), Color::RED);
    }

    // ===== Selection =====

    #[test]
    fn test_select_right_then_left_without_notifications() {
        let mut view = laid_out();
        let log = record(&mut view);

        view.select_right();
        assert!(view.hover_track().is_animating());
        settle(&mut view);
        assert_eq!(view.ratio(), 1.0);

        view.select_left();
        settle(&mut view);
        assert_eq!(view.ratio(), 0.0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_select_left_then_right_mid_animation_ends_right() {
        let mut view = laid_out();
        view.set_ratio(0.6, false).unwrap();
        view.select_left();
        view.tick(0.05);
        assert!(view.ratio() < 0.6 && view.ratio() > 0.0);

        view.select_right();
        settle(&mut view);
        assert_eq!(view.ratio(), 1.0);
    }

    #[test]
    fn test_select_left_then_right_back_to_back_ends_right() {
        let mut view = laid_out();
        view.set_ratio(0.6, false).unwrap();
        view.select_left();
        view.select_right();
        settle(&mut view);
        assert_eq!(view.ratio(), 1.0);
        assert!(!view.hover_track().is_animating());
    }

    #[test]
    fn test_stray_cancel_keeps_programmatic_selection() {
        let mut view = laid_out();
        let log = record(&mut view);
        view.set_ratio(1.0, false).unwrap();
        view.select_left();
        view.tick(0.02);

        let msg = view.event(&Event::PointerCancel {
            pointer_id: switcher_core::PointerId(7),
        });
        assert!(msg.is_none());
        settle(&mut view);
        assert_eq!(view.ratio(), 0.0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_track_builder_after_layout_keeps_bounds() {
        let view = laid_out().track(HoverTrack::new().density(2.0));
        assert_eq!(
            view.hover_track().bounds(),
            Rect::new(0.0, 0.0, 200.0, 40.0)
        );
        assert!(view.can_render());
    }

    #[test]
    fn test_tick_requests_redraw() {
        let mut view = laid_out();
        view.select_right();
        assert!(!view.take_redraw_request());
        view.tick(0.05);
        assert!(view.take_redraw_request());
    }

    // ===== Gestures =====

    #[test]
    fn test_drag_notifications_in_order() {
        let mut view = laid_out();
        let log = record(&mut view);

        view.event(&Event::touch_down(Point::new(40.0, 20.0)));
        view.event(&Event::touch_move(Point::new(110.0, 20.0)));
        let msg = view.event(&Event::touch_up(Point::new(110.0, 20.0)));

        let returned = msg.unwrap().downcast::<Vec<SwitcherEvent>>().unwrap();
        assert_eq!(
            *returned,
            vec![SwitcherEvent::UserControlFinished, SwitcherEvent::RightSelected]
        );
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                SwitcherEvent::UserControlStarted,
                SwitcherEvent::UserControlFinished,
                SwitcherEvent::RightSelected,
            ]
        );

        settle(&mut view);
        assert_eq!(view.ratio(), 1.0);
        assert_eq!(view.right_tint(), Color::WHITE);
    }

    #[test]
    fn test_tap_notifies_selection_only() {
        let mut view = laid_out();
        let log = record(&mut view);

        view.event(&Event::touch_down(Point::new(160.0, 20.0)));
        view.event(&Event::touch_up(Point::new(160.0, 20.0)));
        assert_eq!(*log.lock().unwrap(), vec![SwitcherEvent::RightSelected]);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let mut view = laid_out();
        let order = Arc::new(Mutex::new(Vec::new()));
        for id in 0..3 {
            let order = Arc::clone(&order);
            view.subscribe(move |_| order.lock().unwrap().push(id));
        }
        // stray release without a press is ignored
        view.event(&Event::touch_up(Point::new(10.0, 20.0)));
        view.event(&Event::touch_down(Point::new(150.0, 20.0)));
        view.event(&Event::touch_up(Point::new(10.0, 20.0)));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_from_track_mapping() {
        assert_eq!(
            SwitcherEvent::from_track(TrackEvent::RatioChanged { ratio: 0.3 }),
            None
        );
        assert_eq!(
            SwitcherEvent::from_track(TrackEvent::SnappedLeft),
            Some(SwitcherEvent::LeftSelected)
        );
        assert_eq!(
            SwitcherEvent::from_track(TrackEvent::DragStarted),
            Some(SwitcherEvent::UserControlStarted)
        );
    }

    // ===== Painting =====

    #[test]
    fn test_paint_track_then_slots() {
        let view = laid_out();
        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 8);
        let texts: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, style, .. } => Some((content.as_str(), style.color)),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec![("List", Color::WHITE), ("Map", Color::BLACK)]);
    }

    #[test]
    fn test_paint_icons_use_slot_tint() {
        let mut view = SwitcherView::new(
            Slot::new("").icon("ic_list"),
            Slot::new("Map").icon("ic_map"),
        );
        view.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);

        let images: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { source, tint, bounds } => {
                    Some((source.as_str(), *tint, *bounds))
                }
                _ => None,
            })
            .collect();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].0, "ic_list");
        assert_eq!(images[0].1, Color::WHITE);
        assert_eq!(images[1].1, Color::BLACK);
        // icon-only slot is centered in its half
        assert_eq!(images[0].2, Rect::new(39.5, 9.5, 21.0, 21.0));
        assert!(canvas
            .commands()
            .iter()
            .all(|c| !matches!(c, DrawCommand::Text { content, .. } if content.is_empty())));
    }

    // ===== Style =====

    #[test]
    fn test_from_style() {
        let yaml = "track: {background: \"#eeeeee\", density: 2}\ntint: {enabled: \"#ff0000\"}\nleft: {label: A, icon: ic_a}\nright: {label: B}\n";
        let style = SwitcherStyle::from_yaml(yaml).unwrap();
        let view = SwitcherView::from_style(&style);

        assert_eq!(view.left_slot().icon_source(), Some("ic_a"));
        assert_eq!(view.right_slot().label(), "B");
        assert_eq!(view.left_tint(), Color::RED);
        assert_eq!(view.right_tint(), Color::BLACK);
        assert_eq!(view.hover_track().get_density(), 2.0);
        assert_eq!(view.hover_track().get_track_color(), Color::rgb(0xee, 0xee, 0xee));
    }

    #[test]
    fn test_brick_delegates_to_track() {
        let view = laid_out();
        assert!(view.can_render());
        assert_eq!(view.brick_name(), "SwitcherView");
        assert!(view.is_interactive());
        assert_eq!(view.bounds(), Rect::new(0.0, 0.0, 200.0, 40.0));
    }

    #[test]
    fn test_debug_lists_listener_count() {
        let mut view = laid_out();
        view.subscribe(|_| {});
        assert!(format!("{view:?}").contains("listeners: 1"));
    }
}
