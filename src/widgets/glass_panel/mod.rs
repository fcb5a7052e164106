//! Frosted glass panel.
//!
//! A container that paints a translucent rounded backdrop, a streak of light
//! circling its border and a diagonal band sweeping across its interior, then
//! draws its children centered on top.
//!
//! The panel owns no timers. The host's frame clock drives it through
//! [`Widget::advance_animations`] (or the individual [`GlassPanel::tick_streak`]
//! and [`GlassPanel::tick_sweep`]), and every frame is derived from the current
//! size, radii and the two progress values.
//!
//! # Example
//!
//! ```ignore
//! use frosted::prelude::*;
//!
//! let panel = glass_panel()
//!     .size(200.0, 100.0)
//!     .corner_radii(24.0, 24.0, 8.0, 8.0)
//!     .child(block(120.0, 40.0, Color::WHITE));
//! ```

mod compositor;
mod geometry;
mod streak;
mod sweep;

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::animation::{Period, TimingFunction};
use crate::error::Result;
use crate::layout::{Center, Constraints, Size};
use crate::reactive::{request_animation_frame, ChangeFlags, WidgetId};
use crate::renderer::PaintContext;

use super::widget::{Color, Point, Rect, Widget};

pub use compositor::Compositor;
pub use geometry::{Corner, CornerRadii, DerivedCache, PanelGeometry};
pub use streak::{StreakAnimator, StreakFrame};
pub use sweep::{SweepAnimator, SweepFrame, SweepPhase, SweepStep};

/// Width of the stroked border, also the inset of the outline.
pub const BORDER_WIDTH: f32 = 4.0;
pub const DEFAULT_CORNER_RADIUS: f32 = 16.0;
pub const DEFAULT_PERIOD_MS: f32 = 5000.0;
/// Black at ~10% opacity
pub const FILL_COLOR: Color = Color::from_argb8(25, 0, 0, 0);
/// White at ~10% opacity
pub const BORDER_COLOR: Color = Color::from_argb8(25, 255, 255, 255);
pub const STREAK_COLOR: Color = Color::WHITE;
/// White at 12.5% opacity
pub const SWEEP_COLOR: Color = Color::from_argb8(32, 255, 255, 255);

/// Colors of the four layers. Fixed for every panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub fill: Color,
    pub border: Color,
    /// Center color of the streak gradient
    pub streak: Color,
    /// Center color of the sweep band
    pub sweep: Color,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            fill: FILL_COLOR,
            border: BORDER_COLOR,
            streak: STREAK_COLOR,
            sweep: SWEEP_COLOR,
        }
    }
}

/// Panel settings that can be chosen up front.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub radii: CornerRadii,
    pub streak_period: Period,
    pub sweep_period: Period,
    /// Easing applied to both animations
    pub timing: TimingFunction,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            radii: CornerRadii::default(),
            streak_period: Period::DEFAULT,
            sweep_period: Period::DEFAULT,
            timing: TimingFunction::Linear,
        }
    }
}

impl PanelConfig {
    pub fn radii(mut self, radii: CornerRadii) -> Self {
        self.radii = radii;
        self
    }

    pub fn streak_period(mut self, period: Period) -> Self {
        self.streak_period = period;
        self
    }

    pub fn sweep_period(mut self, period: Period) -> Self {
        self.sweep_period = period;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.radii.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, no size seen yet
    Uninitialized,
    /// Laid out at least once; animators are running
    Initialized,
    /// Removed from the window; animators released. Terminal.
    Detached,
}

/// Everything drawn for one frame, derived from size, radii and progress.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame {
    pub size: Size,
    pub geometry: PanelGeometry,
    pub streak: StreakFrame,
    pub sweep: SweepFrame,
    pub style: PanelStyle,
}

pub type BackdropSetup = Box<dyn FnOnce()>;

pub struct GlassPanel {
    widget_id: WidgetId,
    dirty_flags: Cell<ChangeFlags>,
    config: PanelConfig,
    style: PanelStyle,
    origin: Point,
    size: Size,
    /// Size requested by the host; `None` fills the constraints
    fixed_size: Option<Size>,
    lifecycle: Lifecycle,
    geometry: RefCell<Option<PanelGeometry>>,
    cache: Cell<DerivedCache>,
    streak: Option<StreakAnimator>,
    sweep: Option<SweepAnimator>,
    children: Vec<Box<dyn Widget>>,
    layout: Center,
    on_backdrop_setup: Option<BackdropSetup>,
}

impl GlassPanel {
    pub fn new() -> Self {
        Self {
            widget_id: WidgetId::next(),
            dirty_flags: Cell::new(ChangeFlags::all()),
            config: PanelConfig::default(),
            style: PanelStyle::default(),
            origin: Point::default(),
            size: Size::zero(),
            fixed_size: None,
            lifecycle: Lifecycle::Uninitialized,
            geometry: RefCell::new(None),
            cache: Cell::new(DerivedCache::default()),
            streak: None,
            sweep: None,
            children: Vec::new(),
            layout: Center::new(),
            on_backdrop_setup: None,
        }
    }

    /// Create a panel from a validated configuration.
    pub fn with_config(config: PanelConfig) -> Result<Self> {
        config.validate()?;
        let mut panel = Self::new();
        panel.config = config;
        Ok(panel)
    }

    // Builder methods

    /// Fixed panel size. Without one the panel takes the largest size its
    /// constraints allow.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.fixed_size = Some(Size::new(width, height));
        self
    }

    pub fn corner_radii(
        mut self,
        top_left: f32,
        top_right: f32,
        bottom_left: f32,
        bottom_right: f32,
    ) -> Self {
        self.set_corner_radii(top_left, top_right, bottom_left, bottom_right);
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Called once when the panel first receives a size, before the animators
    /// start. Hosts use it to enable a platform backdrop blur.
    pub fn on_backdrop_setup(mut self, setup: impl FnOnce() + 'static) -> Self {
        self.on_backdrop_setup = Some(Box::new(setup));
        self
    }

    // Radius accessors

    pub fn top_left_radius(&self) -> f32 {
        self.config.radii.top_left
    }

    pub fn top_right_radius(&self) -> f32 {
        self.config.radii.top_right
    }

    pub fn bottom_left_radius(&self) -> f32 {
        self.config.radii.bottom_left
    }

    pub fn bottom_right_radius(&self) -> f32 {
        self.config.radii.bottom_right
    }

    pub fn radius(&self, corner: Corner) -> f32 {
        self.config.radii.get(corner)
    }

    /// Legacy single radius: reports the top-left corner.
    pub fn corner_radius(&self) -> f32 {
        self.config.radii.top_left
    }

    pub fn set_top_left_radius(&mut self, radius: f32) {
        self.set_radius(Corner::TopLeft, radius);
    }

    pub fn set_top_right_radius(&mut self, radius: f32) {
        self.set_radius(Corner::TopRight, radius);
    }

    pub fn set_bottom_left_radius(&mut self, radius: f32) {
        self.set_radius(Corner::BottomLeft, radius);
    }

    pub fn set_bottom_right_radius(&mut self, radius: f32) {
        self.set_radius(Corner::BottomRight, radius);
    }

    /// Set one corner. Negative or non-finite values are stored as 0.
    pub fn set_radius(&mut self, corner: Corner, radius: f32) {
        let radius = sanitize_radius(corner, radius);
        self.config.radii.set(corner, radius);
        self.invalidate_geometry();
    }

    pub fn set_corner_radii(
        &mut self,
        top_left: f32,
        top_right: f32,
        bottom_left: f32,
        bottom_right: f32,
    ) {
        self.config.radii = CornerRadii {
            top_left: sanitize_radius(Corner::TopLeft, top_left),
            top_right: sanitize_radius(Corner::TopRight, top_right),
            bottom_left: sanitize_radius(Corner::BottomLeft, bottom_left),
            bottom_right: sanitize_radius(Corner::BottomRight, bottom_right),
        };
        self.invalidate_geometry();
    }

    /// Legacy uniform setter. Ignores negative values.
    pub fn set_corner_radius(&mut self, radius: f32) {
        if !(radius.is_finite() && radius >= 0.0) {
            log::debug!("Ignoring corner radius {}", radius);
            return;
        }
        self.config.radii = CornerRadii::uniform(radius);
        self.invalidate_geometry();
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    pub fn id(&self) -> WidgetId {
        self.widget_id
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn current_size(&self) -> Size {
        self.size
    }

    pub fn derived(&self) -> DerivedCache {
        self.cache.get()
    }

    pub fn needs_paint(&self) -> bool {
        self.dirty_flags.get().contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    /// New bounds from the host. Takes effect immediately and on every
    /// later layout.
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        self.fixed_size = Some(size);
        self.apply_size(size);
        self.widget_id.request_layout();
    }

    // Animation

    /// Advance the border streak. Returns true if its progress changed.
    pub fn tick_streak(&mut self, elapsed: Duration) -> bool {
        let changed = self
            .streak
            .as_mut()
            .is_some_and(|streak| streak.tick(elapsed));
        if changed {
            self.request_paint();
        }
        changed
    }

    /// Advance the refresh sweep, restarting it after each completed cycle.
    pub fn tick_sweep(&mut self, elapsed: Duration) -> SweepStep {
        let step = self
            .sweep
            .as_mut()
            .map_or(SweepStep::Idle, |sweep| sweep.tick(elapsed));
        if step != SweepStep::Idle {
            self.request_paint();
        }
        step
    }

    pub fn streak_progress(&self) -> f32 {
        self.streak.as_ref().map_or(0.0, StreakAnimator::progress)
    }

    pub fn sweep_progress(&self) -> f32 {
        self.sweep.as_ref().map_or(0.0, SweepAnimator::progress)
    }

    pub fn sweep_cycles(&self) -> u64 {
        self.sweep.as_ref().map_or(0, SweepAnimator::cycles)
    }

    /// Number of animators still holding a running timeline.
    pub fn active_animators(&self) -> usize {
        let streak = self.streak.as_ref().is_some_and(StreakAnimator::is_running);
        let sweep = self.sweep.as_ref().is_some_and(SweepAnimator::is_running);
        usize::from(streak) + usize::from(sweep)
    }

    /// Derive this frame's drawing parameters. `None` when the panel has no
    /// area.
    pub fn frame(&self) -> Option<PanelFrame> {
        let size = self.size;
        if size.is_empty() {
            return None;
        }

        let mut flags = self.dirty_flags.get();
        let mut geometry = self.geometry.borrow_mut();
        if flags.contains(ChangeFlags::NEEDS_GEOMETRY) || geometry.is_none() {
            *geometry = Some(PanelGeometry::build(size, &self.config.radii, BORDER_WIDTH));
            flags.remove(ChangeFlags::NEEDS_GEOMETRY);
            self.dirty_flags.set(flags);
        }
        let geometry = geometry.clone()?;

        let mut cache = self.cache.get();
        cache.ensure(size);
        self.cache.set(cache);

        Some(PanelFrame {
            size,
            geometry,
            streak: StreakFrame::compute(
                self.streak_progress(),
                size,
                cache.streak_radius,
                self.style.streak,
            ),
            sweep: SweepFrame::compute(
                self.sweep_progress(),
                size,
                cache.band_half_width,
                self.style.sweep,
            ),
            style: self.style,
        })
    }

    fn apply_size(&mut self, size: Size) {
        if size == self.size {
            return;
        }
        log::debug!(
            "Glass panel {} resized to {}x{}",
            self.widget_id.as_u64(),
            size.width,
            size.height
        );
        self.size = size;
        let mut cache = self.cache.get();
        cache.reset();
        self.cache.set(cache);
        self.invalidate_geometry();
    }

    fn initialize(&mut self) {
        if let Some(setup) = self.on_backdrop_setup.take() {
            setup();
        }

        let timing = &self.config.timing;
        let mut streak = StreakAnimator::new(self.config.streak_period, timing.clone());
        let mut sweep = SweepAnimator::new(self.config.sweep_period, timing.clone());
        streak.start();
        sweep.start();
        self.streak = Some(streak);
        self.sweep = Some(sweep);
        self.lifecycle = Lifecycle::Initialized;

        log::debug!(
            "Glass panel {} initialized at {}x{}; animators started",
            self.widget_id.as_u64(),
            self.size.width,
            self.size.height
        );
        request_animation_frame();
    }

    fn invalidate_geometry(&mut self) {
        let flags = self.dirty_flags.get() | ChangeFlags::NEEDS_GEOMETRY;
        self.dirty_flags.set(flags);
        self.request_paint();
    }

    fn request_paint(&self) {
        let flags = self.dirty_flags.get() | ChangeFlags::NEEDS_PAINT;
        self.dirty_flags.set(flags);
        self.widget_id.request_paint();
    }
}

impl Default for GlassPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for GlassPanel {
    fn advance_animations(&mut self, elapsed: Duration) -> bool {
        let mut any_active = false;
        for child in &mut self.children {
            any_active |= child.advance_animations(elapsed);
        }

        if self.lifecycle != Lifecycle::Initialized {
            return any_active;
        }

        self.tick_streak(elapsed);
        self.tick_sweep(elapsed);
        any_active || self.active_animators() > 0
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = match self.fixed_size {
            Some(size) => constraints.constrain(size),
            None => constraints.biggest_finite(),
        };
        self.apply_size(size);
        self.layout.layout(&mut self.children, size);

        let mut flags = self.dirty_flags.get();
        flags.remove(ChangeFlags::NEEDS_LAYOUT);
        self.dirty_flags.set(flags);

        if self.lifecycle == Lifecycle::Uninitialized {
            self.initialize();
        }
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = Point::new(x, y);
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.size.width, self.size.height)
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let mut flags = self.dirty_flags.get();
        flags.remove(ChangeFlags::NEEDS_PAINT);
        self.dirty_flags.set(flags);

        let Some(frame) = self.frame() else {
            return;
        };
        Compositor::paint(&frame, &self.children, ctx);
    }

    fn detach(&mut self) {
        if self.lifecycle == Lifecycle::Detached {
            return;
        }
        if let Some(mut streak) = self.streak.take() {
            streak.cancel();
        }
        if let Some(mut sweep) = self.sweep.take() {
            sweep.cancel();
        }
        for child in &mut self.children {
            child.detach();
        }
        self.lifecycle = Lifecycle::Detached;
        log::debug!(
            "Glass panel {} detached; animators cancelled",
            self.widget_id.as_u64()
        );
    }
}

fn sanitize_radius(corner: Corner, radius: f32) -> f32 {
    if radius.is_finite() && radius >= 0.0 {
        radius
    } else {
        log::warn!("{:?} corner radius {} is invalid, using 0", corner, radius);
        0.0
    }
}

/// Create a new glass panel with default radii and periods.
pub fn glass_panel() -> GlassPanel {
    GlassPanel::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::reactive::{reset_invalidation, take_frame_request};
    use crate::widgets::{block, Block};

    fn laid_out(width: f32, height: f32) -> GlassPanel {
        let mut panel = glass_panel().size(width, height);
        panel.layout(Constraints::loose(Size::new(1000.0, 1000.0)));
        panel
    }

    #[test]
    fn test_first_layout_initializes_once() {
        let calls = std::rc::Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut panel = glass_panel()
            .size(200.0, 100.0)
            .on_backdrop_setup(move || counter.set(counter.get() + 1));
        assert_eq!(panel.lifecycle(), Lifecycle::Uninitialized);
        assert_eq!(panel.active_animators(), 0);

        panel.layout(Constraints::loose(Size::new(400.0, 400.0)));
        panel.layout(Constraints::loose(Size::new(400.0, 400.0)));

        assert_eq!(panel.lifecycle(), Lifecycle::Initialized);
        assert_eq!(panel.active_animators(), 2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_ticks_before_layout_do_nothing() {
        let mut panel = glass_panel().size(200.0, 100.0);
        assert!(!panel.advance_animations(Duration::from_millis(100)));
        assert_eq!(panel.streak_progress(), 0.0);
    }

    #[test]
    fn test_detach_releases_animators() {
        let mut panel = laid_out(200.0, 100.0);
        panel.detach();

        assert_eq!(panel.lifecycle(), Lifecycle::Detached);
        assert_eq!(panel.active_animators(), 0);

        reset_invalidation();
        assert!(!panel.advance_animations(Duration::from_millis(16)));
        assert!(!panel.tick_streak(Duration::from_millis(16)));
        assert_eq!(panel.tick_sweep(Duration::from_millis(16)), SweepStep::Idle);
        assert!(!take_frame_request());

        // Detached is terminal
        panel.layout(Constraints::loose(Size::new(400.0, 400.0)));
        assert_eq!(panel.lifecycle(), Lifecycle::Detached);
    }

    #[test]
    fn test_radius_setters() {
        let mut panel = glass_panel();
        panel.set_corner_radii(10.0, 10.0, 10.0, 10.0);
        for corner in Corner::ALL {
            assert_eq!(panel.radius(corner), 10.0);
        }

        panel.set_bottom_left_radius(3.0);
        assert_eq!(panel.bottom_left_radius(), 3.0);
        assert_eq!(panel.top_left_radius(), 10.0);
        assert_eq!(panel.top_right_radius(), 10.0);
        assert_eq!(panel.bottom_right_radius(), 10.0);
    }

    #[test]
    fn test_invalid_radius_becomes_zero() {
        let mut panel = glass_panel();
        panel.set_top_right_radius(-5.0);
        assert_eq!(panel.top_right_radius(), 0.0);

        panel.set_top_left_radius(f32::NAN);
        assert_eq!(panel.top_left_radius(), 0.0);
    }

    #[test]
    fn test_legacy_corner_radius() {
        let mut panel = glass_panel();
        panel.set_corner_radius(8.0);
        assert_eq!(panel.config().radii, CornerRadii::uniform(8.0));
        assert_eq!(panel.corner_radius(), 8.0);

        panel.set_corner_radius(-1.0);
        assert_eq!(panel.config().radii, CornerRadii::uniform(8.0));

        panel.set_top_left_radius(2.0);
        assert_eq!(panel.corner_radius(), 2.0);
    }

    #[test]
    fn test_setter_rebuilds_geometry_and_requests_paint() {
        let mut panel = laid_out(200.0, 100.0);
        let before = panel.frame().unwrap();
        panel.paint(&mut PaintContext::new());
        assert!(!panel.needs_paint());

        reset_invalidation();
        panel.set_top_left_radius(30.0);
        assert!(panel.needs_paint());
        assert!(take_frame_request());

        let after = panel.frame().unwrap();
        assert_eq!(before.geometry.shape.top_left(), 16.0);
        assert_eq!(after.geometry.shape.top_left(), 30.0);
    }

    #[test]
    fn test_resize_resets_cache() {
        let mut panel = laid_out(30.0, 40.0);
        panel.frame();
        assert_eq!(panel.derived().diagonal, 50.0);

        panel.resize(60.0, 80.0);
        assert_eq!(panel.derived(), DerivedCache::default());

        let frame = panel.frame().unwrap();
        assert_eq!(panel.derived().diagonal, 100.0);
        assert_eq!(frame.geometry.inset.right(), 56.0);
    }

    #[test]
    fn test_zero_size_paints_nothing() {
        let mut panel = glass_panel()
            .size(0.0, 100.0)
            .child(block(10.0, 10.0, Color::WHITE));
        panel.layout(Constraints::loose(Size::new(400.0, 400.0)));

        assert_eq!(panel.lifecycle(), Lifecycle::Initialized);
        assert!(panel.frame().is_none());

        let mut ctx = PaintContext::new();
        panel.paint(&mut ctx);
        assert!(ctx.is_empty());
        assert_eq!(panel.derived().diagonal, 0.0);
    }

    #[test]
    fn test_children_are_centered() {
        let mut panel = glass_panel()
            .size(200.0, 100.0)
            .child(Block::new(50.0, 20.0, Color::WHITE));
        panel.layout(Constraints::loose(Size::new(400.0, 400.0)));

        assert_eq!(panel.children()[0].bounds(), Rect::new(75.0, 40.0, 50.0, 20.0));
    }

    #[test]
    fn test_fills_constraints_without_fixed_size() {
        let mut panel = glass_panel();
        let size = panel.layout(Constraints::loose(Size::new(320.0, 240.0)));
        assert_eq!(size, Size::new(320.0, 240.0));
    }

    #[test]
    fn test_custom_timing_drives_both_animators() {
        let config = PanelConfig::default().timing(TimingFunction::custom(|t| t * t));
        let mut panel = GlassPanel::with_config(config).unwrap().size(100.0, 100.0);
        panel.layout(Constraints::loose(Size::new(400.0, 400.0)));
        panel.advance_animations(Duration::from_millis(2500));

        assert!((panel.streak_progress() - 0.25).abs() < 0.001);
        assert!((panel.sweep_progress() - 0.25).abs() < 0.001);
        // The config keeps its own handle to the curve
        assert!(matches!(panel.config().timing, TimingFunction::Custom(_)));
    }

    #[test]
    fn test_with_config_validates() {
        let config = PanelConfig::default().radii(CornerRadii::uniform(-2.0));
        assert!(matches!(
            GlassPanel::with_config(config),
            Err(Error::InvalidRadius {
                corner: Corner::TopLeft,
                ..
            })
        ));

        let config = PanelConfig::default()
            .streak_period(Period::from_millis(1000.0).unwrap())
            .sweep_period(Period::from_millis(2000.0).unwrap());
        let mut panel = GlassPanel::with_config(config).unwrap().size(100.0, 100.0);
        panel.layout(Constraints::loose(Size::new(400.0, 400.0)));
        panel.advance_animations(Duration::from_millis(500));

        assert!((panel.streak_progress() - 0.5).abs() < 0.001);
        assert!((panel.sweep_progress() - 0.25).abs() < 0.001);
    }
}
