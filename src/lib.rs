pub mod animation;
pub mod error;
pub mod layout;
pub mod reactive;
pub mod renderer;
pub mod transform;
pub mod widgets;

use std::time::Duration;

use layout::Constraints;
use reactive::{
    clear_animation_flag, request_animation_frame, reset_invalidation, take_frame_request,
    with_app_state, with_app_state_mut,
};
use renderer::commands::DrawCommand;
use renderer::PaintContext;
use transform::Transform;
use widgets::{Color, Widget};

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::animation::{Period, TimingFunction};
    pub use crate::error::{Error, Result};
    pub use crate::layout::{Constraints, Size};
    pub use crate::renderer::commands::DrawCommand;
    pub use crate::renderer::PaintContext;
    pub use crate::widgets::glass_panel::{
        glass_panel, Corner, CornerRadii, GlassPanel, Lifecycle, PanelConfig,
    };
    pub use crate::widgets::{block, Block, Color, Point, Rect, Widget};
    pub use crate::{App, AppConfig, Frame, RunStats};
}

pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    /// Time the frame clock advances per frame
    pub frame_interval: Duration,
    pub background_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 240,
            frame_interval: Duration::from_millis(16),
            background_color: Color::rgb(0.1, 0.1, 0.15),
        }
    }
}

/// One painted frame handed to the frame callback.
pub struct Frame<'a> {
    /// Zero-based frame number
    pub index: u64,
    /// Frame clock time at this frame
    pub time: Duration,
    pub background_color: Color,
    pub commands: &'a [DrawCommand],
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Frames the clock advanced through
    pub frames: u64,
    /// Frames that were actually painted
    pub painted_frames: u64,
    /// Draw commands recorded by the last painted frame
    pub last_command_count: usize,
}

/// A callback that gets called each frame before animations advance.
/// Use this to process external events and mutate the widget tree state.
pub type UpdateCallback = Box<dyn FnMut()>;

/// Receives every painted frame, typically to hand it to a renderer.
pub type FrameCallback = Box<dyn FnMut(&Frame)>;

/// Headless host that drives a widget tree from a fixed-step frame clock.
///
/// Each frame: run the update callback, advance animations, lay out if
/// anything asked for it, and paint if a frame was requested. The root is
/// detached when the run ends.
pub struct App {
    config: AppConfig,
    on_update: Option<UpdateCallback>,
    on_frame: Option<FrameCallback>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            on_update: None,
            on_frame: None,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.config.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.config.height = height;
        self
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.config.frame_interval = interval;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self
    }

    pub fn on_update<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Set a callback that receives the draw commands of every painted frame.
    ///
    /// # Example
    /// ```ignore
    /// App::new()
    ///     .on_frame(|frame| println!("{} commands", frame.commands.len()))
    ///     .run(glass_panel().size(200.0, 100.0), 60);
    /// ```
    pub fn on_frame<F: FnMut(&Frame) + 'static>(mut self, callback: F) -> Self {
        self.on_frame = Some(Box::new(callback));
        self
    }

    /// Run `frames` frames of the clock, then detach the root.
    pub fn run<W: Widget>(mut self, mut root: W, frames: u64) -> RunStats {
        let _ = env_logger::try_init();
        reset_invalidation();

        let interval = self.config.frame_interval;
        let constraints = Constraints::new(
            0.0,
            0.0,
            self.config.width as f32,
            self.config.height as f32,
        );

        log::info!(
            "Running {} frames at {}x{}, {:?} per frame",
            frames,
            self.config.width,
            self.config.height,
            interval
        );

        let mut ctx = PaintContext::with_capacity(64);
        let mut stats = RunStats::default();
        let mut time = Duration::ZERO;

        for index in 0..frames {
            if let Some(ref mut callback) = self.on_update {
                callback();
            }

            // The first frame only lays out; animation time starts after it
            if index > 0 {
                time += interval;
                if root.advance_animations(interval) {
                    request_animation_frame();
                } else {
                    clear_animation_flag();
                }
            }

            if with_app_state(|state| state.needs_layout()) {
                root.layout(constraints);
                root.set_origin(0.0, 0.0);
                with_app_state_mut(|state| state.clear_layout_flag());
            }

            let requested = take_frame_request();
            if !requested && !with_app_state(|state| state.needs_paint()) {
                stats.frames += 1;
                continue;
            }

            ctx.clear();
            let origin = root.bounds();
            ctx.push_transform(Transform::translate(origin.x, origin.y));
            root.paint(&mut ctx);
            ctx.pop_transform();
            with_app_state_mut(|state| state.clear_paint_flag());

            if let Some(ref mut callback) = self.on_frame {
                callback(&Frame {
                    index,
                    time,
                    background_color: self.config.background_color,
                    commands: ctx.commands(),
                });
            }

            stats.frames += 1;
            stats.painted_frames += 1;
            stats.last_command_count = ctx.commands().len();
        }

        root.detach();
        log::info!(
            "Run finished: {} frames, {} painted",
            stats.frames,
            stats.painted_frames
        );
        stats
    }

    /// Run long enough for the frame clock to cover `duration`.
    pub fn run_for<W: Widget>(self, root: W, duration: Duration) -> RunStats {
        let interval = self.config.frame_interval.as_secs_f64();
        let frames = if interval > 0.0 {
            (duration.as_secs_f64() / interval).ceil() as u64 + 1
        } else {
            1
        };
        self.run(root, frames)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
