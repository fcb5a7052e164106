//! The diagonal band of light that sweeps across the panel interior.

use std::time::Duration;

use crate::animation::{Animatable, Period, Repeat, Timeline, TimelineStep, TimingFunction};
use crate::layout::Size;
use crate::renderer::types::LinearGradient;
use crate::widgets::{Color, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPhase {
    /// Progress moves from 0 to 1
    Running,
    /// The last cycle just completed; the next tick starts a new one
    Restarting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStep {
    /// Not running; nothing changed
    Idle,
    Advanced,
    /// Progress reached 1 and was reset to 0
    Completed,
    /// A fresh cycle was armed and advanced
    Restarted,
}

/// One-shot 0→1 progress that re-arms itself after every completion.
///
/// Leftover time from the tick that completes a cycle is dropped; the next
/// cycle starts counting from the following tick.
#[derive(Debug, Clone)]
pub struct SweepAnimator {
    timeline: Timeline,
    phase: SweepPhase,
    cycles: u64,
}

impl SweepAnimator {
    pub fn new(period: Period, timing: TimingFunction) -> Self {
        Self {
            timeline: Timeline::new(period, Repeat::Once).timing(timing),
            phase: SweepPhase::Running,
            cycles: 0,
        }
    }

    pub fn start(&mut self) {
        self.phase = SweepPhase::Running;
        self.timeline.start();
    }

    pub fn cancel(&mut self) {
        self.timeline.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    /// Number of cycles started after the first one.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn tick(&mut self, elapsed: Duration) -> SweepStep {
        if !self.timeline.is_running() {
            return SweepStep::Idle;
        }

        match self.phase {
            SweepPhase::Restarting => {
                self.phase = SweepPhase::Running;
                self.cycles += 1;
                log::trace!("Sweep cycle {} started", self.cycles);
                match self.timeline.advance(elapsed) {
                    // A tick as long as the period completes the fresh cycle too
                    TimelineStep::Finished => self.complete_cycle(),
                    _ => SweepStep::Restarted,
                }
            }
            SweepPhase::Running => match self.timeline.advance(elapsed) {
                TimelineStep::Idle => SweepStep::Idle,
                TimelineStep::Advanced => SweepStep::Advanced,
                TimelineStep::Finished => self.complete_cycle(),
            },
        }
    }

    /// Reset progress to 0 and re-arm for the next tick.
    fn complete_cycle(&mut self) -> SweepStep {
        self.timeline.start();
        self.phase = SweepPhase::Restarting;
        SweepStep::Completed
    }

    /// Progress in [0, 1] within the current cycle.
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }
}

/// Everything needed to paint the sweep for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFrame {
    pub progress: f32,
    pub band_half_width: f32,
    /// Center of the band on the diagonal
    pub point: Point,
    pub gradient: LinearGradient,
    /// Area filled with the gradient before clipping: the whole panel
    pub rect: Rect,
}

impl SweepFrame {
    pub fn compute(progress: f32, size: Size, band_half_width: f32, color: Color) -> Self {
        let bw = band_half_width;
        let from = Point::new(-bw, -bw);
        let to = Point::new(size.width + bw, size.height + bw);
        let point = Point::lerp(&from, &to, progress);

        let gradient = LinearGradient::band(
            Point::new(point.x - bw, point.y - bw),
            Point::new(point.x + bw, point.y + bw),
            Color::TRANSPARENT,
            color,
        );

        Self {
            progress,
            band_half_width: bw,
            point,
            gradient,
            rect: Rect::from_size(size),
        }
    }
}
