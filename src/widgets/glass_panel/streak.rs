//! The bright highlight that travels around the panel border.

use std::time::Duration;

use crate::animation::{Period, Repeat, Timeline, TimelineStep, TimingFunction};
use crate::layout::Size;
use crate::renderer::types::LinearGradient;
use crate::transform::Transform;
use crate::widgets::{Color, Point};

/// Repeating 0→1 progress for the border streak.
///
/// Has a single running state; each cycle wraps straight into the next for as
/// long as the panel is attached.
#[derive(Debug, Clone)]
pub struct StreakAnimator {
    timeline: Timeline,
}

impl StreakAnimator {
    pub fn new(period: Period, timing: TimingFunction) -> Self {
        Self {
            timeline: Timeline::new(period, Repeat::Forever).timing(timing),
        }
    }

    pub fn start(&mut self) {
        self.timeline.start();
    }

    pub fn cancel(&mut self) {
        self.timeline.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    /// Advance by one frame. Returns true if progress changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.timeline.advance(elapsed) != TimelineStep::Idle
    }

    /// Progress in [0, 1).
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }
}

/// Everything needed to stroke the streak for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StreakFrame {
    pub progress: f32,
    /// `progress * 360`, in degrees
    pub angle: f32,
    /// Offset of the gradient from the panel center
    pub offset: Point,
    /// Local matrix of the gradient
    pub matrix: Transform,
    /// Gradient with `matrix` applied, ready to use as the stroke brush
    pub gradient: LinearGradient,
}

impl StreakFrame {
    /// `radius` is the half-diagonal of the panel.
    pub fn compute(progress: f32, size: Size, radius: f32, color: Color) -> Self {
        let angle = progress * 360.0;
        let radians = angle.to_radians();
        let offset = Point::new(radius * radians.cos(), radius * radians.sin());

        let center_x = size.width / 2.0;
        let center_y = size.height / 2.0;
        let matrix = Transform::translate(offset.x + center_x, offset.y + center_y)
            .post_rotate(angle + 45.0, center_x, center_y);

        // Runs along the diagonal from (-w, -h) to the origin; the matrix
        // carries it around the perimeter.
        let gradient = LinearGradient::band(
            Point::new(-size.width, -size.height),
            Point::new(0.0, 0.0),
            Color::TRANSPARENT,
            color,
        )
        .with_transform(matrix);

        Self {
            progress,
            angle,
            offset,
            matrix,
            gradient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    fn running() -> StreakAnimator {
        let mut streak = StreakAnimator::new(Period::DEFAULT, TimingFunction::Linear);
        streak.start();
        streak
    }

    #[test]
    fn test_progress_wraps_forever() {
        let mut streak = running();

        assert!(streak.tick(Duration::from_millis(2500)));
        assert!(approx_eq(streak.progress(), 0.5));

        streak.tick(Duration::from_millis(3000));
        assert!(approx_eq(streak.progress(), 0.1));
        assert!(streak.is_running());
    }

    #[test]
    fn test_cancelled_streak_does_not_tick() {
        let mut streak = running();
        streak.cancel();
        assert!(!streak.tick(Duration::from_millis(16)));
        assert_eq!(streak.progress(), 0.0);
    }

    #[test]
    fn test_angle_at_half_period() {
        let frame = StreakFrame::compute(0.5, Size::new(200.0, 100.0), 111.8034, Color::WHITE);

        assert!(approx_eq(frame.angle, 180.0));
        assert!(approx_eq(frame.matrix.rotation_degrees(), 225.0));
        assert!(approx_eq(frame.offset.x, -111.8034));
        assert!(approx_eq(frame.offset.y, 0.0));
    }

    #[test]
    fn test_angle_range() {
        for i in 0..100 {
            let progress = i as f32 / 100.0;
            let frame = StreakFrame::compute(progress, Size::new(10.0, 10.0), 7.07, Color::WHITE);
            assert!(frame.angle >= 0.0 && frame.angle < 360.0);
        }

        let end = StreakFrame::compute(0.9999, Size::new(10.0, 10.0), 7.07, Color::WHITE);
        assert!(end.angle < 360.0);
        assert!(approx_eq(end.angle, 359.964));
    }

    #[test]
    fn test_gradient_is_white_at_midpoint() {
        let frame = StreakFrame::compute(0.25, Size::new(200.0, 100.0), 111.8034, Color::WHITE);
        let mid = frame.matrix.transform_point(-100.0, -50.0);
        let color = frame.gradient.color_at(mid.into());
        assert!(approx_eq(color.a, 1.0));

        // Clamped to transparent beyond both ends
        let before = frame.matrix.transform_point(-400.0, -200.0);
        let after = frame.matrix.transform_point(200.0, 100.0);
        assert_eq!(frame.gradient.color_at(before.into()).a, 0.0);
        assert_eq!(frame.gradient.color_at(after.into()).a, 0.0);
    }

    #[test]
    fn test_gradient_endpoints_follow_matrix() {
        let frame = StreakFrame::compute(0.0, Size::new(200.0, 100.0), 111.8034, Color::WHITE);
        let end = frame.gradient.mapped_end();
        let (x, y) = frame.matrix.transform_point(0.0, 0.0);
        assert_eq!(end, Point::new(x, y));
    }
}
