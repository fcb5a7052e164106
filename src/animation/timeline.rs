//! Host-driven animation progress.
//!
//! A [`Timeline`] owns no timer. The host's frame clock calls
//! [`Timeline::advance`] with the time since the previous frame and the
//! timeline turns the accumulated time into a normalized progress value.

use std::time::Duration;

use super::TimingFunction;
use crate::error::{Error, Result};

/// A validated animation period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period(f32);

impl Period {
    /// Both panel effects complete one cycle every five seconds.
    pub const DEFAULT: Period = Period(5000.0);

    pub fn from_millis(period_ms: f32) -> Result<Self> {
        if period_ms.is_finite() && period_ms > 0.0 {
            Ok(Self(period_ms))
        } else {
            Err(Error::InvalidPeriod { period_ms })
        }
    }

    pub fn as_millis(&self) -> f32 {
        self.0
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What happens when a timeline reaches the end of its period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Stop at progress 1.0
    Once,
    /// Wrap back to 0.0 and keep going
    Forever,
}

/// Result of advancing a timeline by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStep {
    /// The timeline is not running; nothing changed
    Idle,
    /// Progress moved forward (possibly wrapping for `Repeat::Forever`)
    Advanced,
    /// A `Repeat::Once` timeline reached its end and stopped
    Finished,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    period: Period,
    repeat: Repeat,
    timing: TimingFunction,
    /// Milliseconds since the current cycle started
    elapsed_ms: f32,
    running: bool,
}

impl Timeline {
    pub fn new(period: Period, repeat: Repeat) -> Self {
        Self {
            period,
            repeat,
            timing: TimingFunction::Linear,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Start (or restart) from the beginning of a cycle.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.running = true;
    }

    /// Stop without touching the current progress.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Advance by the time elapsed since the previous frame.
    pub fn advance(&mut self, elapsed: Duration) -> TimelineStep {
        if !self.running {
            return TimelineStep::Idle;
        }

        let period_ms = self.period.as_millis();
        let elapsed_ms = self.elapsed_ms + elapsed.as_secs_f32() * 1000.0;

        match self.repeat {
            Repeat::Forever => {
                self.elapsed_ms = elapsed_ms % period_ms;
                TimelineStep::Advanced
            }
            Repeat::Once if elapsed_ms >= period_ms => {
                self.elapsed_ms = period_ms;
                self.running = false;
                TimelineStep::Finished
            }
            Repeat::Once => {
                self.elapsed_ms = elapsed_ms;
                TimelineStep::Advanced
            }
        }
    }

    /// Linear fraction of the cycle that has elapsed.
    /// In [0, 1) for `Repeat::Forever`, in [0, 1] for `Repeat::Once`.
    pub fn linear_progress(&self) -> f32 {
        (self.elapsed_ms / self.period.as_millis()).clamp(0.0, 1.0)
    }

    /// Progress after applying the timing function.
    pub fn progress(&self) -> f32 {
        self.timing.evaluate(self.linear_progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_period_validation() {
        assert!(Period::from_millis(5000.0).is_ok());
        assert_eq!(
            Period::from_millis(0.0),
            Err(Error::InvalidPeriod { period_ms: 0.0 })
        );
        assert!(Period::from_millis(-1.0).is_err());
        assert!(Period::from_millis(f32::NAN).is_err());
        assert!(Period::from_millis(f32::INFINITY).is_err());
        assert_eq!(Period::default().as_millis(), 5000.0);
    }

    #[test]
    fn test_idle_until_started() {
        let mut timeline = Timeline::new(Period::DEFAULT, Repeat::Forever);
        assert_eq!(timeline.advance(ms(100)), TimelineStep::Idle);
        assert_eq!(timeline.progress(), 0.0);

        timeline.start();
        assert_eq!(timeline.advance(ms(100)), TimelineStep::Advanced);
        assert!(timeline.progress() > 0.0);
    }

    #[test]
    fn test_forever_wraps() {
        let mut timeline = Timeline::new(Period::DEFAULT, Repeat::Forever);
        timeline.start();

        timeline.advance(ms(2500));
        assert_eq!(timeline.progress(), 0.5);

        timeline.advance(ms(2500));
        assert_eq!(timeline.progress(), 0.0);
        assert!(timeline.is_running());

        timeline.advance(ms(6250));
        assert_eq!(timeline.progress(), 0.25);
    }

    #[test]
    fn test_once_finishes_at_one() {
        let mut timeline = Timeline::new(Period::DEFAULT, Repeat::Once);
        timeline.start();

        assert_eq!(timeline.advance(ms(4000)), TimelineStep::Advanced);
        assert_eq!(timeline.advance(ms(4000)), TimelineStep::Finished);
        assert_eq!(timeline.progress(), 1.0);
        assert!(!timeline.is_running());

        assert_eq!(timeline.advance(ms(16)), TimelineStep::Idle);
        assert_eq!(timeline.progress(), 1.0);
    }

    #[test]
    fn test_cancel_keeps_progress() {
        let mut timeline = Timeline::new(Period::DEFAULT, Repeat::Forever);
        timeline.start();
        timeline.advance(ms(1000));
        timeline.cancel();

        assert_eq!(timeline.advance(ms(1000)), TimelineStep::Idle);
        assert_eq!(timeline.progress(), 0.2);
    }

    #[test]
    fn test_timing_function_is_applied() {
        let mut timeline =
            Timeline::new(Period::DEFAULT, Repeat::Once).timing(TimingFunction::EaseIn);
        timeline.start();
        timeline.advance(ms(2500));

        assert_eq!(timeline.linear_progress(), 0.5);
        assert_eq!(timeline.progress(), 0.25);
    }
}
