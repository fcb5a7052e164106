//! Errors for panel configuration that can be rejected up front.
//!
//! The per-frame path never fails; only values handed to validating
//! constructors surface here.

use crate::widgets::glass_panel::Corner;

/// Errors returned when building a panel or a timeline from invalid settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An animation period that is zero, negative, or not finite.
    #[error("animation period must be a positive number of milliseconds, got {period_ms}")]
    InvalidPeriod { period_ms: f32 },

    /// A corner radius that is negative or not finite.
    #[error("{corner:?} corner radius must be non-negative, got {value}")]
    InvalidRadius { corner: Corner, value: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
