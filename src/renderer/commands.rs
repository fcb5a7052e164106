//! Draw command definitions.

use super::path::Path;
use super::types::Brush;
use crate::transform::Transform;
use crate::widgets::Rect;

/// A single draw operation in the coordinate space current when recorded.
///
/// Clip and transform commands come in balanced push/pop pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the interior of a closed path.
    FillPath { path: Path, brush: Brush },

    /// Stroke a path centered on its outline.
    StrokePath {
        path: Path,
        /// Stroke width in logical pixels
        width: f32,
        brush: Brush,
    },

    /// Fill an axis-aligned rectangle.
    FillRect { rect: Rect, brush: Brush },

    /// Intersect the current clip with the interior of `path`.
    PushClip { path: Path },

    /// Restore the clip active before the matching `PushClip`.
    PopClip,

    /// Apply `transform` to everything recorded until the matching pop.
    PushTransform(Transform),

    PopTransform,
}

impl DrawCommand {
    /// True for commands that put pixels on the surface.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCommand::FillPath { .. }
                | DrawCommand::StrokePath { .. }
                | DrawCommand::FillRect { .. }
        )
    }

    /// The brush used by a paint command.
    pub fn brush(&self) -> Option<&Brush> {
        match self {
            DrawCommand::FillPath { brush, .. }
            | DrawCommand::StrokePath { brush, .. }
            | DrawCommand::FillRect { brush, .. } => Some(brush),
            _ => None,
        }
    }
}
