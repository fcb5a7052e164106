//! Shared paint types for the renderer.
//!
//! Gradients are plain values: stops, endpoints and a local transform. They
//! can be rebuilt every frame or compared for caching.

use crate::animation::Animatable;
use crate::transform::Transform;
use crate::widgets::{Color, Point};

/// How a gradient is extended past its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileMode {
    /// Repeat the edge colors
    #[default]
    Clamp,
}

/// A color at a normalized position along a gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient between two points in gradient space.
///
/// `transform` maps gradient space into the space the gradient is painted
/// in, the same role a shader's local matrix plays.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
    pub tile_mode: TileMode,
    pub transform: Transform,
}

impl LinearGradient {
    /// Stops must be sorted by offset.
    pub fn new(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Self {
            start,
            end,
            stops,
            tile_mode: TileMode::Clamp,
            transform: Transform::IDENTITY,
        }
    }

    /// Three-stop band: `edge` at both ends, `center` halfway.
    pub fn band(start: Point, end: Point, edge: Color, center: Color) -> Self {
        Self::new(
            start,
            end,
            vec![
                GradientStop::new(0.0, edge),
                GradientStop::new(0.5, center),
                GradientStop::new(1.0, edge),
            ],
        )
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Start point after the local transform.
    pub fn mapped_start(&self) -> Point {
        self.transform.transform_point(self.start.x, self.start.y).into()
    }

    /// End point after the local transform.
    pub fn mapped_end(&self) -> Point {
        self.transform.transform_point(self.end.x, self.end.y).into()
    }

    /// Position of `point` along the gradient axis, 0 at `start` and 1 at
    /// `end`. Not clamped.
    pub fn position_at(&self, point: Point) -> f32 {
        let (x, y) = self.transform.inverse().transform_point(point.x, point.y);
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f32::EPSILON {
            return 0.0;
        }
        ((x - self.start.x) * dx + (y - self.start.y) * dy) / len_sq
    }

    /// Color the gradient paints at `point`.
    pub fn color_at(&self, point: Point) -> Color {
        let t = match self.tile_mode {
            TileMode::Clamp => self.position_at(point).clamp(0.0, 1.0),
        };
        self.sample(t)
    }

    /// Color at normalized position `t` along the stops.
    pub fn sample(&self, t: f32) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                return Color::lerp(&a.color, &b.color, local);
            }
        }
        last.color
    }
}

/// What a fill or stroke is painted with
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    Linear(LinearGradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<LinearGradient> for Brush {
    fn from(gradient: LinearGradient) -> Self {
        Brush::Linear(gradient)
    }
}
