use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

use super::widget::{Color, Rect, Widget};

/// A fixed-size rectangle of solid color.
///
/// The simplest possible child content: it asks for its preferred size,
/// accepts whatever the constraints allow, and fills it.
pub struct Block {
    preferred: Size,
    color: Color,
    bounds: Rect,
}

impl Block {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            preferred: Size::new(width, height),
            color,
            bounds: Rect::default(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Widget for Block {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = constraints.constrain(self.preferred);
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, ctx: &mut PaintContext) {
        if self.bounds.size().is_empty() {
            return;
        }
        ctx.fill_rect(Rect::from_size(self.bounds.size()), self.color);
    }
}

/// Create a new block with a preferred size.
pub fn block(width: f32, height: f32, color: Color) -> Block {
    Block::new(width, height, color)
}
