//! Paint context that records draw commands for a frame.

use super::commands::DrawCommand;
use super::path::Path;
use super::types::Brush;
use crate::transform::Transform;
use crate::widgets::Rect;

/// Records the draw commands widgets issue while painting.
///
/// Widgets draw in local coordinates. Parents position children with
/// `push_transform`/`pop_transform`; clips are intersected with
/// `push_clip`/`pop_clip`. Both stacks are tracked so a widget can assert
/// it left them balanced.
pub struct PaintContext {
    commands: Vec<DrawCommand>,
    /// Composed transforms, one entry per open `push_transform`
    transform_stack: Vec<Transform>,
    clip_depth: usize,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create a new PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
            transform_stack: Vec::with_capacity(4),
            clip_depth: 0,
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack.clear();
        self.clip_depth = 0;
    }

    pub fn fill_path(&mut self, path: &Path, brush: impl Into<Brush>) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush: brush.into(),
        });
    }

    pub fn stroke_path(&mut self, path: &Path, width: f32, brush: impl Into<Brush>) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            width,
            brush: brush.into(),
        });
    }

    pub fn fill_rect(&mut self, rect: Rect, brush: impl Into<Brush>) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            brush: brush.into(),
        });
    }

    /// Push a clip region onto the stack.
    /// Everything drawn until the matching `pop_clip` is confined to `path`.
    pub fn push_clip(&mut self, path: &Path) {
        self.clip_depth += 1;
        self.commands
            .push(DrawCommand::PushClip { path: path.clone() });
    }

    /// Pop a clip region from the stack
    pub fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            log::warn!("pop_clip called without a matching push_clip");
            return;
        }
        self.clip_depth -= 1;
        self.commands.push(DrawCommand::PopClip);
    }

    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Push a transform onto the stack, composed with the current one
    pub fn push_transform(&mut self, transform: Transform) {
        let composed = self.current_transform().then(&transform);
        self.transform_stack.push(composed);
        self.commands.push(DrawCommand::PushTransform(transform));
    }

    /// Pop a transform from the stack
    pub fn pop_transform(&mut self) {
        if self.transform_stack.pop().is_none() {
            log::warn!("pop_transform called without a matching push_transform");
            return;
        }
        self.commands.push(DrawCommand::PopTransform);
    }

    /// Get the current composed transform
    pub fn current_transform(&self) -> Transform {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform::IDENTITY)
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands that put pixels on the surface.
    pub fn paint_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_paint()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Color;

    #[test]
    fn test_records_in_order() {
        let mut ctx = PaintContext::new();
        let path = Path::new();

        ctx.fill_path(&path, Color::BLACK);
        ctx.push_clip(&path);
        ctx.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        ctx.pop_clip();

        assert_eq!(ctx.commands().len(), 4);
        assert!(matches!(ctx.commands()[0], DrawCommand::FillPath { .. }));
        assert!(matches!(ctx.commands()[1], DrawCommand::PushClip { .. }));
        assert!(matches!(ctx.commands()[3], DrawCommand::PopClip));
        assert_eq!(ctx.paint_count(), 2);
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn test_unbalanced_pops_are_ignored() {
        let mut ctx = PaintContext::new();
        ctx.pop_clip();
        ctx.pop_transform();
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_transforms_compose() {
        let mut ctx = PaintContext::new();
        ctx.push_transform(Transform::translate(10.0, 0.0));
        ctx.push_transform(Transform::translate(0.0, 5.0));
        assert_eq!(ctx.current_transform().transform_point(0.0, 0.0), (10.0, 5.0));

        ctx.pop_transform();
        assert_eq!(ctx.current_transform().transform_point(0.0, 0.0), (10.0, 0.0));
    }

    #[test]
    fn test_clear_resets_state() {
        let mut ctx = PaintContext::new();
        ctx.push_clip(&Path::new());
        ctx.push_transform(Transform::translate(1.0, 1.0));
        ctx.clear();

        assert!(ctx.is_empty());
        assert_eq!(ctx.clip_depth(), 0);
        assert!(ctx.current_transform().is_identity());
    }
}
