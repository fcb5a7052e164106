use super::PanelFrame;
use crate::renderer::PaintContext;
use crate::transform::Transform;
use crate::widgets::Widget;

/// Records a panel frame and its children in paint order:
///
/// 1. fill the outline with the tint
/// 2. stroke the outline with the base border color
/// 3. stroke the outline again with the streak gradient
/// 4. clip to the outline and fill the whole panel with the sweep gradient
/// 5. children, still clipped
///
/// The clip is popped after the children.
pub struct Compositor;

impl Compositor {
    pub fn paint(frame: &PanelFrame, children: &[Box<dyn Widget>], ctx: &mut PaintContext) {
        let outline = &frame.geometry.outline;
        let border_width = frame.geometry.border_width;

        ctx.fill_path(outline, frame.style.fill);
        ctx.stroke_path(outline, border_width, frame.style.border);
        ctx.stroke_path(outline, border_width, frame.streak.gradient.clone());

        ctx.push_clip(frame.geometry.clip());
        ctx.fill_rect(frame.sweep.rect, frame.sweep.gradient.clone());

        for child in children {
            let bounds = child.bounds();
            ctx.push_transform(Transform::translate(bounds.x, bounds.y));
            child.paint(ctx);
            ctx.pop_transform();
        }

        ctx.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Constraints, Size};
    use crate::renderer::commands::DrawCommand;
    use crate::renderer::types::Brush;
    use crate::widgets::glass_panel::{
        CornerRadii, PanelGeometry, PanelStyle, StreakFrame, SweepFrame,
    };
    use crate::widgets::{block, Color};

    fn frame(size: Size) -> PanelFrame {
        let style = PanelStyle::default();
        PanelFrame {
            size,
            geometry: PanelGeometry::build(size, &CornerRadii::default(), 4.0),
            streak: StreakFrame::compute(0.0, size, 111.8, style.streak),
            sweep: SweepFrame::compute(0.0, size, 37.27, style.sweep),
            style,
        }
    }

    #[test]
    fn test_draw_order() {
        let mut ctx = PaintContext::new();
        Compositor::paint(&frame(Size::new(200.0, 100.0)), &[], &mut ctx);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 6);
        assert!(matches!(commands[0], DrawCommand::FillPath { .. }));
        assert!(matches!(commands[1], DrawCommand::StrokePath { width, .. } if width == 4.0));
        assert!(matches!(
            commands[2],
            DrawCommand::StrokePath {
                brush: Brush::Linear(_),
                ..
            }
        ));
        assert!(matches!(commands[3], DrawCommand::PushClip { .. }));
        assert!(matches!(
            commands[4],
            DrawCommand::FillRect {
                brush: Brush::Linear(_),
                ..
            }
        ));
        assert!(matches!(commands[5], DrawCommand::PopClip));
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn test_fill_and_border_colors() {
        let mut ctx = PaintContext::new();
        let frame = frame(Size::new(200.0, 100.0));
        Compositor::paint(&frame, &[], &mut ctx);

        assert_eq!(
            ctx.commands()[0].brush(),
            Some(&Brush::Solid(Color::from_argb8(25, 0, 0, 0)))
        );
        assert_eq!(
            ctx.commands()[1].brush(),
            Some(&Brush::Solid(Color::from_argb8(25, 255, 255, 255)))
        );
    }

    #[test]
    fn test_children_draw_inside_clip() {
        let mut child = block(50.0, 20.0, Color::WHITE);
        child.layout(Constraints::loose(Size::new(200.0, 100.0)));
        child.set_origin(75.0, 40.0);
        let children: Vec<Box<dyn Widget>> = vec![Box::new(child)];

        let mut ctx = PaintContext::new();
        Compositor::paint(&frame(Size::new(200.0, 100.0)), &children, &mut ctx);

        let commands = ctx.commands();
        assert!(matches!(
            commands[5],
            DrawCommand::PushTransform(t) if t == Transform::translate(75.0, 40.0)
        ));
        assert!(matches!(commands[6], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[7], DrawCommand::PopTransform));
        assert!(matches!(commands.last(), Some(DrawCommand::PopClip)));
    }
}
