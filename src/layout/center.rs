//! Layout that centers every child inside the parent bounds.

use super::{Constraints, Size};
use crate::widgets::Widget;

/// Places all children at the center of the parent, stacking them on top of
/// each other. Later children paint on top.
///
/// Children are measured with loose constraints equal to the parent size and
/// positioned at `((parent - child) / 2)` on each axis. A child larger than
/// the parent gets a negative offset and overflows evenly on both sides.
pub struct Center;

impl Center {
    pub fn new() -> Self {
        Self
    }

    /// Measure and position `children` within a parent of `size`.
    /// Child origins are relative to the parent's top-left corner.
    pub fn layout(&mut self, children: &mut [Box<dyn Widget>], size: Size) {
        let constraints = Constraints::loose(size);

        for child in children.iter_mut() {
            let child_size = child.layout(constraints);
            let (x, y) = centered_origin(size, child_size);
            child.set_origin(x, y);
        }
    }
}

impl Default for Center {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-left corner that centers `child` inside `parent`.
pub fn centered_origin(parent: Size, child: Size) -> (f32, f32) {
    (
        (parent.width - child.width) / 2.0,
        (parent.height - child.height) / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_origin() {
        let origin = centered_origin(Size::new(200.0, 100.0), Size::new(50.0, 20.0));
        assert_eq!(origin, (75.0, 40.0));
    }

    #[test]
    fn test_centered_origin_oversized_child() {
        let origin = centered_origin(Size::new(100.0, 100.0), Size::new(140.0, 100.0));
        assert_eq!(origin, (-20.0, 0.0));
    }
}
