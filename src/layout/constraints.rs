#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// True when either dimension is zero or negative; nothing is drawn for such sizes.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl Constraints {
    pub fn new(min_width: f32, min_height: f32, max_width: f32, max_height: f32) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.height, size.width, size.height)
    }

    pub fn loose(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn unbounded() -> Self {
        Self::new(0.0, 0.0, f32::INFINITY, f32::INFINITY)
    }

    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.max(self.min_width).min(self.max_width),
            height: size.height.max(self.min_height).min(self.max_height),
        }
    }

    /// The largest size allowed, with unbounded axes collapsed to the minimum.
    pub fn biggest_finite(&self) -> Size {
        let pick = |min: f32, max: f32| if max.is_finite() { max } else { min };
        Size {
            width: pick(self.min_width, self.max_width),
            height: pick(self.min_height, self.max_height),
        }
    }

    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::zero().is_empty());
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(Size::new(-5.0, 10.0).is_empty());
        assert!(!Size::new(10.0, 10.0).is_empty());
    }

    #[test]
    fn test_constraints_tight() {
        let c = Constraints::tight(Size::new(50.0, 75.0));
        assert_eq!(c.min_width, 50.0);
        assert_eq!(c.max_height, 75.0);
        assert!(c.is_tight());
    }

    #[test]
    fn test_constraints_constrain() {
        let c = Constraints::new(10.0, 20.0, 100.0, 200.0);

        assert_eq!(c.constrain(Size::new(50.0, 50.0)), Size::new(50.0, 50.0));
        assert_eq!(c.constrain(Size::new(5.0, 15.0)), Size::new(10.0, 20.0));
        assert_eq!(c.constrain(Size::new(150.0, 250.0)), Size::new(100.0, 200.0));
    }

    #[test]
    fn test_constraints_biggest_finite() {
        let c = Constraints::new(0.0, 30.0, 200.0, f32::INFINITY);
        assert_eq!(c.biggest_finite(), Size::new(200.0, 30.0));
        assert_eq!(Constraints::unbounded().biggest_finite(), Size::zero());
    }
}
