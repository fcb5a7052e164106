//! Vector paths and the rounded-rectangle primitive they are built from.
//!
//! Coordinates are y-down. Angles are in degrees, 0 pointing along +x and
//! increasing clockwise on screen, so a positive sweep is a clockwise arc.

use crate::widgets::{Point, Rect};

/// A single path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc continuing from the current point.
    ArcTo {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
    },
    Close,
}

/// An ordered list of path segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }

    pub fn arc_to(&mut self, center: Point, radius: f32, start_angle: f32, sweep_angle: f32) {
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle,
            sweep_angle,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Approximate the path with a polyline.
    /// Each arc is split into `arc_segments` straight pieces.
    pub fn flatten(&self, arc_segments: usize) -> Vec<Point> {
        let arc_segments = arc_segments.max(1);
        let mut points = Vec::new();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    for i in 0..=arc_segments {
                        let t = i as f32 / arc_segments as f32;
                        let angle = (start_angle + sweep_angle * t).to_radians();
                        points.push(Point::new(
                            center.x + radius * angle.cos(),
                            center.y + radius * angle.sin(),
                        ));
                    }
                }
                PathCommand::Close => {}
            }
        }

        points
    }

    /// Shoelace area of the flattened outline.
    /// Positive for clockwise winding in y-down coordinates.
    pub fn signed_area(&self) -> f32 {
        let points = self.flatten(16);
        if points.len() < 3 {
            return 0.0;
        }

        let mut sum = 0.0;
        for (i, p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];
            sum += p.x * q.y - q.x * p.y;
        }
        sum / 2.0
    }

    /// Axis-aligned bounds of the flattened outline.
    pub fn bounds(&self) -> Option<Rect> {
        let points = self.flatten(16);
        let first = points.first()?;

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::from_ltrb(min_x, min_y, max_x, max_y))
    }
}

/// A rectangle with an independent circular radius per corner.
///
/// Radii are stored in the order top-left, top-right, bottom-right,
/// bottom-left. Construction normalizes the input the way platform rounded
/// rect primitives do: negative radii become zero and, when two adjacent radii
/// do not fit along a side, all four are scaled down by the same factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: [f32; 4],
}

impl RoundedRect {
    pub fn new(rect: Rect, radii: [f32; 4]) -> Self {
        let rect = Rect::from_ltrb(
            rect.left().min(rect.right()),
            rect.top().min(rect.bottom()),
            rect.left().max(rect.right()),
            rect.top().max(rect.bottom()),
        );

        let mut radii = radii.map(|r| if r.is_finite() { r.max(0.0) } else { 0.0 });
        let [tl, tr, br, bl] = radii;

        // Each side is shared by two corners: top, right, bottom, left
        let mut scale: f32 = 1.0;
        for (side, sum) in [
            (rect.width, tl + tr),
            (rect.height, tr + br),
            (rect.width, br + bl),
            (rect.height, bl + tl),
        ] {
            if sum > side {
                scale = scale.min(side / sum);
            }
        }

        if scale < 1.0 {
            for r in &mut radii {
                *r *= scale;
            }
        }

        Self { rect, radii }
    }

    pub fn top_left(&self) -> f32 {
        self.radii[0]
    }

    pub fn top_right(&self) -> f32 {
        self.radii[1]
    }

    pub fn bottom_right(&self) -> f32 {
        self.radii[2]
    }

    pub fn bottom_left(&self) -> f32 {
        self.radii[3]
    }

    /// Closed clockwise outline visiting the corners top-left, top-right,
    /// bottom-right, bottom-left. Zero-radius corners are sharp.
    pub fn to_path(&self) -> Path {
        let (l, t, r, b) = (
            self.rect.left(),
            self.rect.top(),
            self.rect.right(),
            self.rect.bottom(),
        );
        let [tl, tr, br, bl] = self.radii;
        let mut path = Path::new();

        path.move_to(l, t + tl);
        if tl > 0.0 {
            path.arc_to(Point::new(l + tl, t + tl), tl, 180.0, 90.0);
        }
        path.line_to(r - tr, t);
        if tr > 0.0 {
            path.arc_to(Point::new(r - tr, t + tr), tr, 270.0, 90.0);
        }
        path.line_to(r, b - br);
        if br > 0.0 {
            path.arc_to(Point::new(r - br, b - br), br, 0.0, 90.0);
        }
        path.line_to(l + bl, b);
        if bl > 0.0 {
            path.arc_to(Point::new(l + bl, b - bl), bl, 90.0, 90.0);
        }
        path.close();

        path
    }

    /// Check if a point is inside the rounded shape.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if !self.rect.contains(x, y) {
            return false;
        }

        let (l, t, r, b) = (
            self.rect.left(),
            self.rect.top(),
            self.rect.right(),
            self.rect.bottom(),
        );
        let [tl, tr, br, bl] = self.radii;

        let corner = if x < l + tl && y < t + tl {
            Some((l + tl, t + tl, tl))
        } else if x > r - tr && y < t + tr {
            Some((r - tr, t + tr, tr))
        } else if x > r - br && y > b - br {
            Some((r - br, b - br, br))
        } else if x < l + bl && y > b - bl {
            Some((l + bl, b - bl, bl))
        } else {
            None
        };

        match corner {
            Some((cx, cy, radius)) => {
                let dx = x - cx;
                let dy = y - cy;
                dx * dx + dy * dy <= radius * radius
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_radii_kept_when_they_fit() {
        let rr = RoundedRect::new(Rect::new(4.0, 4.0, 192.0, 92.0), [16.0; 4]);
        assert_eq!(rr.radii, [16.0; 4]);
    }

    #[test]
    fn test_oversized_radii_scale_uniformly() {
        // Height 40 cannot fit 30 + 30 on the right side: scale = 40 / 60
        let rr = RoundedRect::new(Rect::new(0.0, 0.0, 100.0, 40.0), [10.0, 30.0, 30.0, 10.0]);
        let scale = 40.0 / 60.0;
        assert!(approx_eq(rr.top_left(), 10.0 * scale));
        assert!(approx_eq(rr.top_right(), 30.0 * scale));
        assert!(approx_eq(rr.bottom_right(), 30.0 * scale));
        assert!(approx_eq(rr.bottom_left(), 10.0 * scale));
    }

    #[test]
    fn test_negative_radii_become_sharp() {
        let rr = RoundedRect::new(Rect::new(0.0, 0.0, 50.0, 50.0), [-5.0, 5.0, f32::NAN, 5.0]);
        assert_eq!(rr.radii, [0.0, 5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_inverted_rect_is_sorted() {
        let rr = RoundedRect::new(Rect::from_ltrb(10.0, 10.0, 4.0, 4.0), [0.0; 4]);
        assert_eq!(rr.rect, Rect::from_ltrb(4.0, 4.0, 10.0, 10.0));
    }

    #[test]
    fn test_path_starts_at_top_left_and_is_clockwise() {
        let rr = RoundedRect::new(Rect::from_ltrb(4.0, 4.0, 196.0, 96.0), [16.0; 4]);
        let path = rr.to_path();

        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(4.0, 20.0)));
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
        assert!(path.signed_area() > 0.0);

        let arc_starts: Vec<f32> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo { start_angle, .. } => Some(*start_angle),
                _ => None,
            })
            .collect();
        // top-left, top-right, bottom-right, bottom-left
        assert_eq!(arc_starts, vec![180.0, 270.0, 0.0, 90.0]);
    }

    #[test]
    fn test_sharp_corners_emit_no_arcs() {
        let rr = RoundedRect::new(Rect::new(0.0, 0.0, 10.0, 10.0), [0.0; 4]);
        let path = rr.to_path();
        assert!(path
            .commands()
            .iter()
            .all(|c| !matches!(c, PathCommand::ArcTo { .. })));
        assert!(approx_eq(path.signed_area(), 100.0));
    }

    #[test]
    fn test_path_area_matches_rounded_rect() {
        let rr = RoundedRect::new(Rect::new(0.0, 0.0, 100.0, 50.0), [10.0; 4]);
        let expected = 100.0 * 50.0 - (4.0 - std::f32::consts::PI) * 100.0;
        let area = rr.to_path().signed_area();
        assert!((area - expected).abs() < 2.0, "area {}", area);
    }

    #[test]
    fn test_path_bounds_stay_inside_rect() {
        let rect = Rect::from_ltrb(4.0, 4.0, 46.0, 26.0);
        let rr = RoundedRect::new(rect, [80.0; 4]);
        let bounds = rr.to_path().bounds().unwrap();
        assert!(bounds.left() >= rect.left() - 1e-3);
        assert!(bounds.top() >= rect.top() - 1e-3);
        assert!(bounds.right() <= rect.right() + 1e-3);
        assert!(bounds.bottom() <= rect.bottom() + 1e-3);
    }

    #[test]
    fn test_contains_respects_corners() {
        let rr = RoundedRect::new(Rect::new(0.0, 0.0, 100.0, 100.0), [20.0, 0.0, 20.0, 0.0]);
        // Center
        assert!(rr.contains(50.0, 50.0));
        // Rounded top-left corner cuts off the extreme point
        assert!(!rr.contains(1.0, 1.0));
        // Sharp top-right corner keeps it
        assert!(rr.contains(99.0, 1.0));
        // Rounded bottom-right
        assert!(!rr.contains(99.0, 99.0));
        // Outside entirely
        assert!(!rr.contains(-1.0, 50.0));
    }

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.signed_area(), 0.0);
        assert!(path.bounds().is_none());
    }
}
