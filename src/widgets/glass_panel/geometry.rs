//! Outline, clip and size-derived values for a glass panel.

use crate::error::{Error, Result};
use crate::layout::Size;
use crate::renderer::path::{Path, RoundedRect};
use crate::widgets::Rect;

/// One corner of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Clockwise from the top-left, the order the outline visits them.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];
}

/// Configured radius for each corner.
///
/// These are the values the user asked for. Radii too large for the panel
/// are scaled down by [`RoundedRect`] when the outline is built; the stored
/// values are never rewritten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerRadii {
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }

    pub fn get(&self, corner: Corner) -> f32 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    pub fn set(&mut self, corner: Corner, radius: f32) {
        match corner {
            Corner::TopLeft => self.top_left = radius,
            Corner::TopRight => self.top_right = radius,
            Corner::BottomRight => self.bottom_right = radius,
            Corner::BottomLeft => self.bottom_left = radius,
        }
    }

    /// Radii in outline order: top-left, top-right, bottom-right, bottom-left.
    pub fn to_array(&self) -> [f32; 4] {
        Corner::ALL.map(|corner| self.get(corner))
    }

    /// Reject negative or non-finite radii.
    pub fn validate(&self) -> Result<()> {
        for corner in Corner::ALL {
            let value = self.get(corner);
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidRadius { corner, value });
            }
        }
        Ok(())
    }
}

impl Default for CornerRadii {
    fn default() -> Self {
        Self::uniform(super::DEFAULT_CORNER_RADIUS)
    }
}

/// Rounded outline of a panel, inset by the border width on every side.
///
/// The same path is filled, stroked twice and used as the clip for the
/// sweep, so it is built once per size/radius change and reused.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    /// Inset rect: `(bw, bw)` to `(width - bw, height - bw)`
    pub inset: Rect,
    /// Normalized rounded rect the outline was built from
    pub shape: RoundedRect,
    /// Closed clockwise outline
    pub outline: Path,
    pub border_width: f32,
}

impl PanelGeometry {
    pub fn build(size: Size, radii: &CornerRadii, border_width: f32) -> Self {
        let inset = Rect::from_size(size).inset(border_width);
        let shape = RoundedRect::new(inset, radii.to_array());
        let outline = shape.to_path();

        Self {
            inset,
            shape,
            outline,
            border_width,
        }
    }

    /// Clip region confining the sweep. Identical to the outline.
    pub fn clip(&self) -> &Path {
        &self.outline
    }
}

/// Values derived from the panel size, memoized between frames.
///
/// A value of zero means "not computed yet". Resizing resets everything to
/// zero and each value is recomputed on the next paint only while it is
/// still zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedCache {
    /// `sqrt(w² + h²)`
    pub diagonal: f32,
    /// `diagonal / 6`, half the width of the sweep band
    pub band_half_width: f32,
    /// `sqrt((w/2)² + (h/2)²)`, distance of the streak from the center
    pub streak_radius: f32,
}

impl DerivedCache {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fill in any value that is still zero from `size`.
    pub fn ensure(&mut self, size: Size) {
        if self.diagonal == 0.0 || self.band_half_width == 0.0 {
            self.diagonal = size.width.hypot(size.height);
            self.band_half_width = self.diagonal / 6.0;
        }
        if self.streak_radius == 0.0 {
            self.streak_radius = (size.width / 2.0).hypot(size.height / 2.0);
        }
    }
}
