/// A 2D affine transformation.
///
/// Stored as the first two rows of a 3x3 matrix in row-major order:
/// `[a, b, tx, c, d, ty]`, mapping `(x, y)` to `(a*x + b*y + tx, c*x + d*y + ty)`.
/// Rotations are clockwise on screen because the y axis points down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub data: [f32; 6],
}

impl Transform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, // row 1
        ],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, x, // row 0
                0.0, 1.0, y, // row 1
            ],
        }
    }

    /// Create a rotation transform around the origin
    pub fn rotate(angle_radians: f32) -> Self {
        let cos = angle_radians.cos();
        let sin = angle_radians.sin();
        Self {
            data: [
                cos, -sin, 0.0, // row 0
                sin, cos, 0.0, // row 1
            ],
        }
    }

    pub fn rotate_degrees(angle_degrees: f32) -> Self {
        Self::rotate(angle_degrees.to_radians())
    }

    /// Create a rotation around the pivot `(px, py)`.
    pub fn rotate_about(angle_degrees: f32, px: f32, py: f32) -> Self {
        Self::translate(px, py)
            .then(&Self::rotate_degrees(angle_degrees))
            .then(&Self::translate(-px, -py))
    }

    /// Compose this transform with another: self * other
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        let [a1, b1, tx1, c1, d1, ty1] = self.data;
        let [a2, b2, tx2, c2, d2, ty2] = other.data;

        Transform {
            data: [
                a1 * a2 + b1 * c2,
                a1 * b2 + b1 * d2,
                a1 * tx2 + b1 * ty2 + tx1,
                c1 * a2 + d1 * c2,
                c1 * b2 + d1 * d2,
                c1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }

    /// Append a rotation about a pivot, applied after this transform.
    pub fn post_rotate(&self, angle_degrees: f32, px: f32, py: f32) -> Transform {
        Self::rotate_about(angle_degrees, px, py).then(self)
    }

    /// Compute the inverse of this transform.
    /// Degenerate (non-invertible) matrices yield the identity.
    pub fn inverse(&self) -> Transform {
        let [a, b, tx, c, d, ty] = self.data;
        let det = a * d - b * c;

        if det.abs() < 1e-10 {
            return Self::IDENTITY;
        }

        let inv_det = 1.0 / det;

        Transform {
            data: [
                d * inv_det,
                -b * inv_det,
                (-d * tx + b * ty) * inv_det,
                -c * inv_det,
                a * inv_det,
                (c * tx - a * ty) * inv_det,
            ],
        }
    }

    /// Transform a 2D point by this matrix
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, tx, c, d, ty] = self.data;
        (a * x + b * y + tx, c * x + d * y + ty)
    }

    /// Rotation encoded by this matrix, in degrees within [0, 360).
    /// Only meaningful for rigid (rotate + translate) transforms.
    pub fn rotation_degrees(&self) -> f32 {
        let degrees = self.data[3].atan2(self.data[0]).to_degrees();
        degrees.rem_euclid(360.0)
    }

    /// Column-major 3x3 matrix padded to `mat3x4` rows for WGSL uniforms.
    pub fn to_shader_columns(&self) -> [[f32; 4]; 3] {
        let [a, b, tx, c, d, ty] = self.data;
        [[a, c, 0.0, 0.0], [b, d, 0.0, 0.0], [tx, ty, 1.0, 0.0]]
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
