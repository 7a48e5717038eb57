//! 2D affine transforms.

/// A 2D affine map stored as six floats in column-major order:
/// `[m00, m10, m01, m11, tx, ty]`.
///
/// The first four entries are the linear 2x2 block (columns first), the last
/// two the translation. Points transform as column vectors:
/// `x' = m00*x + m01*y + tx`, `y' = m10*x + m11*y + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn new(m: [f32; 6]) -> Self {
        Self { m }
    }

    /// Translation by (x, y).
    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Counter-clockwise rotation by `degrees`.
    pub fn rotation(degrees: f32) -> Self {
        let r = degrees.to_radians();
        let (s, c) = r.sin_cos();
        Self {
            m: [c, s, -s, c, 0.0, 0.0],
        }
    }

    /// Non-uniform scale.
    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            m: [x, 0.0, 0.0, y, 0.0, 0.0],
        }
    }

    /// Shear of the linear block by `x_deg`/`y_deg` (degrees).
    pub fn shear(x_deg: f32, y_deg: f32) -> Self {
        Self {
            m: [
                1.0,
                y_deg.to_radians().tan(),
                x_deg.to_radians().tan(),
                1.0,
                0.0,
                0.0,
            ],
        }
    }

    /// Reflection across the line at `deg / 2` degrees.
    pub fn reflection(deg: f32) -> Self {
        let r = deg * std::f32::consts::PI / 90.0;
        let (s, c) = r.sin_cos();
        Self {
            m: [c, s, s, -c, 0.0, 0.0],
        }
    }

    /// Compose `self ∘ adjustment`: the adjustment is applied in this
    /// transform's local frame (parent first, then child).
    pub fn then(&self, adj: &Transform2D) -> Self {
        let t = &self.m;
        let a = &adj.m;
        Self {
            m: [
                t[0] * a[0] + t[2] * a[1],
                t[1] * a[0] + t[3] * a[1],
                t[0] * a[2] + t[2] * a[3],
                t[1] * a[2] + t[3] * a[3],
                t[0] * a[4] + t[2] * a[5] + t[4],
                t[1] * a[4] + t[3] * a[5] + t[5],
            ],
        }
    }

    /// Map a point through this transform.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let t = &self.m;
        (t[0] * x + t[2] * y + t[4], t[1] * x + t[3] * y + t[5])
    }

    /// Absolute area scale factor: the product of the basis vector lengths.
    ///
    /// Equals |sx * sy| for any rotate/scale composition; the evaluator uses
    /// it as the recursion-termination signal.
    pub fn scale_area(&self) -> f32 {
        let t = &self.m;
        let sx = (t[0] * t[0] + t[1] * t[1]).sqrt();
        let sy = (t[2] * t[2] + t[3] * t[3]).sqrt();
        (sx * sy).abs()
    }

    pub fn translation_part(&self) -> (f32, f32) {
        (self.m[4], self.m[5])
    }
}
