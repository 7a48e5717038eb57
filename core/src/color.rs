//! HSV color values and adjustments.

/// A color in HSV space with alpha. Hue is in degrees.
///
/// The same type serves two roles: an *adjustment* (a delta stored on a
/// replacement or the grammar background) and an *absolute* color (carried on
/// evaluation frames and emitted shapes). Conversion to RGBA happens only at
/// shape-emission time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvColor {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl HsvColor {
    /// The no-op adjustment.
    pub const ZERO: HsvColor = HsvColor {
        h: 0.0,
        s: 0.0,
        v: 0.0,
        a: 0.0,
    };

    /// Opaque white, the base the background adjustment applies to.
    pub const WHITE: HsvColor = HsvColor {
        h: 0.0,
        s: 0.0,
        v: 1.0,
        a: 1.0,
    };

    pub fn new(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }

    /// Apply an adjustment to this color.
    ///
    /// Hue adds and wraps into `[0, 360)`. The other components move toward
    /// their bound: a positive delta `d` closes the gap to 1
    /// (`v + (1 - v) * d`), a negative one scales toward 0 (`v + d * v`).
    /// No clamping happens here; out-of-range values are clamped only at
    /// RGBA conversion.
    pub fn adjust(&self, delta: &HsvColor) -> Self {
        let mut h = (self.h + delta.h) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        Self {
            h,
            s: adjust_component(self.s, delta.s),
            v: adjust_component(self.v, delta.v),
            a: adjust_component(self.a, delta.a),
        }
    }

    /// Convert to RGBA. Saturation, value and alpha are clamped into
    /// `[0, 1]` at this point only.
    pub fn to_rgba(&self) -> Rgba {
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);
        let a = self.a.clamp(0.0, 1.0);

        let mut h = self.h % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        let sector = h / 60.0;
        let i = sector.floor();
        let f = sector - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgba { r, g, b, a }
    }
}

fn adjust_component(value: f32, delta: f32) -> f32 {
    if delta > 0.0 {
        value + (1.0 - value) * delta
    } else {
        value + delta * value
    }
}

/// An RGBA color, components nominally in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}
