//! Drawable primitives and the evaluator's output record.

use std::fmt;

use crate::{HsvColor, Rgba, Transform2D};

/// The three terminal drawable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Square,
    Circle,
    Triangle,
}

impl Primitive {
    /// Match a source-grammar name. Case-sensitive: lowercase `square` is a
    /// rule reference, not a primitive.
    pub fn from_name(name: &str) -> Option<Primitive> {
        match name {
            "SQUARE" => Some(Primitive::Square),
            "CIRCLE" => Some(Primitive::Circle),
            "TRIANGLE" => Some(Primitive::Triangle),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Square => "SQUARE",
            Primitive::Circle => "CIRCLE",
            Primitive::Triangle => "TRIANGLE",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One concrete drawable shape emitted by the evaluator.
///
/// Immutable once created: the evaluator builds it, sorts the full list by
/// descending `area`, assigns `index`, and hands the list over. Renderers
/// consume it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Absolute transform from the unit shape to world space.
    pub transform: Transform2D,
    /// Absolute color in HSV.
    pub hsv: HsvColor,
    /// `hsv` converted to RGBA at emission time.
    pub color: Rgba,
    pub primitive: Primitive,
    /// Scale area of the emitting frame; the visibility sort key.
    pub area: f32,
    /// Position in the area-sorted output, dense `0..n`.
    pub index: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.transform.m;
        write!(
            f,
            "{} area: {} hsv: {},{},{},{} t: {},{},{},{},{},{}",
            self.primitive,
            self.area,
            self.hsv.h,
            self.hsv.s,
            self.hsv.v,
            self.hsv.a,
            t[0],
            t[1],
            t[2],
            t[3],
            t[4],
            t[5]
        )
    }
}
