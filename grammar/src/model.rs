//! Rules and replacements: the right-hand side of a production.

use cfdg_core::{HsvColor, Primitive, Transform2D};

/// What a replacement expands to.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplacementKind {
    /// A terminal drawable primitive.
    Primitive(Primitive),
    /// A reference to a rule group, resolved at evaluation time. Forward
    /// references are legal.
    Call(String),
    /// A repeated block. The owning replacement's transform/color hold the
    /// per-iteration delta; `body` is evaluated once per iteration.
    Loop { count: u32, body: Vec<Replacement> },
}

/// One element of a rule's right-hand side: a shape or rule reference plus
/// its local geometric and color adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    pub kind: ReplacementKind,
    /// Local transform adjustment, identity by default.
    pub transform: Transform2D,
    /// HSV adjustment (a delta), zero by default.
    pub color: HsvColor,
}

impl Replacement {
    pub fn new(kind: ReplacementKind) -> Self {
        Self {
            kind,
            transform: Transform2D::IDENTITY,
            color: HsvColor::ZERO,
        }
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::new(ReplacementKind::Primitive(primitive))
    }

    pub fn call(name: impl Into<String>) -> Self {
        Self::new(ReplacementKind::Call(name.into()))
    }

    pub fn loop_block(count: u32, body: Vec<Replacement>) -> Self {
        Self::new(ReplacementKind::Loop { count, body })
    }

    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_color(mut self, color: HsvColor) -> Self {
        self.color = color;
        self
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, ReplacementKind::Primitive(_))
    }
}

/// One named production variant. Multiple rules with the same name form a
/// weighted choice group.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: String,
    /// Relative selection weight within the group, >= 0.
    pub weight: f32,
    /// Normalized selection probability, derived by `Grammar::finish_setup`.
    pub probability: f32,
    pub replacements: Vec<Replacement>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: 1.0,
            probability: 0.0,
            replacements: Vec::new(),
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_replacements(mut self, replacements: Vec<Replacement>) -> Self {
        self.replacements = replacements;
        self
    }
}
