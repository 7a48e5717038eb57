//! CFDG Core Types
//!
//! This crate provides the foundational types used throughout the CFDG system:
//! - 2D affine transforms (Transform2D) and their composition
//! - HSV color values and adjustments (HsvColor, Rgba)
//! - Drawable primitives and the final Shape output record

mod color;
mod shape;
mod transform;

pub use color::*;
pub use shape::*;
pub use transform::*;
