//! CFDG Grammar Data Model
//!
//! This crate provides the compiled representation of a design grammar:
//! - Replacements (terminal shapes, rule calls, loops) with their local
//!   geometric and color adjustments
//! - Rules grouped by name into weighted choice groups
//! - The Grammar container with stochastic rule selection

mod error;
mod grammar;
mod model;

pub use error::*;
pub use grammar::*;
pub use model::*;
