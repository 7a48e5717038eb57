//! CFDG Evaluator
//!
//! This crate expands a compiled [`cfdg_grammar::Grammar`] into a bounded,
//! ordered list of concrete [`cfdg_core::Shape`] records:
//! - Breadth-first work-queue expansion (no native recursion)
//! - Area-based culling and a hard shape cap as termination guards
//! - Seedable rule selection for reproducible output
//! - Output sorted by descending area with dense indices

mod error;
mod evaluator;

pub use error::*;
pub use evaluator::*;
