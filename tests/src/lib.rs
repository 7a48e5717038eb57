//! Shared fixtures and helpers for the integration test suites.
//!
//! [`samples`] holds grammar source texts together with hand-built
//! [`cfdg_grammar::Grammar`] twins; [`compare`] checks a compiled grammar
//! against its hand-built counterpart field by field.

pub mod compare;
