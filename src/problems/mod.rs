//! Instructional problem encodings built on the search and CSP engines.
//!
//! These are callers of the core, kept in-tree so the demos, tests, and
//! benches can share them.

pub mod map_colouring;
pub mod maze;
pub mod missionaries;
pub mod queens;
