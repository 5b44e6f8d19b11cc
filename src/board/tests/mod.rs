//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move path enumeration against reference counts
//! - `edge_cases.rs` - Special positions and edge cases
//! - `history.rs` - Commit/undo correctness
//! - `scenarios.rs` - Whole-game scenarios
//! - `proptest.rs` - Property-based tests
