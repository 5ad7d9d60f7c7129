//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation
//! - `castling.rs` - Castling eligibility and rights bookkeeping
//! - `check.rs` - Check detection and its deliberate exclusions
//! - `proptest.rs` - Property-based tests
