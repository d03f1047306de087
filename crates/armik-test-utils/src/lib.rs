//! Shared test fixtures and utilities for armik crates.
//!
//! Provides a forward-kinematics oracle for round-trip checks, canonical arm
//! geometries, and deterministic RNG setup for sampling reachable targets.

pub mod fixtures;
pub mod fk;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use fixtures::{equal_links, test_arms, unequal_links};
pub use fk::forward_kinematics;
pub use rng::{sample_reachable_target, seeded_rng};
