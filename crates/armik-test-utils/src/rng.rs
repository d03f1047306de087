//! Deterministic RNG utilities for reproducible tests.

use std::f64::consts::PI;

use armik_core::{LinkLengths, TargetPoint};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Sample a target strictly inside the reachable shell of `links`.
///
/// `margin` is the fraction of the shell thickness kept clear at both the
/// inner and outer boundary, where `acos` loses precision.
pub fn sample_reachable_target<R: Rng>(
    rng: &mut R,
    links: &LinkLengths,
    margin: f64,
) -> TargetPoint {
    let lo = links.min_reach();
    let hi = links.max_reach();
    let pad = (hi - lo) * margin;
    let reach = rng.gen_range((lo + pad)..(hi - pad));

    let cos_polar: f64 = rng.gen_range(-1.0..1.0);
    let sin_polar = (1.0 - cos_polar * cos_polar).sqrt();
    let azimuth = rng.gen_range(-PI..PI);

    TargetPoint::new(
        reach * sin_polar * azimuth.cos(),
        reach * sin_polar * azimuth.sin(),
        reach * cos_polar,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
