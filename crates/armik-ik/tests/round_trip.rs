//! Integration test: IK followed by FK recovers the target.
//!
//! For each test arm, samples seeded random targets inside the reachable
//! shell, solves IK with full-range limits, and checks that:
//! 1. Every reachable target solves (no error)
//! 2. Forward kinematics of the solution lands back on the target
//! 3. Angles stay inside the full elbow-down ranges

use approx::assert_relative_eq;
use armik_ik::{solve, JointLimits, TargetPoint, ThreeLinkSolver};
use armik_test_utils::{
    equal_links, forward_kinematics, sample_reachable_target, seeded_rng, test_arms,
};
use nalgebra::Point3;

const SAMPLES_PER_ARM: usize = 2_000;
const TOLERANCE: f64 = 1e-9;

#[test]
fn random_targets_round_trip() {
    let limits = JointLimits::default();
    for (i, links) in test_arms().into_iter().enumerate() {
        let mut rng = seeded_rng(1000 + i as u64);
        // Position tolerance scales with arm size.
        let tol = TOLERANCE * links.max_reach();

        for _ in 0..SAMPLES_PER_ARM {
            let target = sample_reachable_target(&mut rng, &links, 0.02);
            let cfg = solve(target, links, &limits)
                .unwrap_or_else(|e| panic!("solve failed for {target:?} on {links:?}: {e}"));

            let p = forward_kinematics(&cfg, &links);
            assert_relative_eq!(p.x, target.x, epsilon = tol);
            assert_relative_eq!(p.y, target.y, epsilon = tol);
            assert_relative_eq!(p.z, target.z, epsilon = tol);

            assert!(limits.violations(&cfg).is_empty(), "{cfg:?} outside full range");
        }
    }
}

#[test]
fn nalgebra_points_round_trip() {
    let links = equal_links();
    let solver = ThreeLinkSolver::unlimited(links).unwrap();

    for p in [
        Point3::new(15.0, 0.0, 0.0),
        Point3::new(-3.0, 8.0, -6.0),
        Point3::new(0.0, -12.0, 9.0),
        Point3::new(1.0, 1.0, -19.0),
    ] {
        let cfg = solver.solve(p.into()).unwrap();
        let back = forward_kinematics(&cfg, &links);
        assert_relative_eq!((back - p).norm(), 0.0, epsilon = TOLERANCE * links.max_reach());
    }
}

#[test]
fn boundary_targets_round_trip() {
    for links in test_arms() {
        for reach in [links.max_reach(), links.min_reach()] {
            let target = TargetPoint::new(0.0, reach, 0.0);
            let cfg = solve(target, links, &JointLimits::default()).unwrap();
            assert!(cfg.elbow.is_finite() && cfg.shoulder.is_finite());

            // acos is ill-conditioned at +-1, so the boundary tolerance is looser.
            let p = forward_kinematics(&cfg, &links);
            assert_relative_eq!(p.y, target.y, epsilon = 1e-6 * links.max_reach());
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-6 * links.max_reach());
        }
    }
}
