//! Closed-form base/shoulder/elbow IK solver.
//!
//! Decouples the base yaw from the planar two-link problem, then recovers
//! the shoulder and elbow with the law of cosines. Only the elbow-down
//! branch is produced.

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, trace};

use armik_core::{
    ArmConfig, ConfigError, IkError, JointLimits, LinkLengths, RobotConfig, TargetPoint,
};

/// Solve IK for a single target.
///
/// `limits` are in degrees. Link lengths are validated on every call; use
/// [`ThreeLinkSolver`] to validate once per arm.
///
/// # Errors
///
/// - [`IkError::InvalidLinkLengths`] if either link is not finite and > 0.
/// - [`IkError::NonFiniteTarget`] if any coordinate is NaN or Inf.
/// - [`IkError::Unreachable`] if the target lies outside the annulus
///   `[|l1 - l2|, l1 + l2]`.
/// - [`IkError::LimitExceeded`] for the first of base, shoulder, elbow that
///   falls outside its range.
pub fn solve(
    target: TargetPoint,
    links: LinkLengths,
    limits: &JointLimits,
) -> Result<RobotConfig, IkError> {
    links.validate()?;
    solve_validated(target, links, limits)
}

/// Solver bound to one arm's geometry and limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeLinkSolver {
    links: LinkLengths,
    limits: JointLimits,
}

impl ThreeLinkSolver {
    /// Create a solver, rejecting non-positive or non-finite links.
    ///
    /// # Errors
    ///
    /// [`IkError::InvalidLinkLengths`] if either link is not finite and > 0.
    pub fn new(links: LinkLengths, limits: JointLimits) -> Result<Self, IkError> {
        links.validate()?;
        Ok(Self { links, limits })
    }

    /// Create a solver with the full elbow-down joint ranges.
    ///
    /// # Errors
    ///
    /// [`IkError::InvalidLinkLengths`] if either link is not finite and > 0.
    pub fn unlimited(links: LinkLengths) -> Result<Self, IkError> {
        Self::new(links, JointLimits::default())
    }

    /// Build from a validated [`ArmConfig`].
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] raised by [`ArmConfig::validate`].
    pub fn from_config(config: &ArmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            links: config.links,
            limits: config.limits,
        })
    }

    /// Link geometry this solver was built for.
    pub const fn links(&self) -> &LinkLengths {
        &self.links
    }

    /// Joint ranges applied after every solve, in degrees.
    pub const fn limits(&self) -> &JointLimits {
        &self.limits
    }

    /// Solve IK for `target`.
    ///
    /// # Errors
    ///
    /// Same as [`solve`], except links were already validated at
    /// construction.
    pub fn solve(&self, target: TargetPoint) -> Result<RobotConfig, IkError> {
        solve_validated(target, self.links, &self.limits)
    }

    /// Distance-only reachability test. Ignores joint limits.
    pub fn is_reachable(&self, target: TargetPoint) -> bool {
        target.is_finite() && reach_check(target.reach_distance(), &self.links).is_ok()
    }
}

/// Everything after link validation.
fn solve_validated(
    target: TargetPoint,
    links: LinkLengths,
    limits: &JointLimits,
) -> Result<RobotConfig, IkError> {
    let config = joint_angles(target, links).inspect_err(|err| {
        debug!(x = target.x, y = target.y, z = target.z, %err, "IK rejected target");
    })?;

    if let Err(err) = limits.check(&config) {
        debug!(
            base = config.base,
            shoulder = config.shoulder,
            elbow = config.elbow,
            %err,
            "IK solution outside joint limits"
        );
        return Err(err);
    }

    trace!(
        base = config.base,
        shoulder = config.shoulder,
        elbow = config.elbow,
        "IK solved"
    );
    Ok(config)
}

/// Elbow-down joint angles in degrees, without limit checking.
fn joint_angles(target: TargetPoint, links: LinkLengths) -> Result<RobotConfig, IkError> {
    if !target.is_finite() {
        return Err(IkError::NonFiniteTarget);
    }
    let TargetPoint { x, y, z } = target;
    let LinkLengths { l1, l2 } = links;

    // Target on the base axis: yaw is undefined, pin it to zero.
    // Compared directly so that signed zeros cannot yield +-pi.
    let base = if x == 0.0 && y == 0.0 { 0.0 } else { y.atan2(x) };

    let r_planar = x.hypot(y);
    let reach = r_planar.hypot(z);
    reach_check(reach, &links)?;

    // Law of cosines on lengths scaled by the longer link, so the squares
    // stay in range for any finite arm size.
    let scale = l1.max(l2);
    let (a, b, r) = (l1 / scale, l2 / scale, reach / scale);

    // Clamp: at the reach boundary rounding can push the cosines past +-1.
    let cos_elbow = (a * a + b * b - r * r) / (2.0 * a * b);
    let elbow = cos_elbow.clamp(-1.0, 1.0).acos();

    let elevation = z.atan2(r_planar);
    let interior = if reach == 0.0 {
        // Only reachable with l1 == l2 (fully folded). Limit of the
        // interior angle as reach -> 0.
        FRAC_PI_2
    } else {
        let cos_interior = (a * a + r * r - b * b) / (2.0 * a * r);
        cos_interior.clamp(-1.0, 1.0).acos()
    };
    // Elbow-down: upper arm sits below the base-to-target line.
    let shoulder = elevation - interior;

    Ok(RobotConfig::new(
        base.to_degrees(),
        shoulder.to_degrees(),
        elbow.to_degrees(),
    ))
}

fn reach_check(reach: f64, links: &LinkLengths) -> Result<(), IkError> {
    let max_reach = links.max_reach();
    let min_reach = links.min_reach();
    if reach > max_reach || reach < min_reach {
        return Err(IkError::Unreachable {
            distance: reach,
            min_reach,
            max_reach,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
