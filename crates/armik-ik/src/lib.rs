//! Closed-form inverse kinematics for a three-joint arm.
//!
//! The arm is a rotating base carrying two rigid links (upper arm `l1`,
//! forearm `l2`) joined by a shoulder and an elbow. Given a target point in
//! the base frame, the solver recovers the elbow-down joint angles in
//! degrees, or a typed [`IkError`] explaining why it cannot.
//!
//! # Pipeline
//!
//! ```text
//! TargetPoint ──► validate ──► reach check ──► law of cosines ──► limit check ──► RobotConfig
//! ```
//!
//! # Quick Start
//!
//! ```
//! use armik_ik::{solve, JointLimits, LinkLengths, TargetPoint};
//!
//! let links = LinkLengths::new(10.0, 10.0);
//! let target = TargetPoint::new(15.0, 0.0, 0.0);
//! let angles = solve(target, links, &JointLimits::default()).unwrap();
//! assert!((angles.elbow - 97.180_755_781).abs() < 1e-6);
//! ```

pub mod solver;

pub use armik_core::{
    AngleRange, ArmConfig, ConfigError, IkError, Joint, JointLimits, LimitViolation, LinkLengths,
    RobotConfig, TargetPoint,
};
pub use solver::{solve, ThreeLinkSolver};
