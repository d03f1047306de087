//! Forward kinematics oracle matching the solver's elbow-down convention.

use std::f64::consts::PI;

use armik_core::{LinkLengths, RobotConfig};
use nalgebra::Point3;

/// End-effector position for a joint configuration given in degrees.
///
/// Rotates the arm plane by `base`, then places the two links in that plane:
/// the upper arm at `shoulder` above horizontal, the forearm turned back by
/// the interior elbow angle.
pub fn forward_kinematics(angles: &RobotConfig, links: &LinkLengths) -> Point3<f64> {
    let [base, shoulder, elbow] = angles.to_radians();
    let forearm = shoulder + PI - elbow;

    let radial = links.l1 * shoulder.cos() + links.l2 * forearm.cos();
    let height = links.l1 * shoulder.sin() + links.l2 * forearm.sin();

    Point3::new(radial * base.cos(), radial * base.sin(), height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fully_extended_along_x() {
        let p = forward_kinematics(&RobotConfig::new(0.0, 0.0, 180.0), &LinkLengths::new(3.0, 2.0));
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn right_angle_elbow() {
        // Upper arm horizontal toward +y, forearm straight up.
        let p = forward_kinematics(&RobotConfig::new(90.0, 0.0, 90.0), &LinkLengths::new(1.0, 1.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn folded_equal_links_at_origin() {
        let p = forward_kinematics(&RobotConfig::new(30.0, 45.0, 0.0), &LinkLengths::new(2.0, 2.0));
        assert_relative_eq!(p.coords.norm(), 0.0, epsilon = 1e-12);
    }
}
