//! Canonical arm geometries used across test suites.

use armik_core::LinkLengths;

/// Two 10-unit links; reachable set is a full ball of radius 20.
pub const fn equal_links() -> LinkLengths {
    LinkLengths::new(10.0, 10.0)
}

/// 10-unit upper arm with a 5-unit forearm; dead zone of radius 5.
pub const fn unequal_links() -> LinkLengths {
    LinkLengths::new(10.0, 5.0)
}

/// A spread of geometries: equal, long upper arm, long forearm, and a
/// small metric-scale arm.
pub fn test_arms() -> Vec<LinkLengths> {
    vec![
        equal_links(),
        unequal_links(),
        LinkLengths::new(4.0, 9.0),
        LinkLengths::new(0.3, 0.25),
    ]
}
