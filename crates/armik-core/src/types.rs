use std::fmt;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, IkError};

// ---------------------------------------------------------------------------
// TargetPoint
// ---------------------------------------------------------------------------

/// Cartesian target in the arm-base frame.
///
/// Uses the same length unit as [`LinkLengths`]. The base rotates about +z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TargetPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Distance from the base axis, measured in the horizontal plane.
    pub fn planar_radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Straight-line distance from the base origin.
    pub fn reach_distance(&self) -> f64 {
        self.planar_radius().hypot(self.z)
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for TargetPoint {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3<f64>> for TargetPoint {
    fn from(p: Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f64>> for TargetPoint {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<TargetPoint> for Point3<f64> {
    fn from(t: TargetPoint) -> Self {
        Self::new(t.x, t.y, t.z)
    }
}

// ---------------------------------------------------------------------------
// LinkLengths
// ---------------------------------------------------------------------------

/// Lengths of the upper arm (`l1`) and forearm (`l2`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkLengths {
    pub l1: f64,
    pub l2: f64,
}

impl LinkLengths {
    pub const fn new(l1: f64, l2: f64) -> Self {
        Self { l1, l2 }
    }

    /// Reject zero, negative and non-finite lengths.
    ///
    /// # Errors
    ///
    /// [`IkError::InvalidLinkLengths`] carrying both lengths.
    pub fn validate(&self) -> Result<(), IkError> {
        let ok = |l: f64| l.is_finite() && l > 0.0;
        if ok(self.l1) && ok(self.l2) {
            Ok(())
        } else {
            Err(IkError::InvalidLinkLengths {
                l1: self.l1,
                l2: self.l2,
            })
        }
    }

    /// Full extension.
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Radius of the inner dead zone left by unequal links.
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }
}

// ---------------------------------------------------------------------------
// Joint
// ---------------------------------------------------------------------------

/// One of the three actuated joints, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Base,
    Shoulder,
    Elbow,
}

impl Joint {
    pub const ALL: [Self; 3] = [Self::Base, Self::Shoulder, Self::Elbow];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// AngleRange / JointLimits
// ---------------------------------------------------------------------------

/// Closed angle interval in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min: f64,
    pub max: f64,
}

impl AngleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn from_radians(min: f64, max: f64) -> Self {
        Self::new(min.to_degrees(), max.to_degrees())
    }

    /// Inclusive on both ends. NaN is never contained.
    pub fn contains(&self, angle: f64) -> bool {
        (self.min..=self.max).contains(&angle)
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

const fn default_base_range() -> AngleRange {
    AngleRange::new(-180.0, 180.0)
}
const fn default_shoulder_range() -> AngleRange {
    AngleRange::new(-270.0, 90.0)
}
const fn default_elbow_range() -> AngleRange {
    AngleRange::new(0.0, 180.0)
}

/// Per-joint operating ranges, all in degrees.
///
/// Defaults span the full range the elbow-down solution can produce, so a
/// default-limited solve only fails on reachability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointLimits {
    #[serde(default = "default_base_range")]
    pub base: AngleRange,
    #[serde(default = "default_shoulder_range")]
    pub shoulder: AngleRange,
    #[serde(default = "default_elbow_range")]
    pub elbow: AngleRange,
}

impl Default for JointLimits {
    fn default() -> Self {
        Self {
            base: default_base_range(),
            shoulder: default_shoulder_range(),
            elbow: default_elbow_range(),
        }
    }
}

/// A single out-of-range joint angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitViolation {
    pub joint: Joint,
    pub angle: f64,
    pub min: f64,
    pub max: f64,
}

impl From<LimitViolation> for IkError {
    fn from(v: LimitViolation) -> Self {
        Self::LimitExceeded {
            joint: v.joint,
            angle: v.angle,
            min: v.min,
            max: v.max,
        }
    }
}

impl JointLimits {
    pub const fn new(base: AngleRange, shoulder: AngleRange, elbow: AngleRange) -> Self {
        Self {
            base,
            shoulder,
            elbow,
        }
    }

    /// Build limits from `[min, max]` pairs given in radians.
    pub fn from_radians(base: [f64; 2], shoulder: [f64; 2], elbow: [f64; 2]) -> Self {
        Self {
            base: AngleRange::from_radians(base[0], base[1]),
            shoulder: AngleRange::from_radians(shoulder[0], shoulder[1]),
            elbow: AngleRange::from_radians(elbow[0], elbow[1]),
        }
    }

    pub const fn range(&self, joint: Joint) -> &AngleRange {
        match joint {
            Joint::Base => &self.base,
            Joint::Shoulder => &self.shoulder,
            Joint::Elbow => &self.elbow,
        }
    }

    /// Validate every range. Returns Err on the first malformed one.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRange`] for a non-finite bound or `min > max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for joint in Joint::ALL {
            let range = self.range(joint);
            if !range.is_valid() {
                return Err(ConfigError::InvalidRange {
                    joint,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// All out-of-range joints, in chain order.
    pub fn violations(&self, config: &RobotConfig) -> Vec<LimitViolation> {
        Joint::ALL
            .into_iter()
            .filter_map(|joint| {
                let range = self.range(joint);
                let angle = config.angle(joint);
                (!range.contains(angle)).then_some(LimitViolation {
                    joint,
                    angle,
                    min: range.min,
                    max: range.max,
                })
            })
            .collect()
    }

    /// Check base, shoulder, elbow in order and report the first violation.
    ///
    /// # Errors
    ///
    /// [`IkError::LimitExceeded`] naming the first out-of-range joint.
    pub fn check(&self, config: &RobotConfig) -> Result<(), IkError> {
        for joint in Joint::ALL {
            let range = self.range(joint);
            let angle = config.angle(joint);
            if !range.contains(angle) {
                return Err(IkError::LimitExceeded {
                    joint,
                    angle,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RobotConfig
// ---------------------------------------------------------------------------

/// Solved joint angles in degrees (elbow-down branch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Rotation of the arm plane about the vertical axis.
    pub base: f64,
    /// Elevation of the upper arm above horizontal.
    pub shoulder: f64,
    /// Interior angle between upper arm and forearm.
    pub elbow: f64,
}

impl RobotConfig {
    pub const fn new(base: f64, shoulder: f64, elbow: f64) -> Self {
        Self {
            base,
            shoulder,
            elbow,
        }
    }

    pub const fn angle(&self, joint: Joint) -> f64 {
        match joint {
            Joint::Base => self.base,
            Joint::Shoulder => self.shoulder,
            Joint::Elbow => self.elbow,
        }
    }

    /// `[base, shoulder, elbow]` in radians.
    pub fn to_radians(&self) -> [f64; 3] {
        [
            self.base.to_radians(),
            self.shoulder.to_radians(),
            self.elbow.to_radians(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
