use thiserror::Error;

use crate::types::Joint;

/// Inverse kinematics failures.
///
/// Copy + plain numeric payloads for cheap propagation on the control path.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IkError {
    #[error("Invalid link lengths: l1={l1}, l2={l2} (both must be finite and > 0)")]
    InvalidLinkLengths { l1: f64, l2: f64 },

    #[error("Target contains NaN or Inf")]
    NonFiniteTarget,

    #[error("Target unreachable: distance {distance} outside [{min_reach}, {max_reach}]")]
    Unreachable {
        distance: f64,
        min_reach: f64,
        max_reach: f64,
    },

    #[error("Joint limit exceeded on {joint}: {angle} deg not in [{min}, {max}]")]
    LimitExceeded {
        joint: Joint,
        angle: f64,
        min: f64,
        max: f64,
    },
}

impl IkError {
    /// The offending joint, if this is a limit violation.
    pub const fn joint(&self) -> Option<Joint> {
        match self {
            Self::LimitExceeded { joint, .. } => Some(*joint),
            _ => None,
        }
    }
}

/// Arm description errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid length for {link}: {value} (must be finite and > 0)")]
    InvalidLinkLength { link: &'static str, value: f64 },

    #[error("Invalid range for {joint}: [{min}, {max}]")]
    InvalidRange { joint: Joint, min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ik_error_is_copy() {
        let err = IkError::NonFiniteTarget;
        let err2 = err; // Copy
        assert_eq!(err, err2);
    }

    #[test]
    fn ik_error_joint_accessor() {
        let err = IkError::LimitExceeded {
            joint: Joint::Elbow,
            angle: 170.0,
            min: 0.0,
            max: 150.0,
        };
        assert_eq!(err.joint(), Some(Joint::Elbow));
        assert_eq!(IkError::NonFiniteTarget.joint(), None);
    }

    #[test]
    fn ik_error_display_messages() {
        assert_eq!(
            IkError::InvalidLinkLengths { l1: 0.0, l2: 5.0 }.to_string(),
            "Invalid link lengths: l1=0, l2=5 (both must be finite and > 0)"
        );
        assert_eq!(
            IkError::NonFiniteTarget.to_string(),
            "Target contains NaN or Inf"
        );
        assert_eq!(
            IkError::Unreachable {
                distance: 25.0,
                min_reach: 0.0,
                max_reach: 20.0
            }
            .to_string(),
            "Target unreachable: distance 25 outside [0, 20]"
        );
        assert_eq!(
            IkError::LimitExceeded {
                joint: Joint::Shoulder,
                angle: -100.0,
                min: -90.0,
                max: 90.0
            }
            .to_string(),
            "Joint limit exceeded on shoulder: -100 deg not in [-90, 90]"
        );
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::InvalidLinkLength {
                link: "l2",
                value: -1.0
            }
            .to_string(),
            "Invalid length for l2: -1 (must be finite and > 0)"
        );
        assert_eq!(
            ConfigError::InvalidRange {
                joint: Joint::Base,
                min: 10.0,
                max: -10.0
            }
            .to_string(),
            "Invalid range for base: [10, -10]"
        );
    }
}
