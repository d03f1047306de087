// armik-core: Types, errors and arm configuration for the armik IK solver.

pub mod config;
pub mod error;
pub mod types;

pub use config::ArmConfig;
pub use error::{ConfigError, IkError};
pub use types::{
    AngleRange, Joint, JointLimits, LimitViolation, LinkLengths, RobotConfig, TargetPoint,
};
