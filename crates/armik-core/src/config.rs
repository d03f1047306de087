use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{JointLimits, LinkLengths};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

fn default_name() -> String {
    "arm".into()
}

// ---------------------------------------------------------------------------
// ArmConfig
// ---------------------------------------------------------------------------

/// Static description of one arm model: link geometry plus joint limits.
///
/// Limits are in degrees, matching the solver output. Any joint range left
/// out of the TOML falls back to the full elbow-down range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub links: LinkLengths,
    #[serde(default)]
    pub limits: JointLimits,
}

impl ArmConfig {
    pub fn new(name: impl Into<String>, links: LinkLengths, limits: JointLimits) -> Self {
        Self {
            name: name.into(),
            links,
            limits,
        }
    }

    /// Validate configuration. Returns Err on invalid values.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidLinkLength`] or [`ConfigError::InvalidRange`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (link, value) in [("l1", self.links.l1), ("l2", self.links.l2)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidLinkLength { link, value });
            }
        }
        self.limits.validate()
    }

    /// Parse and validate from a TOML string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] on malformed input, otherwise any error from
    /// [`ArmConfig::validate`].
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise any error
    /// from [`ArmConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
