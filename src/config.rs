//! Math configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GDX_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use gdx_math::Tolerances;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MathConfig {
    /// Comparison tolerances
    #[serde(default)]
    pub tolerances: ToleranceConfig,
    /// LinearMath constant selection
    #[serde(default)]
    pub constants: ConstantsConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl MathConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GDX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GDX_TOLERANCES__UNIT_MARGIN=0.01 -> tolerances.unit_margin = 0.01
        figment = figment.merge(Env::prefixed("GDX_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the math layer cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tolerances.validate()?;
        self.constants.large_float()?;
        Ok(())
    }
}

/// Tolerance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceConfig {
    /// Allowed |len² - 1| for unit vector checks
    pub unit_margin: f32,
    /// Allowed dot product error for collinear/perpendicular checks
    pub rounding_error: f32,
    /// Per-component tolerance for approximate equality
    pub equality_epsilon: f32,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        let defaults = Tolerances::DEFAULT;
        Self {
            unit_margin: defaults.unit_margin,
            rounding_error: defaults.rounding_error,
            equality_epsilon: defaults.equality_epsilon,
        }
    }
}

impl ToleranceConfig {
    /// Convert to the math crate's tolerance bundle
    pub fn to_tolerances(&self) -> Tolerances {
        Tolerances::new(self.unit_margin, self.rounding_error, self.equality_epsilon)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("unit_margin", self.unit_margin),
            ("rounding_error", self.rounding_error),
            ("equality_epsilon", self.equality_epsilon),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::new(format!(
                    "tolerances.{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// LinearMath constant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantsConfig {
    /// Name of the constant used as the "large float" sentinel
    pub large_float_name: String,
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            large_float_name: "BT_LARGE_FLOAT".to_string(),
        }
    }
}

impl ConstantsConfig {
    /// Resolve the configured sentinel through the LinearMath table
    pub fn large_float(&self) -> Result<f64, ConfigError> {
        gdx_linearmath::lookup_f64(&self.large_float_name).ok_or_else(|| {
            ConfigError::new(format!(
                "constants.large_float_name '{}' is not a numeric LinearMath constant",
                self.large_float_name
            ))
        })
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
