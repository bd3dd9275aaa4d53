use log::{ debug, info };
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };
use thiserror::Error;

/// Score a business name must exceed to count as owner-occupied.
pub const DEFAULT_OWNER_MATCH_THRESHOLD: f64 = 80.0;

/// Per-axis coordinate deviation accepted by spatial lookups.
pub const DEFAULT_SPATIAL_TOLERANCE: f64 = 0.0001;

pub const ENV_OWNER_THRESHOLD: &str = "DEEDTRACE_OWNER_THRESHOLD";
pub const ENV_SPATIAL_TOLERANCE: &str = "DEEDTRACE_SPATIAL_TOLERANCE";
pub const ENV_DATA_FILE: &str = "DEEDTRACE_DATA_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Owner match threshold must be within [0, 100], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("Spatial tolerance must be a finite, non-negative number, got {0}")]
    InvalidTolerance(f64),

    #[error("Environment variable {name} is not a number: {value}")]
    InvalidEnvVar { name: String, value: String },
}

/// Tunables for classification and spatial lookup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Similarity score (0-100) a business name must strictly exceed to be owner-occupied
    pub owner_match_threshold: f64,

    /// Maximum absolute lat/lon deviation for a spatial hit
    pub spatial_tolerance: f64,

    /// Property data file; the embedded data set is used when absent
    pub data_file: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            owner_match_threshold: DEFAULT_OWNER_MATCH_THRESHOLD,
            spatial_tolerance: DEFAULT_SPATIAL_TOLERANCE,
            data_file: None,
        }
    }
}

impl ResolverConfig {
    /// Build a validated configuration from explicit values
    pub fn new(owner_match_threshold: f64, spatial_tolerance: f64) -> Result<Self, ConfigError> {
        let config = ResolverConfig {
            owner_match_threshold,
            spatial_tolerance,
            data_file: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: ResolverConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        info!("Loaded resolver config from {}", path.display());
        Ok(config)
    }

    /// Apply `DEEDTRACE_*` environment overrides on top of the current values
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(threshold) = read_env_f64(ENV_OWNER_THRESHOLD)? {
            debug!("Owner match threshold overridden from environment: {}", threshold);
            self.owner_match_threshold = threshold;
        }
        if let Some(tolerance) = read_env_f64(ENV_SPATIAL_TOLERANCE)? {
            debug!("Spatial tolerance overridden from environment: {}", tolerance);
            self.spatial_tolerance = tolerance;
        }
        if let Ok(path) = std::env::var(ENV_DATA_FILE) {
            if !path.trim().is_empty() {
                debug!("Data file overridden from environment: {}", path);
                self.data_file = Some(PathBuf::from(path));
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject out-of-range values instead of clamping them
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_threshold(self.owner_match_threshold)?;
        validate_tolerance(self.spatial_tolerance)?;
        Ok(())
    }
}

pub fn validate_threshold(threshold: f64) -> Result<(), ConfigError> {
    if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
        return Err(ConfigError::ThresholdOutOfRange(threshold));
    }
    Ok(())
}

pub fn validate_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ConfigError::InvalidTolerance(tolerance));
    }
    Ok(())
}

fn read_env_f64(name: &str) -> Result<Option<f64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => {
            let parsed = value.trim().parse::<f64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
            })?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
