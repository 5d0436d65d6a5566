//! Configuration types for grid dimensions.

use serde::{Deserialize, Serialize};

/// Grid dimensions, fixed for the lifetime of the engine.
///
/// Dimensions are signed so hand-written config files can carry
/// non-positive values into [`GridConfig::validate`] instead of failing
/// opaquely during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells (columns).
    pub width: i32,
    /// Grid height in cells (rows).
    pub height: i32,
}

impl Default for GridConfig {
    /// The 50x30 board of the original desktop application.
    fn default() -> Self {
        Self {
            width: 50,
            height: 30,
        }
    }
}

impl GridConfig {
    /// Create a validated configuration.
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        let config = Self { width, height };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Get total grid size (width * height).
    ///
    /// Only meaningful on a validated configuration.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}
