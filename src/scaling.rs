use serde::{Deserialize, Serialize};

use crate::errors::{ConversionError, ConversionResult};

// @module: Source to target resolution mapping for positioned text

/// Resolution the broadcaster authors cue positions in
pub const DEFAULT_SOURCE_WIDTH: f64 = 1600.0;
pub const DEFAULT_SOURCE_HEIGHT: f64 = 900.0;

/// Resolution of the generated ASS script
pub const DEFAULT_TARGET_WIDTH: f64 = 640.0;
pub const DEFAULT_TARGET_HEIGHT: f64 = 360.0;

/// Describes a linear mapping from one screen resolution to another.
///
/// Each axis is scaled independently, so aspect ratio changes are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingDescriptor {
    /// Width of the source coordinate space
    pub source_width: f64,

    /// Height of the source coordinate space
    pub source_height: f64,

    /// Width of the target coordinate space
    pub target_width: f64,

    /// Height of the target coordinate space
    pub target_height: f64,
}

impl ScalingDescriptor {
    // @creates: Validated descriptor
    // @validates: Every dimension is finite and positive
    pub fn new(
        source_width: f64,
        source_height: f64,
        target_width: f64,
        target_height: f64,
    ) -> ConversionResult<Self> {
        let descriptor = Self {
            source_width,
            source_height,
            target_width,
            target_height,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check that every dimension is finite and positive
    pub fn validate(&self) -> ConversionResult<()> {
        let dimensions = [
            ("source_width", self.source_width),
            ("source_height", self.source_height),
            ("target_width", self.target_width),
            ("target_height", self.target_height),
        ];

        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConversionError::InvalidScaling(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Horizontal scale factor
    pub fn scale_x(&self) -> f64 {
        self.target_width / self.source_width
    }

    /// Vertical scale factor
    pub fn scale_y(&self) -> f64 {
        self.target_height / self.source_height
    }

    /// Map a source point to integer target coordinates, rounding each axis
    pub fn scale(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x * self.scale_x()).round() as i64,
            (y * self.scale_y()).round() as i64,
        )
    }

    /// Target resolution rounded to whole pixels, as written to script headers
    pub fn target_resolution(&self) -> (u32, u32) {
        (
            self.target_width.round() as u32,
            self.target_height.round() as u32,
        )
    }
}

impl Default for ScalingDescriptor {
    fn default() -> Self {
        Self {
            source_width: DEFAULT_SOURCE_WIDTH,
            source_height: DEFAULT_SOURCE_HEIGHT,
            target_width: DEFAULT_TARGET_WIDTH,
            target_height: DEFAULT_TARGET_HEIGHT,
        }
    }
}
