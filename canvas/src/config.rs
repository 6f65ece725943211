//! Editor configuration: zoom limits, grid spacing, generator parameters and
//! the persistence key.
//!
//! Every field has a default, so a host may pass a partial JSON document (or
//! nothing at all). [`EditorConfig::from_json`] validates the result before
//! handing it out; the engine assumes a validated config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    GRID_STEP, MAX_SCALE, MIN_SCALE, POLYGON_FILL, POLYGON_HEIGHT, POLYGON_RADIUS, POLYGON_WIDTH, STORAGE_KEY,
    ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};

/// Error returned by [`EditorConfig::from_json`] and [`EditorConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config document is not valid JSON or has wrongly typed fields.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    /// Scale bounds are not finite, not positive, or inverted.
    #[error("invalid zoom bounds: min {min}, max {max}")]
    InvalidZoomBounds { min: f64, max: f64 },
    /// A zoom factor points the wrong way (`in` must be > 1, `out` in (0, 1)).
    #[error("invalid zoom factor for {direction}: {factor}")]
    InvalidZoomFactor { direction: &'static str, factor: f64 },
    /// Grid spacing must be finite and positive.
    #[error("invalid grid step: {0}")]
    InvalidGridStep(f64),
    /// A generator min/max pair is empty or degenerate.
    #[error("invalid generator range for {field}")]
    InvalidRange { field: &'static str },
}

/// Scale bounds and per-notch zoom factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

/// Background grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Line spacing in world units.
    pub step: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { step: GRID_STEP }
    }
}

/// Parameters for random polygon generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fewest polygons produced per generation (inclusive).
    pub count_min: usize,
    /// Most polygons produced per generation (inclusive).
    pub count_max: usize,
    /// Fewest vertices per polygon (inclusive).
    pub vertices_min: usize,
    /// Most vertices per polygon (inclusive).
    pub vertices_max: usize,
    pub width: f64,
    pub height: f64,
    /// Nominal vertex distance from the bounding box centre.
    pub radius: f64,
    /// Upper bound of the random angle added to each vertex, in radians.
    pub angle_jitter: f64,
    /// Lower bound of the per-axis radius multiplier.
    pub radius_jitter_min: f64,
    /// Upper bound (exclusive) of the per-axis radius multiplier.
    pub radius_jitter_max: f64,
    pub fill: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count_min: 5,
            count_max: 20,
            vertices_min: 5,
            vertices_max: 8,
            width: POLYGON_WIDTH,
            height: POLYGON_HEIGHT,
            radius: POLYGON_RADIUS,
            angle_jitter: 0.3,
            radius_jitter_min: 0.8,
            radius_jitter_max: 1.2,
            fill: POLYGON_FILL.to_owned(),
        }
    }
}

/// Top-level editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// localStorage key for the saved snapshot.
    pub storage_key: String,
    pub zoom: ZoomConfig,
    pub grid: GridConfig,
    pub generator: GeneratorConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            zoom: ZoomConfig::default(),
            grid: GridConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON config document and validate it.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and the other
    /// variants when [`Self::validate`] rejects a value.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric setting for a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = &self.zoom;
        if !(zoom.min_scale.is_finite() && zoom.max_scale.is_finite())
            || zoom.min_scale <= 0.0
            || zoom.min_scale > zoom.max_scale
        {
            return Err(ConfigError::InvalidZoomBounds { min: zoom.min_scale, max: zoom.max_scale });
        }
        if !zoom.zoom_in_factor.is_finite() || zoom.zoom_in_factor <= 1.0 {
            return Err(ConfigError::InvalidZoomFactor { direction: "in", factor: zoom.zoom_in_factor });
        }
        if !zoom.zoom_out_factor.is_finite() || zoom.zoom_out_factor <= 0.0 || zoom.zoom_out_factor >= 1.0 {
            return Err(ConfigError::InvalidZoomFactor { direction: "out", factor: zoom.zoom_out_factor });
        }
        if !self.grid.step.is_finite() || self.grid.step <= 0.0 {
            return Err(ConfigError::InvalidGridStep(self.grid.step));
        }

        let generator = &self.generator;
        if generator.count_min > generator.count_max {
            return Err(ConfigError::InvalidRange { field: "count" });
        }
        if generator.vertices_min < 3 || generator.vertices_min > generator.vertices_max {
            return Err(ConfigError::InvalidRange { field: "vertices" });
        }
        if !(generator.width > 0.0 && generator.height > 0.0 && generator.radius > 0.0) {
            return Err(ConfigError::InvalidRange { field: "size" });
        }
        if !(generator.angle_jitter >= 0.0 && generator.angle_jitter.is_finite()) {
            return Err(ConfigError::InvalidRange { field: "angle_jitter" });
        }
        if !(generator.radius_jitter_min > 0.0 && generator.radius_jitter_min < generator.radius_jitter_max)
            || !generator.radius_jitter_max.is_finite()
        {
            return Err(ConfigError::InvalidRange { field: "radius_jitter" });
        }
        Ok(())
    }
}
