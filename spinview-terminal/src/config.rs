/// Validated view configuration
use serde::Deserialize;
use std::fs;
use std::path::Path;

use spinview_core::{Error, Result};

/// View configuration, loaded from an optional JSON file. Every recognized
/// option has a default; unknown fields are rejected; loaded values are
/// bounds-checked before the viewer starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Canvas size in cells (columns, rows).
    pub resolution: [u16; 2],
    /// Target frame rate.
    pub fps: u32,
    /// Degrees applied per frame per held rotation key.
    pub rotation_speed: f64,
    /// Upscale change per wheel step.
    pub scroll_sensitivity: f64,
    /// Vertex marker radius in cells.
    pub vertex_size: u16,
    pub display_vertices: bool,
    pub display_edges: bool,
    pub display_info: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            resolution: [96, 48],
            fps: 30,
            rotation_speed: 2.0,
            scroll_sensitivity: 1.0,
            vertex_size: 1,
            display_vertices: true,
            display_edges: true,
            display_info: true,
        }
    }
}

impl ViewConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for axis in self.resolution {
            if !(16..=1024).contains(&axis) {
                return Err(Error::InvalidConfig(format!(
                    "resolution components must be in 16..=1024, got {axis}"
                )));
            }
        }
        if !(1..=240).contains(&self.fps) {
            return Err(Error::InvalidConfig(format!(
                "fps must be in 1..=240, got {}",
                self.fps
            )));
        }
        if !self.rotation_speed.is_finite() || self.rotation_speed <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "rotation_speed must be positive and finite, got {}",
                self.rotation_speed
            )));
        }
        if !self.scroll_sensitivity.is_finite() || self.scroll_sensitivity <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "scroll_sensitivity must be positive and finite, got {}",
                self.scroll_sensitivity
            )));
        }
        if self.vertex_size > 8 {
            return Err(Error::InvalidConfig(format!(
                "vertex_size must be at most 8, got {}",
                self.vertex_size
            )));
        }
        Ok(())
    }

    /// Screen-space center of the canvas.
    pub fn center(&self) -> (f64, f64) {
        (
            self.resolution[0] as f64 / 2.0,
            self.resolution[1] as f64 / 2.0,
        )
    }

    /// Initial world-to-screen scale: an eighth of the horizontal resolution.
    pub fn initial_upscale(&self) -> f64 {
        (self.resolution[0] as f64 / 8.0).round()
    }
}
