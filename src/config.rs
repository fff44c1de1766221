// config.rs - Board constants, fixed at construction
//
// Defaults reproduce the classic board: 10x10 tiles of 40 cells,
// a 16-cell channel and a 9.0 height ceiling.

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Stability limit of the 5-point stencil with unit spacing (1/sqrt 2).
pub const STABILITY_LIMIT: f32 = std::f32::consts::FRAC_1_SQRT_2;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("widget_size must be at least 1")]
    ZeroWidgetSize,
    #[error("grids must be at least 1")]
    ZeroGrids,
    #[error("lake_width {lake_width} must be between 1 and widget_size {widget_size}")]
    LakeWidth { lake_width: u32, widget_size: u32 },
    #[error("max_height {0} must be finite and positive")]
    MaxHeight(f32),
    #[error("velocity {0} must be finite, positive and below 1/sqrt(2)")]
    UnstableVelocity(f32),
    #[error("brightness range {min}..={max} is empty")]
    BrightnessRange { min: u8, max: u8 },
}

#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LakeConfig {
    /// Fine cells per tile side
    pub widget_size: u32,
    /// Tiles per board side
    pub grids: u32,
    /// Pixels reserved right of the canvas
    pub sidebar_width: u32,
    pub max_height: f32,
    pub lake_width: u32,
    /// Wave propagation speed (cells per step)
    pub velocity: f32,
    pub min_brightness: u8,
    pub max_brightness: u8,
}

impl Default for LakeConfig {
    fn default() -> Self {
        Self {
            widget_size: 40,
            grids: 10,
            sidebar_width: 80,
            max_height: 9.0,
            lake_width: 16,
            velocity: 0.507,
            min_brightness: 0,
            max_brightness: 255,
        }
    }
}

#[wasm_bindgen]
impl LakeConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fine cells per board side
    pub fn canvas_size(&self) -> u32 {
        self.widget_size * self.grids
    }

    /// Rest height of every cell
    pub fn start_height(&self) -> f32 {
        self.max_height / 2.0
    }
}

impl LakeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.widget_size == 0 {
            return Err(ConfigError::ZeroWidgetSize);
        }
        if self.grids == 0 {
            return Err(ConfigError::ZeroGrids);
        }
        if self.lake_width == 0 || self.lake_width > self.widget_size {
            return Err(ConfigError::LakeWidth {
                lake_width: self.lake_width,
                widget_size: self.widget_size,
            });
        }
        if !self.max_height.is_finite() || self.max_height <= 0.0 {
            return Err(ConfigError::MaxHeight(self.max_height));
        }
        // NaN fails every comparison, so test for the good range
        if !(self.velocity > 0.0 && self.velocity < STABILITY_LIMIT) {
            return Err(ConfigError::UnstableVelocity(self.velocity));
        }
        if self.min_brightness > self.max_brightness {
            return Err(ConfigError::BrightnessRange {
                min: self.min_brightness,
                max: self.max_brightness,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.canvas_size() as usize
    }

    #[inline]
    pub fn tile(&self) -> usize {
        self.widget_size as usize
    }

    /// Channel lower bound within a tile, exclusive
    #[inline]
    pub fn inner(&self) -> f32 {
        (self.widget_size as f32 - self.lake_width as f32) / 2.0
    }

    /// Channel upper bound within a tile, exclusive
    #[inline]
    pub fn outer(&self) -> f32 {
        (self.widget_size as f32 + self.lake_width as f32) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_valid() {
        let cfg = LakeConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.canvas_size(), 400);
        assert_eq!(cfg.start_height(), 4.5);
        assert_eq!(cfg.inner(), 12.0);
        assert_eq!(cfg.outer(), 28.0);
    }

    #[test]
    fn rejects_velocity_at_stability_limit() {
        let cfg = LakeConfig { velocity: STABILITY_LIMIT, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::UnstableVelocity(STABILITY_LIMIT)));

        let cfg = LakeConfig { velocity: f32::NAN, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::UnstableVelocity(_))));
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let cfg = LakeConfig { widget_size: 0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWidgetSize));

        let cfg = LakeConfig { grids: 0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroGrids));

        let cfg = LakeConfig { lake_width: 41, ..Default::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::LakeWidth { lake_width: 41, widget_size: 40 })
        );
    }

    #[test]
    fn rejects_bad_height_and_brightness() {
        let cfg = LakeConfig { max_height: -1.0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::MaxHeight(-1.0)));

        let cfg = LakeConfig { min_brightness: 200, max_brightness: 100, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::BrightnessRange { min: 200, max: 100 }));
    }

    #[test]
    fn error_message_names_value() {
        let msg = ConfigError::UnstableVelocity(0.9).to_string();
        assert!(msg.contains("0.9"), "{msg}");
    }

    proptest! {
        #[test]
        fn prop_velocity_validity_tracks_limit(v in -2.0f32..2.0) {
            let cfg = LakeConfig { velocity: v, ..Default::default() };
            prop_assert_eq!(cfg.validate().is_ok(), v > 0.0 && v < STABILITY_LIMIT);
        }
    }
}
