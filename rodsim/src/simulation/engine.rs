//! High-level runtime playback settings
//!
//! Selects the animation variant, how long each frame is shown and whether
//! playback wraps around, used when building and running a `Scenario`

use anyhow::{ensure, Result};

use crate::configuration::config::{EngineConfig, VariantConfig};

/// Frame duration of the spatial variant when the YAML leaves it out
pub const SPATIAL_FRAME_MS: f64 = 100.0;
/// Accepted frame duration range, one millisecond to one minute
pub const MIN_FRAME_MS: f64 = 1.0;
pub const MAX_FRAME_MS: f64 = 60_000.0;

#[derive(Debug, Clone)]
pub struct Engine {
    pub variant: VariantConfig,
    pub frame_duration: f64, // seconds per frame
    pub looping: bool,
}

impl Engine {
    /// The basic variant shows each frame for `n_points / 2` milliseconds
    pub fn from_config(cfg: &EngineConfig, n_points: usize) -> Result<Self> {
        let ms = cfg.frame_duration_ms.unwrap_or(match cfg.variant {
            VariantConfig::Basic => n_points as f64 / 2.0,
            VariantConfig::Spatial => SPATIAL_FRAME_MS,
        });
        ensure!(
            (MIN_FRAME_MS..=MAX_FRAME_MS).contains(&ms),
            "frame_duration_ms must be within [{MIN_FRAME_MS}, {MAX_FRAME_MS}], got {ms}"
        );

        Ok(Self {
            variant: cfg.variant,
            frame_duration: ms / 1000.0,
            looping: cfg.looping,
        })
    }

    pub fn is_spatial(&self) -> bool {
        self.variant == VariantConfig::Spatial
    }
}
