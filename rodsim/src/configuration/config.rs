//! Configuration types for loading rod scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – playback options (variant, frame duration, looping)
//! - [`ParametersConfig`] – ellipse axes, sample count and masses
//! - [`TensionConfig`]    – knots of the periodic tension spline (optional)
//! - [`DisplayConfig`]    – title and credit text (optional)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   variant: "spatial"       # or "basic"
//!   frame_duration_ms: 100.0 # optional, defaults per variant
//!   looping: false
//!
//! parameters:
//!   a: 2.0                   # semi-major axis (vertical)
//!   b: 1.0                   # semi-minor axis (horizontal)
//!   n_points: 100            # samples over one revolution
//!   m1: 1.0                  # mass on the ellipse
//!   m2: 1.0                  # mass on the rail
//!
//! tension:
//!   turns: [0.0, 0.25, 0.5, 0.75, 1.0]   # knot angles as fractions of 2π
//!   values: [-1.0, 1.0, 9.0, 1.0, -1.0]
//!   scale: 0.5
//!
//! display:
//!   title: "Rigid Body Spatial Analysis: Two Masses + Rod System"
//!   credit: "Created by Min-A Cho Zeno, PhD"
//! ```
//!
//! The scenario builder then maps this configuration into its runtime
//! representation, see [`crate::simulation::scenario::Scenario`].

use serde::Deserialize;

/// Which of the two animation styles to render
/// variant: "basic"` or `variant: "spatial"
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantConfig {
    #[serde(rename = "basic")] // plain markers, no tension arrow
    Basic,

    #[serde(rename = "spatial")] // rotated markers, tension arrow and credit line
    Spatial,
}

/// Playback configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub variant: VariantConfig,
    pub frame_duration_ms: Option<f64>, // time each frame stays on screen while playing
    #[serde(default)]
    pub looping: bool, // wrap to frame 0 after the last frame instead of stopping
}

/// Geometry, sampling and masses
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub a: f64,          // semi-major axis
    pub b: f64,          // semi-minor axis
    pub n_points: usize, // number of samples in [0, 2π]
    #[serde(default = "unit_mass")]
    pub m1: f64,
    #[serde(default = "unit_mass")]
    pub m2: f64,
}

fn unit_mass() -> f64 {
    1.0
}

/// Knots for the periodic tension spline.
/// `turns` are angles expressed as a fraction of one revolution.
#[derive(Deserialize, Debug, Clone)]
pub struct TensionConfig {
    pub turns: Vec<f64>,
    pub values: Vec<f64>,
    pub scale: Option<f64>, // arrow length per unit of tension
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DisplayConfig {
    pub title: Option<String>,
    pub credit: Option<String>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub tension: Option<TensionConfig>, // falls back to the built-in knots for "spatial"
    #[serde(default)]
    pub display: DisplayConfig,
}
