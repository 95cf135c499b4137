//! Illustrative rod tension
//!
//! The tension is not computed from the dynamics: it is a smooth periodic
//! signal through a handful of knots, used only to size and orient the
//! arrow drawn at `m1`.

use std::f64::consts::TAU;

use anyhow::{ensure, Result};

use crate::configuration::config::TensionConfig;
use crate::simulation::spline::PeriodicCubicSpline;
use crate::simulation::states::{NVec2, TensionArrow};

/// Knot angles as fractions of a revolution: 0, π/2, π, 3π/2, 2π
pub const DEFAULT_TURNS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
pub const DEFAULT_VALUES: [f64; 5] = [-1.0, 1.0, 9.0, 1.0, -1.0];
pub const DEFAULT_SCALE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct TensionProfile {
    pub spline: PeriodicCubicSpline,
    pub scale: f64, // arrow length per unit of tension
}

impl TensionProfile {
    pub fn new(turns: &[f64], values: &[f64], scale: f64) -> Result<Self> {
        ensure!(scale.is_finite() && scale >= 0.0, "tension scale must be non-negative, got {scale}");
        let angles: Vec<f64> = turns.iter().map(|turn| turn * TAU).collect();
        let spline = PeriodicCubicSpline::fit(&angles, values)?;
        Ok(Self { spline, scale })
    }

    pub fn from_config(cfg: &TensionConfig) -> Result<Self> {
        Self::new(&cfg.turns, &cfg.values, cfg.scale.unwrap_or(DEFAULT_SCALE))
    }

    pub fn magnitude(&self, t: f64) -> f64 {
        self.spline.eval(t)
    }

    /// Arrow at `m1` for the angle `t`
    pub fn arrow(&self, t: f64, m1: NVec2, m2: NVec2) -> TensionArrow {
        tension_arrow(m1, m2, self.magnitude(t), self.scale)
    }

    /// Built-in knots: -1, 1, 9, 1, -1 at quarter turns
    pub fn builtin() -> Result<Self> {
        Self::new(&DEFAULT_TURNS, &DEFAULT_VALUES, DEFAULT_SCALE)
    }
}

/// Tension arrow whose head rests on `m1`.
///
/// Positive tension pulls `m1` toward `m2`, so `d` (tail to head) points
/// along `m2 - m1`; negative tension points along `m1 - m2`. The vector has
/// length `scale * |magnitude|`; a zero-length rod yields a zero vector.
pub fn tension_arrow(m1: NVec2, m2: NVec2, magnitude: f64, scale: f64) -> TensionArrow {
    let dir = if magnitude > 0.0 { m2 - m1 } else { m1 - m2 };
    let len = dir.norm();

    let d = if len > f64::EPSILON {
        dir * (scale * magnitude.abs() / len)
    } else {
        NVec2::zeros()
    };

    TensionArrow {
        head: m1,
        d,
        magnitude,
    }
}

/// Label drawn at the arrow tail. Before playback starts only `T` is shown.
pub fn tension_label(arrow: &TensionArrow, started: bool) -> String {
    if started {
        format!("T: {:.3}", arrow.magnitude)
    } else {
        "T".to_string()
    }
}
