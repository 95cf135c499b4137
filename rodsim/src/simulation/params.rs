//! Geometric parameters for the rod system
//!
//! `Parameters` holds runtime settings:
//! - ellipse semi-axes `a` (vertical) and `b` (horizontal),
//! - number of samples over one revolution,
//! - the two point masses

use anyhow::{ensure, Result};

use crate::configuration::config::ParametersConfig;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub a: f64, // semi-major axis
    pub b: f64, // semi-minor axis, also the rail amplitude
    pub n_points: usize, // samples in [0, 2π], endpoints included
    pub m1: f64, // mass on the ellipse
    pub m2: f64, // mass on the rail
}

impl Parameters {
    pub fn from_config(cfg: &ParametersConfig) -> Result<Self> {
        let params = Self {
            a: cfg.a,
            b: cfg.b,
            n_points: cfg.n_points,
            m1: cfg.m1,
            m2: cfg.m2,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.a > 0.0, "semi-major axis a must be positive, got {}", self.a);
        ensure!(self.b > 0.0, "semi-minor axis b must be positive, got {}", self.b);
        ensure!(self.n_points >= 2, "n_points must be at least 2, got {}", self.n_points);
        ensure!(self.m1 > 0.0 && self.m2 > 0.0, "masses must be positive, got m1 = {}, m2 = {}", self.m1, self.m2);
        Ok(())
    }

    /// Half length of the drawn rail, 1.5 times the slider amplitude
    pub fn rail_half_length(&self) -> f64 {
        1.5 * self.b
    }
}
