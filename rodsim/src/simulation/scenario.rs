//! Build fully-initialized rod scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - playback settings (`Engine`)
//! - geometric parameters (`Parameters`)
//! - the sampled trajectory (`Trajectory`), one `RodFrame` per animation frame
//! - title and credit text (`Captions`)
//!
//! The scenario is inserted into Bevy as a `Resource` and read by the
//! playback and drawing systems

use anyhow::{Context, Result};
use bevy::prelude::Resource;

use crate::configuration::config::{ScenarioConfig, VariantConfig};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::Trajectory;
use crate::simulation::tension::TensionProfile;
use crate::simulation::trajectory::sample_trajectory;

pub const BASIC_TITLE: &str = "Two Masses Rigid Body Rotation Problem Simulation";
pub const SPATIAL_TITLE: &str = "Rigid Body Spatial Analysis: Two Masses + Rod System";

#[derive(Debug, Clone)]
pub struct Captions {
    pub title: String,
    pub credit: Option<String>,
}

/// Bevy resource representing a fully-initialized rod scenario
///
/// All frames are computed up front; the viewer only indexes into
/// `trajectory.frames`
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub tension: Option<TensionProfile>,
    pub trajectory: Trajectory,
    pub captions: Captions,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters::from_config(&cfg.parameters).context("invalid parameters")?;
        let engine = Engine::from_config(&cfg.engine, parameters.n_points).context("invalid engine settings")?;

        // Tension only drives the spatial variant's arrow
        let tension = match (engine.variant, &cfg.tension) {
            (VariantConfig::Basic, _) => None,
            (VariantConfig::Spatial, Some(t_cfg)) => {
                Some(TensionProfile::from_config(t_cfg).context("invalid tension knots")?)
            }
            (VariantConfig::Spatial, None) => Some(TensionProfile::builtin()?),
        };

        let trajectory = sample_trajectory(&parameters, tension.as_ref());

        let title = cfg.display.title.unwrap_or_else(|| {
            match engine.variant {
                VariantConfig::Basic => BASIC_TITLE,
                VariantConfig::Spatial => SPATIAL_TITLE,
            }
            .to_string()
        });

        Ok(Self {
            engine,
            parameters,
            tension,
            trajectory,
            captions: Captions {
                title,
                credit: cfg.display.credit,
            },
        })
    }
}
