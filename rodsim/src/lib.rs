pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{NVec2, RodFrame, TensionArrow, Trajectory};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::spline::PeriodicCubicSpline;
pub use simulation::tension::{tension_arrow, TensionProfile};
pub use simulation::trajectory::{center_of_mass, ellipse_point, linspace, rail_point, sample_trajectory};
pub use simulation::scenario::{Captions, Scenario};

pub use configuration::config::{DisplayConfig, EngineConfig, ParametersConfig, ScenarioConfig, TensionConfig, VariantConfig};
pub use configuration::load_scenario_config;

pub use visualization::playback::{Playback, PlaybackAction};
pub use visualization::rodsim_vis2d::run_2d;
