pub mod config;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use config::ScenarioConfig;

/// Read and parse a scenario YAML file
pub fn load_scenario_config(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig =
        serde_yaml::from_reader(reader).with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(cfg)
}
