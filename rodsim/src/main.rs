use rodsim::{load_scenario_config, run_2d, Scenario};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside the crate's `scenarios/` directory
    #[arg(short, default_value = "spatial.yaml")]
    file_name: String,

    /// Print the computed frames as YAML instead of opening the viewer
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let scenario_cfg = load_scenario_config(&config_path)?;
    let scenario = Scenario::build_scenario(scenario_cfg)
        .with_context(|| format!("failed to build scenario from {}", config_path.display()))?;

    if args.dump {
        print!("{}", serde_yaml::to_string(&scenario.trajectory)?);
        return Ok(());
    }

    run_2d(scenario);

    Ok(())
}
