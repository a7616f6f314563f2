use ballsim::{ScenarioConfig, Scenario};
use ballsim::export_scenario;
use ballsim::{bench_advance, bench_collisions};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    #[arg(long)]
    system_count: Option<usize>,
    #[arg(long)]
    system_output_start: Option<usize>,
    #[arg(long)]
    system_output_end: Option<usize>,
    #[arg(long)]
    x_shift: Option<f64>,
    #[arg(long)]
    duration: Option<f64>,
    #[arg(long, num_args = 2, value_names = ["GX", "GY"], allow_negative_numbers = true)]
    gravity: Option<Vec<f64>>,
    #[arg(long)]
    sliding_friction: Option<f64>,
    #[arg(long)]
    rolling_friction: Option<f64>,
    #[arg(long)]
    time_scale: Option<f64>,
    #[arg(long)]
    dt: Option<f64>,

    /// Directory the CSV series are written to
    #[arg(long, default_value = "outputs")]
    out_dir: PathBuf,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// scenario files live next to the crate unless the path exists as given
fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let given = Path::new(file_name);
    if given.exists() {
        return given.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// command line flags win over the file
fn apply_overrides(cfg: &mut ScenarioConfig, args: &Args) {
    if let Some(n) = args.system_count { cfg.ensemble.system_count = n; }
    if let Some(n) = args.system_output_start { cfg.ensemble.output_start = n; }
    if let Some(n) = args.system_output_end { cfg.ensemble.output_end = n; }
    if let Some(s) = args.x_shift { cfg.ensemble.shift = s; }
    if let Some(d) = args.duration { cfg.run.duration = d; }
    if let Some(dt) = args.dt { cfg.run.dt = dt; }
    if let Some(g) = &args.gravity {
        cfg.parameters.gravity = [g[0], g[1]];
    }
    if let Some(f) = args.sliding_friction { cfg.parameters.sliding_friction = f; }
    if let Some(f) = args.rolling_friction { cfg.parameters.rolling_friction = f; }
    if let Some(k) = args.time_scale { cfg.parameters.time_scale = k; }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_advance();
        bench_collisions();
        return Ok(());
    }

    let path = resolve_scenario_path(&args.file_name);
    let mut cfg = ScenarioConfig::from_path(&path)?;
    apply_overrides(&mut cfg, &args);

    let mut scenario = Scenario::build_scenario(&cfg).context("invalid scenario")?;
    println!(
        "ballsim: {} system(s), {} bodies each, {} steps of dt = {}",
        scenario.systems().len(),
        cfg.bodies.len(),
        scenario.steps,
        scenario.dt
    );

    let steps = scenario.run()?;

    for (i, sim) in scenario.systems().iter().enumerate() {
        println!("system {i}: {steps} steps, t = {:.4}, kinetic energy = {:.6}", sim.time(), sim.kinetic_energy());
        for body in sim.bodies() {
            println!(
                "  {:>4}: x = ({:.6}, {:.6}), v = ({:.6}, {:.6}), contact = {}",
                body.id(),
                body.center.x,
                body.center.y,
                body.velocity.x,
                body.velocity.y,
                body.is_colliding()
            );
        }
    }

    let written = export_scenario(&scenario, &args.out_dir)?;
    println!("wrote {} series to {}", written.len(), args.out_dir.display());

    Ok(())
}
