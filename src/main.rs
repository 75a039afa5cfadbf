use circlesim::{build_simulation, ScenarioConfig};
use circlesim::{bench_collision_sweep, bench_step};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "demo.yaml")]
    file_name: String,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_collision_sweep();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut sim = build_simulation(scenario_cfg);

    println!(
        "running {} bodies in a {} x {} world to t_end = {}",
        sim.bodies().len(),
        sim.bounds.width,
        sim.bounds.height,
        sim.params.t_end
    );

    let h = sim.params.h0;
    let t_end = sim.params.t_end;
    // report roughly once per simulated second
    let report_every = (1.0 / h).round().max(1.0) as usize;

    let mut steps = 0usize;
    while sim.system.t < t_end {
        sim.step(h);
        steps += 1;
        if steps % report_every == 0 {
            let p = sim.system.momentum();
            println!(
                "t = {:7.3}  KE = {:12.2}  |p| = {:12.2}",
                sim.system.t,
                sim.system.kinetic_energy(),
                p.norm()
            );
        }
    }

    let p = sim.system.momentum();
    println!(
        "done after {} steps: t = {:.3}, KE = {:.2}, |p| = {:.2}",
        steps,
        sim.system.t,
        sim.system.kinetic_energy(),
        p.norm()
    );

    Ok(())
}
