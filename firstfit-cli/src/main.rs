use anyhow::{bail, Context, Result};
use firstfit_core::Simulation;
use serde::Deserialize;
use std::{env, path::Path};

#[derive(Deserialize)]
struct Scenario {
    blocks: Vec<usize>,
    processes: Vec<usize>,
}

fn run(file_name: &str) -> Result<()> {
    let path = Path::new(file_name);
    let text = std::fs::read_to_string(path)?;
    let scenario: Scenario =
        serde_json::from_str(&text).with_context(|| format!("bad scenario file {file_name}"))?;
    if scenario.processes.is_empty() {
        bail!("scenario has no processes");
    }

    let mut sim = Simulation::new(&scenario.blocks, scenario.processes.len())?;
    for size in scenario.processes {
        let result = sim.submit_process(size)?;
        println!("{result}");
    }
    println!("{}", sim.final_summary());
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<_> = env::args().collect();

    // Usage: ffit <scenario.json>
    if args.len() > 1 {
        let time = std::time::SystemTime::now();
        match run(&args[1]) {
            Err(e) => println!("{e}"),
            _ => println!("Simulation finished in {}ms", time.elapsed()?.as_millis()),
        }
    } else {
        println!("Usage: ffit <scenario.json>");
    }

    Ok(())
}
