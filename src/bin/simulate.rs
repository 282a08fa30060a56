//! Draw from a reward table many times and compare outcome shares with the
//! configured weights.
//!
//!   simulate -t treasure -n 500 --seed 42

use clash_rewards::config::EngineConfig;
use clash_rewards::simulator::{run_simulation, SimConfig, SimTable};
use clash_rewards::RewardEngine;
use std::process;

const USAGE: &str = "\
usage: simulate [-n DRAWS] [-t spin|treasure] [-s SEED] [-g GOLD] [-c CONFIG.json] [--json]

  -n, --draws    draws to perform (10000)
  -t, --table    table to draw from (spin)
  -s, --seed     seed for a reproducible run
  -g, --gold     gold the simulated player starts with (0)
  -c, --config   reward config file instead of the built-in tables
      --json     also write the report as JSON";

#[derive(Debug)]
struct Options {
    sim: SimConfig,
    config_path: Option<String>,
    json: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options {
        sim: SimConfig::default(),
        config_path: None,
        json: false,
    };

    while let Some(flag) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{} needs a value", flag));
        match flag.as_str() {
            "-n" | "--draws" => {
                let v = value()?;
                opts.sim.num_draws = v.parse().map_err(|_| format!("bad draw count '{}'", v))?;
            }
            "-t" | "--table" => {
                let v = value()?;
                opts.sim.table = SimTable::parse(&v).ok_or_else(|| format!("unknown table '{}'", v))?;
            }
            "-s" | "--seed" => {
                let v = value()?;
                opts.sim.seed = Some(v.parse().map_err(|_| format!("bad seed '{}'", v))?);
            }
            "-g" | "--gold" => {
                let v = value()?;
                opts.sim.starting_gold = v.parse().map_err(|_| format!("bad gold '{}'", v))?;
            }
            "-c" | "--config" => opts.config_path = Some(value()?),
            "--json" => opts.json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => return Err(format!("unknown option '{}'", other)),
        }
    }
    Ok(opts)
}

fn main() {
    let opts = parse_options(std::env::args().skip(1)).unwrap_or_else(|e| {
        eprintln!("{}\n\n{}", e, USAGE);
        process::exit(2);
    });

    let loaded = match &opts.config_path {
        Some(path) => EngineConfig::load(path),
        None => EngineConfig::builtin(),
    };
    let engine = loaded.map(RewardEngine::new).unwrap_or_else(|e| {
        eprintln!("invalid reward config: {}", e);
        process::exit(1);
    });

    let report = run_simulation(&engine, &opts.sim).unwrap_or_else(|e| {
        eprintln!("simulation failed: {}", e);
        process::exit(1);
    });
    println!("{}", report.to_text());

    if opts.json {
        let filename = format!(
            "{}_sim_{}.json",
            opts.sim.table.name(),
            chrono::Utc::now().format("%Y%m%dT%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("could not write {}: {}", filename, e);
        } else {
            println!("wrote {}", filename);
        }
    }
}
