//! Balance simulator CLI.
//!
//! Run Monte Carlo batches to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 --seed 42 # Reproducible batch
//!   cargo run --bin simulate -- --race dwarf     # Pin the race

use caravan::catalog::Catalog;
use caravan::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let catalog = Catalog::standard();
    if let Err(err) = catalog.validate() {
        eprintln!("Catalog is malformed: {}", err);
        std::process::exit(1);
    }

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args, &catalog);

    println!("╔═══════════════════════════════════════════════╗");
    println!("║          CARAVAN BALANCE SIMULATOR            ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:       {}", config.num_runs);
    if let Some(seed) = config.seed {
        println!("  Seed:       {}", seed);
    }
    if let Some(race) = config.race {
        println!("  Race:       {}", catalog.races[race].name);
    }
    if let Some(class) = config.class {
        println!("  Class:      {}", catalog.classes[class].name);
    }
    println!("  Flee floor: {} health", config.flee_health_floor);
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => eprintln!("Failed to write JSON report: {}", err),
        }
    }
}

fn parse_args(args: &[String], catalog: &Catalog) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1_000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--race" => {
                if i + 1 < args.len() {
                    config.race = catalog.race_id(&args[i + 1]);
                    if config.race.is_none() {
                        eprintln!("Unknown race: {}", args[i + 1]);
                        std::process::exit(1);
                    }
                    i += 1;
                }
            }
            "--class" => {
                if i + 1 < args.len() {
                    config.class = catalog.class_id(&args[i + 1]);
                    if config.class.is_none() {
                        eprintln!("Unknown class: {}", args[i + 1]);
                        std::process::exit(1);
                    }
                    i += 1;
                }
            }
            "--flee-floor" => {
                if i + 1 < args.len() {
                    config.flee_health_floor = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help(catalog);
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help(catalog: &Catalog) {
    println!("Caravan Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of runs (default: 1000)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    --race <SLUG>        Pin every run to one race");
    println!("    --class <SLUG>       Pin every run to one class");
    println!("    --flee-floor <H>     Bot flees combat at or below H health");
    println!("    --json               Save JSON report");
    println!("    --quick              Quick batch (100 runs)");
    println!("    -v, --verbose        Per-run output");
    println!("    -h, --help           Show this help");
    println!();
    let races: Vec<&str> = catalog.races.iter().map(|r| r.slug).collect();
    let classes: Vec<&str> = catalog.classes.iter().map(|c| c.slug).collect();
    println!("RACES:   {}", races.join(", "));
    println!("CLASSES: {}", classes.join(", "));
}
