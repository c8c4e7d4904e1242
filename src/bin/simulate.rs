//! Contract balance simulator CLI.
//!
//! Run Monte Carlo simulations of contract resolution to analyze balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 contracts
//!   cargo run --bin simulate -- -n 200 -c 2    # 200 runs with a crew of 2
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use nightrun::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("=== NIGHTRUN CONTRACT SIMULATOR ===");
    println!();
    println!("Configuration:");
    println!("  Runs:        {}", config.num_runs);
    println!("  Crew size:   {}", config.team_size);
    println!("  Node picks:  {}", config.target_selections);
    if let Some(seed) = config.seed {
        println!("  Seed:        {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => eprintln!("Failed to write JSON report: {}", err),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--crew" => {
                if i + 1 < args.len() {
                    config.team_size = args[i + 1].parse().unwrap_or(config.team_size);
                    i += 1;
                }
            }
            "-p" | "--picks" => {
                if i + 1 < args.len() {
                    config.target_selections =
                        args[i + 1].parse().unwrap_or(config.target_selections);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--overreach" => {
                config = SimConfig::overreach_test();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Nightrun Contract Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated contracts (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -c, --crew <N>      Team slots to fill (default: 4)");
    println!("    -p, --picks <N>     Nodes to select per run (default: 6)");
    println!("    -v, --verbose       Per-run output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick check (100 runs)");
    println!("    --overreach         Thin crew, deep tree stress test");
    println!("    -h, --help          Show this help");
}
