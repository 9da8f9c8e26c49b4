//! Headless regen scenario CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                              # built-in config
//!   cargo run --bin simulate -- --item regen_large
//!   cargo run --bin simulate -- --config shop.json --damage 70 --ticks 60

use shop_regen::simulator::{run_scenario, SimConfig, SAMPLE_SHOP_CONFIG};
use shop_regen::ShopConfig;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config_path, sim, verbose) = parse_args(&args);

    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &config_path {
        Some(path) => match ShopConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => ShopConfig::from_json(SAMPLE_SHOP_CONFIG).expect("built-in config parses"),
    };

    println!("shop-regen scenario");
    println!("===================");
    println!();

    let report = run_scenario(&config, &sim);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> (Option<PathBuf>, SimConfig, bool) {
    let mut config_path = None;
    let mut sim = SimConfig::default();
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--item" => {
                if i + 1 < args.len() {
                    sim.item = args[i + 1].clone();
                    i += 1;
                }
            }
            "--ticks" => {
                if i + 1 < args.len() {
                    sim.ticks = args[i + 1].parse().unwrap_or(sim.ticks);
                    i += 1;
                }
            }
            "--damage" => {
                if i + 1 < args.len() {
                    sim.damage = args[i + 1].parse().unwrap_or(sim.damage);
                    i += 1;
                }
            }
            "--max-health" => {
                if i + 1 < args.len() {
                    sim.max_health = args[i + 1].parse().unwrap_or(sim.max_health);
                    i += 1;
                }
            }
            "--damage-tick" => {
                if i + 1 < args.len() {
                    sim.damage_tick = args[i + 1].parse().unwrap_or(sim.damage_tick);
                    i += 1;
                }
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("unknown option: {other}");
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config_path, sim, verbose)
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <PATH>      shop config JSON (default: built-in sample)");
    println!("  --item <NAME>        unique item name to buy (default: regen_small)");
    println!("  --ticks <N>          ticks to simulate (default: 40)");
    println!("  --damage <N>         damage of the scripted hit (default: 40)");
    println!("  --max-health <N>     player max health (default: 100)");
    println!("  --damage-tick <N>    tick the hit lands at (default: 0)");
    println!("  -v, --verbose        debug logging");
}
