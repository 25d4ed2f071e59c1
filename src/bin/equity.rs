//! Equity calculator binary.
//!
//! Usage:
//!   cargo run --release --bin equity -- <HAND> [VILLAIN] [OPTIONS]
//!
//! With two hands, estimates head-to-head equity. With one hand, estimates
//! equity against random opponents.
//!
//! Options:
//!   --config <FILE>      Configuration JSON file (optional)
//!   --opponents <N>      Random opponents when no villain is given (default: 1)
//!   --trials <N>         Monte Carlo trials (default: 40000)
//!   --threads <N>        Number of threads (default: auto)
//!   --seed <N>           Random seed (optional)
//!   --time               Report elapsed time
//!   --progress           Show a progress bar
//!   --json               Print the result as JSON

use std::env;
use std::process;

use holdem_equity::cards::HoldemStartingHand;
use holdem_equity::equity::{EquityConfig, EquityEstimator};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let mut hands: Vec<String> = Vec::new();
    let mut config_file: Option<String> = None;
    let mut opponents: usize = 1;
    let mut trials: Option<u64> = None;
    let mut threads: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut timing = false;
    let mut progress = false;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                config_file = Some(value_or_exit(args.get(i), "--config", "a file path"));
            }
            "--opponents" | "-n" => {
                i += 1;
                opponents = parse_or_exit(args.get(i), "--opponents");
            }
            "--trials" | "-t" => {
                i += 1;
                trials = Some(parse_or_exit(args.get(i), "--trials"));
            }
            "--threads" => {
                i += 1;
                threads = Some(parse_or_exit(args.get(i), "--threads"));
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_or_exit(args.get(i), "--seed"));
            }
            "--time" => timing = true,
            "--progress" => progress = true,
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => hands.push(other.to_string()),
        }
        i += 1;
    }

    let mut config = match &config_file {
        Some(path) => EquityConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading {}: {}", path, e);
            process::exit(1);
        }),
        None => EquityConfig::default(),
    };
    if let Some(trials) = trials {
        config = config.with_trials(trials);
    }
    if let Some(threads) = threads {
        config = config.with_threads(threads);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let report_timing = timing || config.report_timing;
    let show_progress = progress || config.show_progress;
    config = config
        .with_timing(report_timing)
        .with_progress(show_progress);

    let parsed: Vec<HoldemStartingHand> = hands
        .iter()
        .map(|h| {
            h.parse().unwrap_or_else(|e| {
                eprintln!("Invalid hand {:?}: {}", h, e);
                process::exit(1);
            })
        })
        .collect();

    let estimator = EquityEstimator::new(config);
    match parsed.as_slice() {
        [hero, villain] => match estimator.heads_up(hero, villain) {
            Ok(result) if json => print_json(&result),
            Ok(result) => {
                println!(
                    "Equity of {} ({}) vs {} ({}) after {} trials",
                    hero,
                    hero.class_label(),
                    villain,
                    villain.class_label(),
                    result.stats.trials
                );
                println!("  {}: {:.2}%", hero, result.equity1 * 100.0);
                println!("  {}: {:.2}%", villain, result.equity2 * 100.0);
                println!(
                    "  wins {} / losses {} / ties {}",
                    result.tally.wins1, result.tally.wins2, result.tally.ties
                );
            }
            Err(e) => exit_with(e),
        },
        [hero] => match estimator.vs_random(hero, opponents) {
            Ok(result) if json => print_json(&result),
            Ok(result) => {
                println!(
                    "Equity of {} ({}) vs {} random hand(s) after {} trials: {:.2}%",
                    hero,
                    hero.class_label(),
                    opponents,
                    result.stats.trials,
                    result.equity * 100.0
                );
            }
            Err(e) => exit_with(e),
        },
        _ => {
            print_usage();
            process::exit(2);
        }
    }
}

fn value_or_exit(value: Option<&String>, flag: &str, expected: &str) -> String {
    match value {
        Some(v) => v.clone(),
        None => {
            eprintln!("{} expects {}", flag, expected);
            process::exit(2);
        }
    }
}

fn parse_or_exit<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> T {
    let raw = value_or_exit(value, flag, "a numeric value");
    raw.parse().unwrap_or_else(|_| {
        eprintln!("{} expects a numeric value, got {:?}", flag, raw);
        process::exit(2);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => exit_with(e),
    }
}

fn exit_with(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

fn print_usage() {
    println!("Usage: equity <HAND> [VILLAIN] [--opponents N] [--trials N] [--threads N]");
    println!("              [--seed N] [--config FILE] [--time] [--progress] [--json]");
    println!();
    println!("Hands are written like AhKd or \"Ah Kd\".");
}
