//! Learner balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 200 learners, 1000 questions
//!   cargo run --bin simulate -- -n 50 -a 0.9     # 50 strong learners
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use quest_tutor::simulator::{run_simulation, SimConfig};
use quest_tutor::{TutorConfig, TutorEngine};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, config_path) = parse_args(&args);

    let tutor_config = match &config_path {
        Some(path) => TutorConfig::load_or_default(Path::new(path)),
        None => TutorConfig::default(),
    };
    let engine = match TutorEngine::new(tutor_config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid tutor config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              QUEST TUTOR BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Learners:       {}", config.num_learners);
    println!("  Questions:      {}", config.questions_per_learner);
    println!("  Accuracy:       {:.0}%", config.accuracy * 100.0);
    println!("  Quiz length:    {}", config.quiz_length);
    println!("  Max level:      {}", engine.table().max_level());
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = match run_simulation(&engine, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    }

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> (SimConfig, Option<String>) {
    let mut config = SimConfig::default();
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--learners" => {
                if i + 1 < args.len() {
                    config.num_learners = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-q" | "--questions" => {
                if i + 1 < args.len() {
                    config.questions_per_learner = args[i + 1].parse().unwrap_or(1_000);
                    i += 1;
                }
            }
            "-a" | "--accuracy" => {
                if i + 1 < args.len() {
                    config.accuracy = args[i + 1].parse().unwrap_or(0.7);
                    i += 1;
                }
            }
            "--quiz" => {
                if i + 1 < args.len() {
                    config.quiz_length = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, config_path)
}

fn print_help() {
    println!("Quest Tutor Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --learners <N>    Number of simulated learners (default: 200)");
    println!("    -q, --questions <Q>   Questions per learner (default: 1000)");
    println!("    -a, --accuracy <A>    Chance of a correct answer, 0.0-1.0 (default: 0.7)");
    println!("    --quiz <L>            Questions per quiz (default: 10)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -c, --config <FILE>   Tutor config JSON (ladder and rewards)");
    println!("    -v, --verbose         Per-learner output");
    println!("    --quiet               Skip the text report");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
}
