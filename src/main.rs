mod cli;

use clap::Parser;
use serde::Serialize;
use spamscore::classifier::Classification;
use spamscore::config;
use spamscore::engine::{self, RulePenalty};
use spamscore::error::{Result, SpamScoreError};
use spamscore::rules::RuleSet;
use std::io::Read;
use tracing::info;

pub mod exit_code {
    pub const CLEAN: i32 = 0;
    pub const FLAGGED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

#[derive(Serialize)]
struct CheckReport {
    score: u32,
    threshold: u32,
    flagged: bool,
    breakdown: Vec<RulePenalty>,
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Check(cmd) => {
            let rules_config = config::load_rules(cmd.rules.as_deref())?;
            let rules = RuleSet::from_config(&rules_config)?;
            let text = read_input(cmd.file.as_deref())?;

            let result = engine::score(&text, &rules)?;
            let classification = Classification::from_result(&result, rules.threshold());
            info!(
                score = classification.score,
                flagged = classification.is_flagged,
                "text classified"
            );

            let report = CheckReport {
                score: classification.score,
                threshold: rules.threshold(),
                flagged: classification.is_flagged,
                breakdown: result.breakdown,
            };
            match cmd.format {
                cli::OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                cli::OutputFormat::Text => {
                    let verdict = if report.flagged { "FLAGGED" } else { "clean" };
                    println!(
                        "{verdict}: score {} (threshold {})",
                        report.score, report.threshold
                    );
                    for entry in &report.breakdown {
                        if entry.penalty > 0 {
                            println!("  {}: {}", entry.rule, entry.penalty);
                        }
                    }
                }
            }

            if report.flagged {
                Ok(exit_code::FLAGGED)
            } else {
                Ok(exit_code::CLEAN)
            }
        }
        cli::Commands::Rules(cmd) => {
            let rules_config = config::load_rules(cmd.rules.as_deref())?;
            let rendered = toml::to_string_pretty(&rules_config)
                .map_err(|e| SpamScoreError::Config(e.to_string()))?;
            print!("{rendered}");
            Ok(exit_code::CLEAN)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
