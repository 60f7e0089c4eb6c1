//! Fitness self-assessment calculator.
//!
//! Reads the six test measurements from a TOML or JSON file, scores them
//! against the canonical threshold table and prints a report with
//! recommendations and a shareable summary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitcheck::assess::assess_file;
use fitcheck::core::invariants::InvalidInput;
use fitcheck::core::thresholds::ThresholdTable;
use fitcheck::core::tier::Tier;
use fitcheck::exit_codes;
use fitcheck::io::config::{CONFIG_FILE, FitcheckConfig, ReportFormat, load_config, render_config};
use fitcheck::io::input::{InputOutcome, check_input, write_template};
use fitcheck::io::report::render_report;
use fitcheck::io::share::{share_link, share_message};
use fitcheck::logging;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitcheck",
    version,
    about = "Score a six-test fitness self-assessment"
)]
struct Cli {
    /// Config file (defaults to `fitcheck.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score an input file and print the report.
    Evaluate {
        input: PathBuf,
        /// Report format (overrides the config file).
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },
    /// Check an input file without scoring it.
    Validate { input: PathBuf },
    /// Print the share message for an input file.
    Share {
        input: PathBuf,
        /// Print the percent-encoded deep link instead of the message.
        #[arg(long)]
        link: bool,
    },
    /// Write a starter input file.
    Template {
        #[arg(default_value = "assessment.toml")]
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the threshold table used for scoring.
    Table {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration.
    Config,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            if err.downcast_ref::<InvalidInput>().is_some() {
                exit_codes::INVALID_INPUT
            } else {
                exit_codes::ERROR
            }
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let table = ThresholdTable::V4;
    match cli.command {
        Command::Evaluate { input, format } => {
            let cfg = config(cli.config.as_deref())?;
            cmd_evaluate(&input, format.unwrap_or(cfg.format), &cfg, &table)
        }
        Command::Validate { input } => cmd_validate(&input),
        Command::Share { input, link } => {
            let cfg = config(cli.config.as_deref())?;
            cmd_share(&input, link, &cfg, &table)
        }
        Command::Template { path, force } => {
            write_template(&path, force)?;
            println!("wrote {}", path.display());
            Ok(exit_codes::OK)
        }
        Command::Table { json } => cmd_table(&table, json),
        Command::Config => {
            let cfg = config(cli.config.as_deref())?;
            print!("{}", render_config(&cfg)?);
            Ok(exit_codes::OK)
        }
    }
}

/// Load the explicit config path, or `fitcheck.toml` if present.
fn config(path: Option<&Path>) -> Result<FitcheckConfig> {
    let path = path.unwrap_or(Path::new(CONFIG_FILE));
    debug!(path = %path.display(), "loading config");
    load_config(path).context("load config")
}

fn cmd_evaluate(
    input: &Path,
    format: ReportFormat,
    cfg: &FitcheckConfig,
    table: &ThresholdTable,
) -> Result<i32> {
    let result = assess_file(input, table)?;
    println!("{}", render_report(&result, format, &cfg.share)?);
    Ok(exit_codes::OK)
}

fn cmd_validate(input: &Path) -> Result<i32> {
    match check_input(input)? {
        InputOutcome::Valid(_) => {
            println!("valid: {}", input.display());
            Ok(exit_codes::OK)
        }
        InputOutcome::Invalid(invalid) => {
            eprintln!("{}: {}", input.display(), invalid);
            Ok(exit_codes::INVALID_INPUT)
        }
    }
}

fn cmd_share(
    input: &Path,
    link: bool,
    cfg: &FitcheckConfig,
    table: &ThresholdTable,
) -> Result<i32> {
    let result = assess_file(input, table)?;
    if link {
        println!("{}", share_link(&result, &cfg.share.base_url)?);
    } else {
        println!("{}", share_message(&result)?);
    }
    Ok(exit_codes::OK)
}

fn cmd_table(table: &ThresholdTable, json: bool) -> Result<i32> {
    if json {
        let payload = serde_json::to_string_pretty(table).context("serialize table")?;
        println!("{payload}");
        return Ok(exit_codes::OK);
    }
    println!("thresholds: {}", table.version);
    println!(
        "{:<18} {:>10} {:>10} {:>10} {:>10}",
        "test", "excellent", "good", "average", "minimal"
    );
    for (name, bands) in table.rows() {
        let cells: Vec<String> = Tier::DESCENDING
            .iter()
            .map(|tier| bands.describe(*tier))
            .collect();
        println!(
            "{:<18} {:>10} {:>10} {:>10} {:>10}",
            name, cells[0], cells[1], cells[2], cells[3]
        );
    }
    println!(
        "asymmetry above: grip {}%, shoulder_grip {}%, balance {}%",
        table.grip_asymmetry_pct, table.shoulder_asymmetry_pct, table.balance_asymmetry_pct
    );
    Ok(exit_codes::OK)
}
