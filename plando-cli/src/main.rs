//! Command line front-end for plando validation.
//!
//! Loads a plando JSON document, runs it through the validation engine,
//! and prints either a colored console report or a JSON report.
//! Exit codes: 0 when the document is accepted, 1 when it is rejected,
//! 2 on hard failures (unreadable file, malformed JSON, bad settings).

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::debug;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use plando_core::{Catalogs, GeneratorSettings, ValidationResult, Validator};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Human-readable colored report
    Console,
    /// Machine-readable JSON report
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "plando-cli", version)]
#[command(about = "Validate a plando override document before seed generation")]
struct Args {
    /// Plando document to validate (JSON)
    file: PathBuf,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Generator settings file (JSON); flags below override its values
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Chapter difficulty is computed automatically; the difficulty
    /// section is ignored
    #[arg(long)]
    progressive_scaling: bool,

    /// Partner upgrades are already shuffled into the item pool
    #[arg(long)]
    partner_upgrade_shuffle: bool,

    /// Total power stars the generator places
    #[arg(long)]
    total_power_stars: Option<u32>,

    /// Trap count the active trap mode budgets for
    #[arg(long)]
    trap_count: Option<u32>,
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let catalogs = Catalogs::from_embedded().context("embedded catalogs failed to decode")?;
    let settings = load_settings(&args)?;
    debug!("validating {} with {settings:?}", args.file.display());

    let validator = Validator::new(&catalogs, &settings);
    let result = validator
        .validate_file(&args.file)
        .with_context(|| format!("could not validate {}", args.file.display()))?;

    match args.report {
        ReportFormat::Console => print_console_report(&args, &result),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if result.is_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn load_settings(args: &Args) -> Result<GeneratorSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read settings file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("could not decode settings file {}", path.display()))?
        }
        None => GeneratorSettings::default(),
    };

    if args.progressive_scaling {
        settings.progressive_scaling = true;
    }
    if args.partner_upgrade_shuffle {
        settings.partner_upgrade_shuffle = true;
    }
    if let Some(total) = args.total_power_stars {
        settings.total_power_stars = total;
    }
    if let Some(count) = args.trap_count {
        settings.trap_count = count;
    }
    Ok(settings)
}

fn print_console_report(args: &Args, result: &ValidationResult) {
    println!("{} {}", "plando:".bold(), args.file.display());

    for warning in &result.messages.warnings {
        println!("  {} {warning}", "warning:".yellow().bold());
    }
    for error in &result.messages.errors {
        println!("  {} {error}", "error:".red().bold());
    }

    if !result.overrides.is_empty() {
        println!("{}", "recommended setting overrides:".bold());
        for override_ in result.overrides.iter() {
            let rendered = serde_json::to_string(&override_)
                .unwrap_or_else(|_| override_.key().to_string());
            println!("  {rendered}");
        }
    }

    if result.is_accepted() {
        println!(
            "{} ({} warnings)",
            "accepted".green().bold(),
            result.messages.warnings.len()
        );
    } else {
        println!(
            "{} ({} errors, {} warnings)",
            "rejected".red().bold(),
            result.messages.errors.len(),
            result.messages.warnings.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings_defaults() {
        let args = Args::try_parse_from([
            "plando-cli",
            "plando.json",
            "--progressive-scaling",
            "--total-power-stars",
            "90",
        ])
        .unwrap();
        let settings = load_settings(&args).unwrap();
        assert!(settings.progressive_scaling);
        assert!(!settings.partner_upgrade_shuffle);
        assert_eq!(settings.total_power_stars, 90);
        assert_eq!(settings.trap_count, 0);
    }

    #[test]
    fn report_format_parses() {
        let args =
            Args::try_parse_from(["plando-cli", "plando.json", "--report", "json"]).unwrap();
        assert!(matches!(args.report, ReportFormat::Json));
    }
}
