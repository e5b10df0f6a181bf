// govnext command line entry point
use chrono::Local;
use clap::{Parser, Subcommand};
use engine::config::{EngineSettings, OutputFormat};
use engine::data::{CheckReport, DocumentCsvChecker};
use engine::filters::presets_for;
use engine::formatters::{abbreviate_large_currency, render_status_indicator};
use engine::validation::{check, parse_kind, validator_for};
use engine::EngineError;
use shared::models::DocumentKind;
use shared::utils::brazilian_format::{format_document, parse_decimal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "govnext", version, about = "Brazilian identifier validation and display helpers")]
struct Cli {
    /// JSON settings file; embedded defaults are used when omitted
    #[arg(long, global = true, env = "GOVNEXT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate one or more identifiers
    Validate {
        /// cnpj, cpf or cep; detected from the digit count when omitted
        #[arg(long, value_parser = parse_kind)]
        kind: Option<DocumentKind>,
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Validate the document column of a delimited file
    CheckFile {
        path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply the CPF/CNPJ/CEP mask
    Format { value: String },
    /// Abbreviate an amount written the Brazilian way: "," is the decimal
    /// separator and "." groups thousands, so "1.5" reads as 15
    /// (e.g. "1.500.000,00")
    Currency { amount: String },
    /// Render a tender status indicator
    Status { label: String },
    /// Print list view filter presets for a doctype as JSON
    Filters { doctype: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match EngineSettings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("govnext: {}", err);
            return ExitCode::from(err.exit_code() as u8);
        }
    };
    init_tracing(&settings.log_level);
    debug!(?settings, "settings loaded");

    match run(cli.command, &settings) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_tracing(default_level: &str) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when some value failed validation.
fn run(command: Command, settings: &EngineSettings) -> Result<bool, EngineError> {
    match command {
        Command::Validate { kind, values } => Ok(validate_values(kind, &values)),
        Command::CheckFile { path, json } => {
            let report = DocumentCsvChecker::check_file(&path, settings)?;
            info!(valid = report.valid, invalid = report.invalid, "checked {}", path.display());
            if json || settings.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            Ok(report.all_valid())
        }
        Command::Format { value } => {
            println!("{}", format_document(&value));
            Ok(true)
        }
        Command::Currency { amount } => {
            let value = parse_decimal(&amount)?;
            println!("{}", abbreviate_large_currency(Some(value)));
            Ok(true)
        }
        Command::Status { label } => {
            println!("{}", render_status_indicator(&label));
            Ok(true)
        }
        Command::Filters { doctype } => {
            let presets = presets_for(&doctype, Local::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&presets)?);
            Ok(true)
        }
    }
}

fn validate_values(kind: Option<DocumentKind>, values: &[String]) -> bool {
    let mut all_valid = true;
    for value in values {
        let (detected, valid) = match kind {
            Some(k) => (Some(k), validator_for(k).is_valid(value)),
            None => check(value),
        };
        let label = detected.map_or("?", DocumentKind::as_str);
        println!("{}\t{}\t{}", if valid { "ok" } else { "invalid" }, label, value);
        all_valid &= valid;
    }
    all_valid
}

fn print_report(report: &CheckReport) {
    for row in &report.rows {
        let kind = row.kind.map_or("?", DocumentKind::as_str);
        let status = if row.valid { "ok" } else { "invalid" };
        println!("{}\t{}\t{}\t{}", row.line, status, kind, row.formatted);
    }
    println!("{} valid, {} invalid", report.valid, report.invalid);
}
