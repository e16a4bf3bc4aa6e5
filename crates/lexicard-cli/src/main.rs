// crates/lexicard-cli/src/main.rs
// ============================================================================
// Module: Lexicard CLI Entry Point
// Description: Command dispatcher for catalog validation and maintenance.
// Purpose: Keep catalog files healthy before they ship to the application.
// Dependencies: clap, lexicard-catalog, lexicard-cli, serde, serde_json.
// ============================================================================

//! ## Overview
//! The Lexicard CLI validates, inspects, and normalizes localization catalog
//! files, and checks key parity between locales. A broken catalog must not
//! ship: parse and duplicate errors fail the run with a non-zero exit code.
//! All user-facing strings are routed through the CLI's own message catalog
//! to prepare for future localization.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use lexicard_catalog::Catalog;
use lexicard_catalog::DuplicatePolicy;
use lexicard_catalog::MessageKey;
use lexicard_catalog::load_catalog_file;
use lexicard_catalog::load_locale_dir;
use lexicard_cli::config::LexicardConfig;
use lexicard_cli::t;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "lexicard", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a catalog file (fail fast on parse or duplicate errors).
    Validate(ValidateCommand),
    /// Look up a key in a catalog file.
    Lookup(LookupCommand),
    /// List catalog entries in insertion order.
    List(ListCommand),
    /// Emit the canonical serialized form of a catalog file.
    Normalize(NormalizeCommand),
    /// Check key parity between two locale catalogs.
    Parity(ParityCommand),
    /// List locales discovered in the configured catalog directory.
    Locales(LocalesCommand),
    /// Configuration commands.
    Config {
        /// Config subcommand to execute.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate the Lexicard configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for catalog validation.
#[derive(Args, Debug)]
struct ValidateCommand {
    /// Path to the catalog file.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,
    /// Duplicate-key policy applied during parsing.
    #[arg(long, value_enum, default_value_t = DuplicatePolicyArg::Reject)]
    duplicates: DuplicatePolicyArg,
}

/// Arguments for key lookup.
#[derive(Args, Debug)]
struct LookupCommand {
    /// Path to the catalog file.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,
    /// Key to resolve.
    #[arg(long, value_name = "KEY")]
    key: String,
    /// Echo the key itself instead of failing when the key is missing.
    #[arg(long, action = ArgAction::SetTrue)]
    fallback_key: bool,
}

/// Arguments for entry listing.
#[derive(Args, Debug)]
struct ListCommand {
    /// Path to the catalog file.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,
    /// Output format for the entry listing.
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,
}

/// Arguments for catalog normalization.
#[derive(Args, Debug)]
struct NormalizeCommand {
    /// Path to the catalog file.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,
    /// Optional output path; defaults to stdout.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Duplicate-key policy applied during parsing.
    #[arg(long, value_enum, default_value_t = DuplicatePolicyArg::Reject)]
    duplicates: DuplicatePolicyArg,
}

/// Arguments for the parity check.
#[derive(Args, Debug)]
struct ParityCommand {
    /// Path to the baseline catalog (usually the default locale).
    #[arg(long, value_name = "PATH")]
    baseline: PathBuf,
    /// Path to the candidate catalog to compare against the baseline.
    #[arg(long, value_name = "PATH")]
    candidate: PathBuf,
}

/// Arguments for locale discovery.
#[derive(Args, Debug)]
struct LocalesCommand {
    /// Catalog directory override; defaults to the configured directory.
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,
    /// Optional config file path (defaults to lexicard.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to lexicard.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Duplicate-key policy selection on the command line.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum DuplicatePolicyArg {
    /// Fail the load on any duplicate key.
    Reject,
    /// Keep the later definition of a duplicated key.
    LastWriteWins,
}

impl From<DuplicatePolicyArg> for DuplicatePolicy {
    fn from(value: DuplicatePolicyArg) -> Self {
        match value {
            DuplicatePolicyArg::Reject => Self::Reject,
            DuplicatePolicyArg::LastWriteWins => Self::LastWriteWins,
        }
    }
}

/// Output formats for the entry listing.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum ListFormat {
    /// Human-readable `key = value` lines.
    Text,
    /// JSON report for toolchain consumption.
    Json,
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// JSON report for a single catalog entry.
#[derive(Serialize)]
struct EntryReport<'a> {
    /// Entry key.
    key: &'a str,
    /// Entry value, exactly as written.
    value: &'a str,
    /// Section label active at the definition site, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<&'a str>,
    /// 1-based source line of the definition.
    line: usize,
}

/// JSON report for a full catalog listing.
#[derive(Serialize)]
struct CatalogReport<'a> {
    /// Source path of the catalog file.
    path: String,
    /// Entries in insertion order.
    entries: Vec<EntryReport<'a>>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Validate(command) => command_validate(&command),
        Commands::Lookup(command) => command_lookup(&command),
        Commands::List(command) => command_list(&command),
        Commands::Normalize(command) => command_normalize(&command),
        Commands::Parity(command) => command_parity(&command),
        Commands::Locales(command) => command_locales(&command),
        Commands::Config {
            command,
        } => command_config(&command),
    }
}

/// Prints top-level help when no subcommand is given.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    let rendered = command.render_help().to_string();
    write_stdout_bytes(rendered.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Catalog Commands
// ============================================================================

/// Executes the `validate` command.
fn command_validate(command: &ValidateCommand) -> CliResult<ExitCode> {
    let catalog = load_catalog_arg(&command.file, command.duplicates.into())?;
    write_stdout_line(&t!("validate.ok", count = catalog.len()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `lookup` command.
fn command_lookup(command: &LookupCommand) -> CliResult<ExitCode> {
    let catalog = load_catalog_arg(&command.file, DuplicatePolicy::Reject)?;
    let key = MessageKey::from(command.key.as_str());
    let value = if command.fallback_key {
        Some(catalog.resolve(&key))
    } else {
        catalog.get(&key)
    };
    let Some(value) = value else {
        return Err(CliError::new(t!(
            "lookup.missing",
            key = command.key,
            path = command.file.display()
        )));
    };
    write_stdout_line(value).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `list` command.
fn command_list(command: &ListCommand) -> CliResult<ExitCode> {
    let catalog = load_catalog_arg(&command.file, DuplicatePolicy::Reject)?;
    match command.format {
        ListFormat::Text => {
            let mut output = String::new();
            for entry in &catalog {
                output.push_str(&t!(
                    "list.entry",
                    key = entry.key,
                    value = entry.value
                ));
                output.push('\n');
            }
            write_stdout_bytes(output.as_bytes())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        ListFormat::Json => {
            let report = CatalogReport {
                path: command.file.display().to_string(),
                entries: catalog
                    .iter()
                    .map(|entry| EntryReport {
                        key: entry.key.as_str(),
                        value: entry.value.as_str(),
                        section: entry.section.as_deref(),
                        line: entry.line,
                    })
                    .collect(),
            };
            let mut bytes = serde_json::to_vec_pretty(&report)
                .map_err(|err| CliError::new(t!("list.json_failed", error = err)))?;
            bytes.push(b'\n');
            write_stdout_bytes(&bytes)
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `normalize` command.
fn command_normalize(command: &NormalizeCommand) -> CliResult<ExitCode> {
    let catalog = load_catalog_arg(&command.file, command.duplicates.into())?;
    let text = catalog.to_text();
    match &command.output {
        Some(path) => {
            fs::write(path, text).map_err(|err| {
                CliError::new(t!(
                    "normalize.write_failed",
                    path = path.display(),
                    error = err
                ))
            })?;
            write_stdout_line(&t!("normalize.ok", path = path.display()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        None => {
            write_stdout_bytes(text.as_bytes())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `parity` command.
fn command_parity(command: &ParityCommand) -> CliResult<ExitCode> {
    let baseline = load_catalog_arg(&command.baseline, DuplicatePolicy::Reject)?;
    let candidate = load_catalog_arg(&command.candidate, DuplicatePolicy::Reject)?;
    let diff = parity_diff(&baseline, &candidate);
    if diff.is_empty() {
        write_stdout_line(&t!("parity.ok", count = baseline.len()))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    let mut output = String::new();
    if !diff.missing.is_empty() {
        output.push_str(&t!("parity.missing.header"));
        output.push('\n');
        for key in &diff.missing {
            output.push_str(&t!("parity.entry", key = key));
            output.push('\n');
        }
    }
    if !diff.extra.is_empty() {
        output.push_str(&t!("parity.extra.header"));
        output.push('\n');
        for key in &diff.extra {
            output.push_str(&t!("parity.entry", key = key));
            output.push('\n');
        }
    }
    write_stdout_bytes(output.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Err(CliError::new(t!(
        "parity.failed",
        missing = diff.missing.len(),
        extra = diff.extra.len()
    )))
}

/// Executes the `locales` command.
fn command_locales(command: &LocalesCommand) -> CliResult<ExitCode> {
    let (dir, policy) = match &command.dir {
        Some(dir) => (dir.clone(), DuplicatePolicy::Reject),
        None => {
            let config = load_config_arg(command.config.as_deref())?;
            (config.catalog_dir().to_path_buf(), config.policy())
        }
    };
    let catalogs = load_locale_dir(&dir, policy).map_err(|err| {
        CliError::new(t!("catalog.load_failed", path = dir.display(), error = err))
    })?;
    if catalogs.is_empty() {
        write_stdout_line(&t!("locales.none"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    let mut locales: Vec<&str> = catalogs.keys().map(|locale| locale.as_str()).collect();
    locales.sort_unstable();
    let mut output = String::new();
    output.push_str(&t!("locales.header"));
    output.push('\n');
    for locale in locales {
        output.push_str(&t!("locales.entry", locale = locale));
        output.push('\n');
    }
    write_stdout_bytes(output.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes the `config` command group.
fn command_config(command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(command),
    }
}

/// Executes the `config validate` command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    load_config_arg(command.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Parity Helpers
// ============================================================================

/// Key-set difference between a baseline and a candidate catalog.
#[derive(Debug, PartialEq, Eq)]
struct ParityDiff {
    /// Baseline keys absent from the candidate, sorted.
    missing: Vec<String>,
    /// Candidate keys absent from the baseline, sorted.
    extra: Vec<String>,
}

impl ParityDiff {
    /// Returns whether the two key sets match.
    fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Computes the key-set difference between two catalogs.
fn parity_diff(baseline: &Catalog, candidate: &Catalog) -> ParityDiff {
    let baseline_keys: BTreeSet<&str> = baseline.keys().map(MessageKey::as_str).collect();
    let candidate_keys: BTreeSet<&str> = candidate.keys().map(MessageKey::as_str).collect();
    ParityDiff {
        missing: baseline_keys.difference(&candidate_keys).map(ToString::to_string).collect(),
        extra: candidate_keys.difference(&baseline_keys).map(ToString::to_string).collect(),
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Loads a catalog file argument, mapping errors to localized messages.
fn load_catalog_arg(path: &Path, policy: DuplicatePolicy) -> CliResult<Catalog> {
    load_catalog_file(path, policy).map_err(|err| {
        CliError::new(t!("catalog.load_failed", path = path.display(), error = err))
    })
}

/// Loads the CLI configuration, mapping errors to localized messages.
fn load_config_arg(path: Option<&Path>) -> CliResult<LexicardConfig> {
    LexicardConfig::load(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
