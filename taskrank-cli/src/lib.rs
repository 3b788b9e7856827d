//! Command-line interface for ranking task lists with Taskrank.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use camino::Utf8Path;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use taskrank_api::RequestError;

mod analyze;
mod error;
mod fs;
mod suggest;

pub use error::CliError;

use analyze::{AnalyzeArgs, run_analyze};
use suggest::{SuggestArgs, run_suggest};

const ARG_REQUEST: &str = "request";
const ARG_STRATEGY: &str = "strategy";
const ARG_TODAY: &str = "today";
const ARG_LIMIT: &str = "limit";
const ARG_OUTPUT: &str = "output";
const ENV_ANALYZE_REQUEST: &str = "TASKRANK_CMDS_ANALYZE_REQUEST_PATH";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Run the Taskrank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, when
/// files cannot be read or written, or when the request is rejected.
pub fn run() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with(std::env::args_os(), &mut stdout)
}

/// Run the CLI against explicit arguments, writing responses to `writer`.
///
/// # Errors
/// See [`run`].
pub fn run_with<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Analyze(args) => run_analyze(args, writer),
        Command::Suggest(args) => run_suggest(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "taskrank",
    about = "Score and rank tasks by urgency, importance and effort",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every task in a request file.
    Analyze(AnalyzeArgs),
    /// Pick the most pressing tasks from a request file.
    Suggest(SuggestArgs),
}

/// Parse `--today`, defaulting to the local calendar date.
fn resolve_today(value: Option<&str>) -> Result<NaiveDate, CliError> {
    match value {
        None => Ok(Local::now().date_naive()),
        Some(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|source| {
            CliError::InvalidToday {
                value: text.to_owned(),
                source,
            }
        }),
    }
}

/// Write a pretty-printed JSON value to `output`, or to `writer` when unset.
fn emit<T: Serialize>(
    value: &T,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_vec_pretty(value).map_err(CliError::SerialiseResponse)?;
    payload.push(b'\n');
    match output {
        Some(path) => {
            fs::ensure_parent_dir(path).map_err(|source| CliError::CreateOutputDir {
                path: path
                    .parent()
                    .map_or_else(|| Utf8Path::new(".").to_path_buf(), Utf8Path::to_path_buf),
                source,
            })?;
            fs::write_file(path, &payload).map_err(CliError::WriteOutput)
        }
        None => writer.write_all(&payload).map_err(CliError::WriteOutput),
    }
}

/// Emit the endpoint's error body, then fail with [`CliError::Rejected`].
fn reject(
    source: RequestError,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    log::warn!("request rejected with status {}: {source}", source.status());
    emit(&source.body(), output, writer)?;
    Err(CliError::Rejected { source })
}

/// Reject paths that are missing or not regular files.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read a request file's bytes.
fn read_request(path: &Utf8Path) -> Result<Vec<u8>, CliError> {
    fs::read_file(path).map_err(|source| CliError::ReadRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
