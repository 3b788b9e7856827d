//! Analyze command implementation for the Taskrank CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskrank_api::{Method, TaskEndpoints};

use crate::{
    ARG_OUTPUT, ARG_REQUEST, ARG_STRATEGY, ARG_TODAY, CliError, ENV_ANALYZE_REQUEST, emit,
    read_request, reject, require_existing, resolve_today,
};

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every task in a JSON request file and print them \
                 ranked by score, then by nearest due date. The file holds \
                 an object with a `tasks` list and an optional `strategy` \
                 label.",
    about = "Rank every task in a request"
)]
#[ortho_config(prefix = "TASKRANK")]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON file containing the request body.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Strategy label reported in place of the request's own.
    #[arg(long = ARG_STRATEGY, value_name = "label")]
    #[serde(default)]
    pub(crate) strategy: Option<String>,
    /// Reference date in `YYYY-MM-DD` form (defaults to today).
    #[arg(long = ARG_TODAY, value_name = "date")]
    #[serde(default)]
    pub(crate) today: Option<String>,
    /// Write the response here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyzeConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) strategy: Option<String>,
    pub(crate) today: NaiveDate,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl AnalyzeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)
    }
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_ANALYZE_REQUEST,
        })?;
        let today = resolve_today(args.today.as_deref())?;
        Ok(Self {
            request_path,
            strategy: args.strategy,
            today,
            output: args.output,
        })
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_analyze_with(&config, writer)
}

pub(crate) fn run_analyze_with(
    config: &AnalyzeConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.validate_sources()?;
    let body = read_request(&config.request_path)?;
    let output = config.output.as_deref();
    let mut response =
        match TaskEndpoints::with_defaults().analyze(&Method::Post, &body, config.today) {
            Ok(response) => response,
            Err(source) => return reject(source, output, writer),
        };
    if let Some(label) = &config.strategy {
        response.strategy = Value::from(label.as_str());
    }
    emit(&response, output, writer)?;
    log::info!(
        "analyzed {} tasks from {}",
        response.tasks.len(),
        config.request_path
    );
    Ok(())
}
