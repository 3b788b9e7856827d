//! Suggest command implementation for the Taskrank CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use taskrank_api::{DEFAULT_SUGGESTION_LIMIT, Method, TaskEndpoints};

use crate::{
    ARG_LIMIT, ARG_OUTPUT, ARG_REQUEST, ARG_TODAY, CliError, emit, read_request, reject,
    require_existing, resolve_today,
};

/// CLI arguments for the `suggest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Suggest the most pressing tasks from a JSON request file. \
                 Without a file, nothing is suggested and the summary says \
                 so.",
    about = "Suggest the most pressing tasks"
)]
#[ortho_config(prefix = "TASKRANK")]
pub(crate) struct SuggestArgs {
    /// Path to a JSON file containing the request body.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Number of tasks to suggest.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Reference date in `YYYY-MM-DD` form (defaults to today).
    #[arg(long = ARG_TODAY, value_name = "date")]
    #[serde(default)]
    pub(crate) today: Option<String>,
    /// Write the response here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SuggestArgs {
    pub(crate) fn into_config(self) -> Result<SuggestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SuggestConfig::try_from(merged)
    }
}

/// Resolved `suggest` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuggestConfig {
    /// Request file; `None` suggests from nothing.
    pub(crate) request_path: Option<Utf8PathBuf>,
    pub(crate) limit: usize,
    pub(crate) today: NaiveDate,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SuggestConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.request_path {
            Some(path) => require_existing(path, ARG_REQUEST),
            None => Ok(()),
        }
    }
}

impl TryFrom<SuggestArgs> for SuggestConfig {
    type Error = CliError;

    fn try_from(args: SuggestArgs) -> Result<Self, Self::Error> {
        let limit = args.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
        if limit == 0 {
            return Err(CliError::InvalidLimit { value: limit });
        }
        let today = resolve_today(args.today.as_deref())?;
        Ok(Self {
            request_path: args.request_path,
            limit,
            today,
            output: args.output,
        })
    }
}

pub(crate) fn run_suggest(args: SuggestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_suggest_with(&config, writer)
}

pub(crate) fn run_suggest_with(
    config: &SuggestConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.validate_sources()?;
    let (method, body) = match &config.request_path {
        Some(path) => (Method::Post, read_request(path)?),
        None => (Method::Get, Vec::new()),
    };
    let endpoints = TaskEndpoints::with_defaults().with_suggestion_limit(config.limit);
    let output = config.output.as_deref();
    let response = match endpoints.suggest(&method, &body, config.today) {
        Ok(response) => response,
        Err(source) => return reject(source, output, writer),
    };
    emit(&response, output, writer)?;
    log::info!("suggested {} tasks", response.tasks.len());
    Ok(())
}
