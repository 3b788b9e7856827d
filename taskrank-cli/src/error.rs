//! Error types emitted by the Taskrank CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use taskrank_api::RequestError;
use thiserror::Error;

/// Errors emitted by the Taskrank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag that was not supplied.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The reference date was not an ISO `YYYY-MM-DD` date.
    #[error("invalid --today value {value:?}: {source}")]
    InvalidToday {
        /// Text supplied for the date.
        value: String,
        /// Parse failure reported by chrono.
        #[source]
        source: chrono::ParseError,
    },
    /// The suggestion limit was zero.
    #[error("--limit must be at least 1, got {value}")]
    InvalidLimit {
        /// Rejected limit.
        value: usize,
    },
    /// Reading the request file failed.
    #[error("failed to read request at {path:?}: {source}")]
    ReadRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The endpoint refused the request.
    #[error("request rejected with status {}: {source}", source.status())]
    Rejected {
        /// Endpoint error, already written to the output.
        #[source]
        source: RequestError,
    },
    /// Serialising the response failed.
    #[error("failed to serialise response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Creating the output file's parent directory failed.
    #[error("failed to create output directory {path:?}: {source}")]
    CreateOutputDir {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the response failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
