//! Request adapters exposing Taskrank over an HTTP-shaped interface.
//!
//! Two operations are provided. Analyze ranks every task in a request and
//! echoes its strategy label. Suggest returns the few most pressing tasks
//! together with a one-line summary. Neither adapter is tied to a server
//! framework; hosts pass the method, body bytes and reference date in and
//! render the returned response or [`RequestError`].

#![forbid(unsafe_code)]

mod endpoints;
mod error;
mod method;
mod request;
mod response;

pub use endpoints::{
    DEFAULT_STRATEGY, DEFAULT_SUGGESTION_LIMIT, NO_SUGGESTIONS_SUMMARY, SUMMARY_DELIMITER,
    TaskEndpoints, analyze, suggest,
};
pub use error::{ErrorBody, RequestError, STATUS_BAD_REQUEST, STATUS_METHOD_NOT_ALLOWED};
pub use method::{Method, ParseMethodError};
pub use request::{STRATEGY_FIELD, TASKS_FIELD, parse_body};
pub use response::{AnalyzeResponse, SuggestResponse};
