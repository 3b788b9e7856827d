//! Errors returned to callers of the task endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status code for a request using an unsupported method.
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
/// Status code for a request whose payload is malformed.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Reasons an endpoint refuses a request.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The HTTP method is not accepted by the endpoint.
    #[error("{allowed}")]
    MethodNotAllowed {
        /// Detail naming the accepted methods.
        allowed: &'static str,
    },
    /// The payload's `tasks` field is missing or not a JSON array.
    #[error("Request body must contain a 'tasks' list.")]
    TasksNotAList,
}

impl RequestError {
    pub(crate) const POST_ONLY: Self = Self::MethodNotAllowed {
        allowed: "Only POST is allowed.",
    };
    pub(crate) const GET_OR_POST: Self = Self::MethodNotAllowed {
        allowed: "Only GET or POST is allowed.",
    };

    /// HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::MethodNotAllowed { .. } => STATUS_METHOD_NOT_ALLOWED,
            Self::TasksNotAList => STATUS_BAD_REQUEST,
        }
    }

    /// JSON body describing this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            detail: self.to_string(),
        }
    }
}

/// Wire form of a rejected request: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason for the rejection.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(RequestError::POST_ONLY, 405, "Only POST is allowed.")]
    #[case(RequestError::GET_OR_POST, 405, "Only GET or POST is allowed.")]
    #[case(
        RequestError::TasksNotAList,
        400,
        "Request body must contain a 'tasks' list."
    )]
    fn errors_map_to_status_and_detail(
        #[case] error: RequestError,
        #[case] status: u16,
        #[case] detail: &str,
    ) {
        assert_eq!(error.status(), status);
        assert_eq!(error.body().detail, detail);
    }

    #[rstest]
    fn body_serialises_as_detail_object() {
        let value = serde_json::to_value(RequestError::TasksNotAList.body()).expect("serialise");
        assert_eq!(
            value,
            json!({"detail": "Request body must contain a 'tasks' list."})
        );
    }
}
