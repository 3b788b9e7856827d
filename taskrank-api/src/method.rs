//! HTTP request methods understood by the endpoints.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Request method of an incoming call.
///
/// Parsing is case-insensitive. Methods the endpoints never accept still
/// parse, so they can be answered with a 405 rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
    /// Any other token, stored upper-cased.
    Other(String),
}

/// Errors raised when parsing a [`Method`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseMethodError {
    /// The text was empty or whitespace.
    #[error("request method must not be empty")]
    Empty,
    /// The text contained whitespace or control characters.
    #[error("invalid request method token: {token}")]
    InvalidToken {
        /// Offending input.
        token: String,
    },
}

impl Method {
    /// Canonical upper-case name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Other(token) => token,
        }
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseMethodError::Empty);
        }
        if trimmed
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control())
        {
            return Err(ParseMethodError::InvalidToken {
                token: text.to_owned(),
            });
        }
        let upper = trimmed.to_ascii_uppercase();
        Ok(match upper.as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "HEAD" => Self::Head,
            "OPTIONS" => Self::Options,
            _ => Self::Other(upper),
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
