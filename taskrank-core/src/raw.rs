//! Untrusted task objects as they arrive from callers.
//!
//! A [`RawTask`] keeps every field of the incoming JSON object verbatim so
//! scored output can echo the caller's data back unchanged. Interpretation of
//! the fields happens once, in [`TaskRecord::from_raw`](crate::TaskRecord::from_raw).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Well-known field names read from a task object.
pub mod field {
    /// Human-readable task title.
    pub const TITLE: &str = "title";
    /// Due date as an ISO `YYYY-MM-DD` string.
    pub const DUE_DATE: &str = "due_date";
    /// Importance on a 1-10 scale.
    pub const IMPORTANCE: &str = "importance";
    /// Estimated effort in hours.
    pub const ESTIMATED_HOURS: &str = "estimated_hours";
    /// Identifiers of tasks this one depends on.
    pub const DEPENDENCIES: &str = "dependencies";
}

/// A task object with its fields preserved exactly as supplied.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taskrank_core::RawTask;
///
/// let task = RawTask::from_value(&json!({"title": "Pay bill", "colour": "red"}))
///     .expect("object input");
/// assert_eq!(task.get("colour"), Some(&json!("red")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTask(Map<String, Value>);

/// Errors raised when a JSON value cannot be treated as a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RawTaskError {
    /// The value was not a JSON object.
    #[error("task must be a JSON object, found {kind}")]
    NotAnObject {
        /// JSON type name of the rejected value.
        kind: &'static str,
    },
}

impl RawTask {
    /// Create a task without any fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a JSON value into a task.
    ///
    /// # Errors
    /// Returns [`RawTaskError::NotAnObject`] unless `value` is an object.
    pub fn from_value(value: &Value) -> Result<Self, RawTaskError> {
        match value {
            Value::Object(fields) => Ok(Self(fields.clone())),
            other => Err(RawTaskError::NotAnObject {
                kind: json_kind(other),
            }),
        }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow every field.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Set a field, replacing any previous value.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set the due date from a native date, stored in ISO form.
    #[must_use]
    pub fn with_due_date(self, due: NaiveDate) -> Self {
        self.with_field(field::DUE_DATE, due.format("%Y-%m-%d").to_string())
    }

    /// Consume the task and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawTask {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for RawTask {
    type Error = RawTaskError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(RawTaskError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }
}

/// Report whether a JSON value counts as "present" for defaulting purposes.
///
/// `null`, `false`, zero, empty strings, empty arrays and empty objects are
/// all treated as absent.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0_f64),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
