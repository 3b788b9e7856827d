//! Typed, fully-defaulted task records.
//!
//! [`TaskRecord::from_raw`] is the single place where loosely-typed input is
//! interpreted. It never fails: malformed fields fall back to defaults and the
//! fallback is recorded either in [`DueDate`] or in [`TaskRecord::notes`] so the
//! scorer can explain it.

use std::num::IntErrorKind;

use chrono::NaiveDate;
use serde_json::Value;

use crate::raw::{RawTask, field, is_truthy};

/// Title used when a task has none.
pub const UNTITLED_TASK: &str = "Untitled Task";
/// Importance used when none is supplied or it cannot be read.
pub const DEFAULT_IMPORTANCE: u8 = 5;
/// Lowest importance after clamping.
pub const MIN_IMPORTANCE: u8 = 1;
/// Highest importance after clamping.
pub const MAX_IMPORTANCE: u8 = 10;
/// Effort used when none is supplied or it is not a positive number.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;

const IMPORTANCE_NOT_INTEGER: &str = "Importance value was not an integer; defaulted to 5. ";
const HOURS_NOT_NUMERIC: &str = "Estimated hours value was not numeric; defaulted to 1.0. ";
const HOURS_NOT_POSITIVE: &str = "Estimated hours must be positive; defaulted to 1.0. ";

/// Outcome of reading a task's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDate {
    /// A valid calendar date.
    On(NaiveDate),
    /// No due date was supplied.
    Missing,
    /// A string was supplied but it is not an ISO `YYYY-MM-DD` date.
    Invalid,
    /// A value of some other JSON type was supplied.
    Unrecognised,
}

impl DueDate {
    /// Interpret an optional JSON field as a due date.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use taskrank_core::DueDate;
    ///
    /// assert!(DueDate::from_value(Some(&json!("2024-02-29"))).date().is_some());
    /// assert_eq!(DueDate::from_value(Some(&json!("2023-02-29"))), DueDate::Invalid);
    /// assert_eq!(DueDate::from_value(Some(&json!(20240229))), DueDate::Unrecognised);
    /// assert_eq!(DueDate::from_value(None), DueDate::Missing);
    /// ```
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::String(text)) => parse_iso_date(text).map_or(Self::Invalid, Self::On),
            Some(_) => Self::Unrecognised,
        }
    }

    /// Return the date when one was resolved.
    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        match self {
            Self::On(date) => Some(date),
            Self::Missing | Self::Invalid | Self::Unrecognised => None,
        }
    }

    /// Explanation fragment describing why a supplied value was ignored.
    #[must_use]
    pub const fn note(self) -> Option<&'static str> {
        match self {
            Self::Invalid => Some("Invalid due_date format; treated as no deadline. "),
            Self::Unrecognised => Some("Unrecognized due_date; treated as no deadline. "),
            Self::On(_) | Self::Missing => None,
        }
    }
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        Self::On(date)
    }
}

/// A task with every scoring input resolved to a typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    /// Display title, never empty.
    pub title: String,
    /// Resolved due date.
    pub due_date: DueDate,
    /// Importance in `MIN_IMPORTANCE..=MAX_IMPORTANCE`.
    pub importance: u8,
    /// Estimated effort in hours, always finite and positive.
    pub estimated_hours: f64,
    /// Dependencies as supplied; only the count affects scoring.
    pub dependencies: Vec<Value>,
    /// Explanation fragments for fields that fell back to defaults.
    pub notes: Vec<&'static str>,
}

impl TaskRecord {
    /// Normalise a raw task.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use taskrank_core::{RawTask, TaskRecord};
    ///
    /// let raw = RawTask::from_value(&json!({
    ///     "importance": "42",
    ///     "estimated_hours": -3,
    ///     "dependencies": "task-7",
    /// }))
    /// .expect("object input");
    /// let record = TaskRecord::from_raw(&raw);
    ///
    /// assert_eq!(record.title, "Untitled Task");
    /// assert_eq!(record.importance, 10);
    /// assert_eq!(record.estimated_hours, 1.0);
    /// assert_eq!(record.dependencies.len(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &RawTask) -> Self {
        let mut notes = Vec::new();
        let importance = resolve_importance(raw.get(field::IMPORTANCE), &mut notes);
        let estimated_hours = resolve_hours(raw.get(field::ESTIMATED_HOURS), &mut notes);
        Self {
            title: resolve_title(raw.get(field::TITLE)),
            due_date: DueDate::from_value(raw.get(field::DUE_DATE)),
            importance,
            estimated_hours,
            dependencies: resolve_dependencies(raw.get(field::DEPENDENCIES)),
            notes,
        }
    }

    /// Number of dependencies after normalisation.
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}

impl From<&RawTask> for TaskRecord {
    fn from(raw: &RawTask) -> Self {
        Self::from_raw(raw)
    }
}

/// Parse `YYYY-MM-DD` by splitting on `-`; each part may carry surrounding
/// whitespace and the year must fall in `1..=9999`.
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() || !(1..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Strings are used verbatim; other truthy values use their compact JSON text.
fn resolve_title(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        Some(other) if is_truthy(other) => other.to_string(),
        _ => UNTITLED_TASK.to_owned(),
    }
}

fn resolve_importance(value: Option<&Value>, notes: &mut Vec<&'static str>) -> u8 {
    let raw = match value {
        None | Some(Value::Null) => return DEFAULT_IMPORTANCE,
        Some(present) => coerce_integer(present),
    };
    let Some(integer) = raw else {
        notes.push(IMPORTANCE_NOT_INTEGER);
        return DEFAULT_IMPORTANCE;
    };
    let clamped = integer.clamp(i64::from(MIN_IMPORTANCE), i64::from(MAX_IMPORTANCE));
    u8::try_from(clamped).unwrap_or(DEFAULT_IMPORTANCE)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float importance values truncate toward zero and saturate"
)]
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|n| n.is_finite())
                    .map(|n| n.trunc() as i64)
            }),
        Value::String(text) => parse_integer(text),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(integer) => Some(integer),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn resolve_hours(value: Option<&Value>, notes: &mut Vec<&'static str>) -> f64 {
    let raw = match value {
        None | Some(Value::Null) => return DEFAULT_ESTIMATED_HOURS,
        Some(present) => coerce_float(present),
    };
    match raw {
        Some(hours) if hours > 0.0_f64 => hours,
        Some(_) => {
            notes.push(HOURS_NOT_POSITIVE);
            DEFAULT_ESTIMATED_HOURS
        }
        None => {
            notes.push(HOURS_NOT_NUMERIC);
            DEFAULT_ESTIMATED_HOURS
        }
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Bool(flag) => Some(f64::from(u8::from(*flag))),
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    parsed.filter(|hours| hours.is_finite())
}

fn resolve_dependencies(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(text)) if text.is_empty() => Vec::new(),
        Some(Value::Object(fields)) if fields.is_empty() => Vec::new(),
        Some(single) => vec![single.clone()],
    }
}
