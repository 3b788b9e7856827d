//! Test-only scorers and task builders used by unit and behaviour tests.

use chrono::{Days, NaiveDate};

use crate::{Assessment, RawTask, Scorer, TaskRecord};

/// Fixed reference date used by tests that need a deterministic "today".
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or(NaiveDate::MIN)
}

/// Offset `today` by a signed number of days.
#[must_use]
pub fn days_from(today: NaiveDate, offset: i64) -> NaiveDate {
    let magnitude = Days::new(offset.unsigned_abs());
    let shifted = if offset < 0 {
        today.checked_sub_days(magnitude)
    } else {
        today.checked_add_days(magnitude)
    };
    shifted.unwrap_or(today)
}

/// A task with a title, importance and a due date `offset` days from `today`.
#[must_use]
pub fn dated_task(title: &str, importance: i64, today: NaiveDate, offset: i64) -> RawTask {
    RawTask::new()
        .with_field("title", title)
        .with_field("importance", importance)
        .with_due_date(days_from(today, offset))
}

/// `Scorer` that assigns every task the same score.
///
/// Days until due are still derived from the record so ranking tie-breaks
/// can be exercised independently of the heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScorer {
    /// Score returned for every task.
    pub score: f64,
}

impl Scorer for FixedScorer {
    fn assess(&self, record: &TaskRecord, today: NaiveDate) -> Assessment {
        Assessment {
            score: self.score,
            explanation: format!("Fixed score for {}.", record.title),
            days_until_due: record
                .due_date
                .date()
                .map(|due| due.signed_duration_since(today).num_days()),
        }
    }
}
