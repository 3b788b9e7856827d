//! Urgency bands derived from the number of days until a task is due.

use std::borrow::Cow;

use crate::PriorityWeights;

/// Deadline proximity band used to pick an urgency multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// The due date has passed.
    PastDue,
    /// The task is due today.
    DueToday,
    /// Due within the "soon" window (three days by default).
    DueSoon,
    /// Due within the week window (seven days by default).
    DueThisWeek,
    /// Due beyond the week window.
    FarFuture,
    /// No usable due date.
    NoDeadline,
}

impl Urgency {
    /// Classify `days_until_due` using the windows configured in `weights`.
    ///
    /// Bands are checked in order: overdue, today, soon, this week, later.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskrank_core::{PriorityWeights, Urgency};
    ///
    /// let weights = PriorityWeights::default();
    /// assert_eq!(Urgency::classify(Some(-1), &weights), Urgency::PastDue);
    /// assert_eq!(Urgency::classify(Some(3), &weights), Urgency::DueSoon);
    /// assert_eq!(Urgency::classify(Some(4), &weights), Urgency::DueThisWeek);
    /// assert_eq!(Urgency::classify(None, &weights), Urgency::NoDeadline);
    /// ```
    #[must_use]
    pub const fn classify(days_until_due: Option<i64>, weights: &PriorityWeights) -> Self {
        match days_until_due {
            None => Self::NoDeadline,
            Some(days) if days < 0 => Self::PastDue,
            Some(0) => Self::DueToday,
            Some(days) if days <= weights.soon_within_days => Self::DueSoon,
            Some(days) if days <= weights.week_within_days => Self::DueThisWeek,
            Some(_) => Self::FarFuture,
        }
    }

    /// Explanation clause describing the band.
    ///
    /// Windowed bands quote the window configured in `weights`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskrank_core::{PriorityWeights, Urgency};
    ///
    /// let weights = PriorityWeights::default();
    /// assert_eq!(
    ///     Urgency::DueSoon.clause(&weights),
    ///     "Task is due soon (<= 3 days); moderate urgency boost. "
    /// );
    /// ```
    #[must_use]
    pub fn clause(self, weights: &PriorityWeights) -> Cow<'static, str> {
        match self {
            Self::PastDue => Cow::Borrowed("Task is past due; strong urgency boost. "),
            Self::DueToday => Cow::Borrowed("Task is due today; high urgency boost. "),
            Self::DueSoon => Cow::Owned(format!(
                "Task is due soon (<= {} days); moderate urgency boost. ",
                weights.soon_within_days
            )),
            Self::DueThisWeek if weights.week_within_days == DAYS_PER_WEEK => {
                Cow::Borrowed("Task is due within a week; neutral urgency. ")
            }
            Self::DueThisWeek => Cow::Owned(format!(
                "Task is due within {} days; neutral urgency. ",
                weights.week_within_days
            )),
            Self::FarFuture => {
                Cow::Borrowed("Task is far in the future; slightly reduced urgency. ")
            }
            Self::NoDeadline => Cow::Borrowed("No valid due date; mild penalty to urgency. "),
        }
    }
}

const DAYS_PER_WEEK: i64 = 7;
