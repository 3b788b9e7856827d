//! Tunable constants for the priority heuristic.

use thiserror::Error;

use crate::Urgency;

/// Multipliers, deadline windows and penalties used by
/// [`PriorityScorer`](crate::PriorityScorer).
///
/// The default values are the standard heuristic: overdue tasks get a 1.5x
/// boost, tasks due today 1.3x, within three days 1.1x, within a week 1.0x,
/// later 0.8x and undated tasks 0.9x. Any dependency costs 0.2 plus 0.05 per
/// dependency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityWeights {
    /// Multiplier for overdue tasks.
    pub past_due: f64,
    /// Multiplier for tasks due today.
    pub due_today: f64,
    /// Multiplier for tasks due within `soon_within_days`.
    pub due_soon: f64,
    /// Multiplier for tasks due within `week_within_days`.
    pub due_this_week: f64,
    /// Multiplier for tasks due later than `week_within_days`.
    pub far_future: f64,
    /// Multiplier for tasks without a usable due date.
    pub no_deadline: f64,
    /// Upper bound, in days, of the "due soon" window.
    pub soon_within_days: i64,
    /// Upper bound, in days, of the "due this week" window.
    pub week_within_days: i64,
    /// Flat penalty applied when a task has any dependency.
    pub dependency_base_penalty: f64,
    /// Additional penalty per dependency.
    pub dependency_penalty_per_item: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            past_due: 1.5_f64,
            due_today: 1.3_f64,
            due_soon: 1.1_f64,
            due_this_week: 1.0_f64,
            far_future: 0.8_f64,
            no_deadline: 0.9_f64,
            soon_within_days: 3,
            week_within_days: 7,
            dependency_base_penalty: 0.2_f64,
            dependency_penalty_per_item: 0.05_f64,
        }
    }
}

/// Errors raised when custom weights are inconsistent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PriorityWeightsError {
    /// A multiplier or penalty was negative, NaN or infinite.
    #[error("{name} must be a finite, non-negative number")]
    InvalidValue {
        /// Name of the offending field.
        name: &'static str,
    },
    /// The deadline windows were not ordered `0 < soon <= week`.
    #[error("deadline windows must satisfy 0 < soon ({soon}) <= week ({week})")]
    InvalidWindows {
        /// Configured "due soon" window.
        soon: i64,
        /// Configured "due this week" window.
        week: i64,
    },
}

impl PriorityWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`PriorityWeightsError`] when a value is not finite and
    /// non-negative, or when the deadline windows are out of order.
    pub fn validate(self) -> Result<Self, PriorityWeightsError> {
        let values = [
            ("past_due", self.past_due),
            ("due_today", self.due_today),
            ("due_soon", self.due_soon),
            ("due_this_week", self.due_this_week),
            ("far_future", self.far_future),
            ("no_deadline", self.no_deadline),
            ("dependency_base_penalty", self.dependency_base_penalty),
            ("dependency_penalty_per_item", self.dependency_penalty_per_item),
        ];
        if let Some(&(name, _)) = values
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0_f64)
        {
            return Err(PriorityWeightsError::InvalidValue { name });
        }
        if self.soon_within_days <= 0 || self.soon_within_days > self.week_within_days {
            return Err(PriorityWeightsError::InvalidWindows {
                soon: self.soon_within_days,
                week: self.week_within_days,
            });
        }
        Ok(self)
    }

    /// Multiplier applied for an urgency band.
    #[must_use]
    pub const fn multiplier(&self, urgency: Urgency) -> f64 {
        match urgency {
            Urgency::PastDue => self.past_due,
            Urgency::DueToday => self.due_today,
            Urgency::DueSoon => self.due_soon,
            Urgency::DueThisWeek => self.due_this_week,
            Urgency::FarFuture => self.far_future,
            Urgency::NoDeadline => self.no_deadline,
        }
    }

    /// Penalty for `count` dependencies; zero when there are none.
    #[expect(
        clippy::float_arithmetic,
        reason = "the dependency penalty is a linear function of the count"
    )]
    #[must_use]
    pub fn dependency_penalty(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0_f64;
        }
        let items = f64::from(u32::try_from(count).unwrap_or(u32::MAX));
        self.dependency_base_penalty + self.dependency_penalty_per_item * items
    }
}
