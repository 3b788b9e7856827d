//! Score tasks by importance, urgency, effort and dependencies.
//!
//! The [`Scorer`] trait turns a [`TaskRecord`] into an [`Assessment`]: a
//! non-negative score, a human-readable explanation and the number of days
//! until the task is due. [`PriorityScorer`] is the standard heuristic.

use chrono::NaiveDate;

use crate::{PriorityWeights, PriorityWeightsError, RawTask, ScoredTask, TaskRecord, Urgency};

/// Result of scoring a single task.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Non-negative score rounded to four decimal places.
    pub score: f64,
    /// Human-readable account of every contributing factor.
    pub explanation: String,
    /// Signed days until the due date, negative when overdue.
    pub days_until_due: Option<i64>,
}

/// Calculate a priority score for a task.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single scorer
/// can serve concurrent requests. Scoring is infallible: malformed input has
/// already been normalised into a [`TaskRecord`], and implementations must
/// record any degradation in the explanation instead of failing.
///
/// Implementations must:
/// - Produce finite, non-negative scores.
/// - Return a non-empty explanation.
/// - Depend only on the record and the supplied `today`.
///
/// Use [`Scorer::sanitise`] to apply the score guards.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use taskrank_core::{Assessment, RawTask, Scorer, TaskRecord};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn assess(&self, _record: &TaskRecord, _today: NaiveDate) -> Assessment {
///         Assessment {
///             score: 1.0,
///             explanation: "Every task scores 1.".to_owned(),
///             days_until_due: None,
///         }
///     }
/// }
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
/// let scored = UnitScorer.score(&RawTask::new(), today);
/// assert_eq!(scored.score, 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Assess a normalised record relative to `today`.
    fn assess(&self, record: &TaskRecord, today: NaiveDate) -> Assessment;

    /// Normalise `task`, assess it, and attach the result to a copy of the
    /// original fields.
    fn score(&self, task: &RawTask, today: NaiveDate) -> ScoredTask {
        let record = TaskRecord::from_raw(task);
        let assessment = self.assess(&record, today);
        log::trace!(
            "scored task {:?}: {:.4}",
            record.title,
            assessment.score
        );
        ScoredTask::new(task.clone(), assessment)
    }

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps negatives to `0.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0_f64;
        }
        score.max(0.0_f64)
    }
}

/// The standard priority heuristic.
///
/// `score = max(0, importance * urgency * effort - penalty)` where `urgency`
/// comes from the task's [`Urgency`] band, `effort = 1 / (1 + log10(hours + 1))`
/// and `penalty` grows linearly with the dependency count.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use serde_json::json;
/// use taskrank_core::{PriorityScorer, RawTask, Scorer};
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
/// let task = RawTask::from_value(&json!({
///     "title": "Pay bill",
///     "due_date": "2024-05-01",
///     "importance": 8,
///     "estimated_hours": 1,
///     "dependencies": [],
/// }))
/// .expect("object input");
///
/// let scored = PriorityScorer::default().score(&task, today);
/// assert_eq!(scored.days_until_due, Some(0));
/// assert!((scored.score - 7.9937).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriorityScorer {
    weights: PriorityWeights,
}

impl PriorityScorer {
    /// Build a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`PriorityWeightsError`] when the weights fail validation.
    pub fn new(weights: PriorityWeights) -> Result<Self, PriorityWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights used by this scorer.
    #[must_use]
    pub const fn weights(&self) -> &PriorityWeights {
        &self.weights
    }
}

impl Scorer for PriorityScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the heuristic multiplies importance, urgency and effort"
    )]
    fn assess(&self, record: &TaskRecord, today: NaiveDate) -> Assessment {
        let days_until_due = record
            .due_date
            .date()
            .map(|due| due.signed_duration_since(today).num_days());
        let urgency = Urgency::classify(days_until_due, &self.weights);
        let multiplier = self.weights.multiplier(urgency);
        let effort = effort_factor(record.estimated_hours);
        let dependencies = record.dependency_count();
        let penalty = self.weights.dependency_penalty(dependencies);

        let raw = f64::from(record.importance) * multiplier * effort;
        let score = Self::sanitise(raw - penalty);

        let mut explanation = format!(
            "Title: {title}. Importance={importance}, Estimated hours={hours:.1}, \
             Urgency multiplier={multiplier:.2}, Effort factor={effort:.2}. \
             Base score={raw:.2}, Dependency penalty={penalty:.2}. \
             Final score={score:.2}. ",
            title = record.title,
            importance = record.importance,
            hours = record.estimated_hours,
        );
        if let Some(note) = record.due_date.note() {
            explanation.push_str(note);
        }
        explanation.push_str(&urgency.clause(&self.weights));
        explanation.push_str(&dependency_clause(dependencies));
        for note in &record.notes {
            explanation.push_str(note);
        }

        Assessment {
            score: round_score(score),
            explanation,
            days_until_due,
        }
    }
}

/// Dampening factor for effort: `1 / (1 + log10(hours + 1))`.
///
/// Cheaper tasks approach `1.0`; the factor decreases monotonically with
/// `hours`. Callers pass the normalised, strictly positive effort.
#[expect(
    clippy::float_arithmetic,
    reason = "the effort factor is a logarithmic dampening term"
)]
#[must_use]
pub fn effort_factor(hours: f64) -> f64 {
    1.0_f64 / (1.0_f64 + (hours + 1.0_f64).log10())
}

fn dependency_clause(count: usize) -> String {
    if count == 0 {
        "No dependencies; no penalty. ".to_owned()
    } else {
        format!("Task has {count} dependencies; small penalty applied. ")
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding to four decimal places scales by 10^4"
)]
fn round_score(score: f64) -> f64 {
    (score * 10_000.0_f64).round() / 10_000.0_f64
}
