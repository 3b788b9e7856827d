//! Tasks annotated with their score.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Assessment, RawTask};

/// Wire key carrying the score.
pub const SCORE_KEY: &str = "_score";
/// Wire key carrying the explanation.
pub const EXPLANATION_KEY: &str = "_explanation";
/// Wire key carrying the days until the due date.
pub const DAYS_UNTIL_DUE_KEY: &str = "_days_until_due";

/// A task's original fields together with its assessment.
///
/// Serialises as a single flat object: every original field followed by
/// `_score`, `_explanation` and `_days_until_due`. Original fields sharing
/// those names are replaced by the computed values.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taskrank_core::{Assessment, RawTask, ScoredTask};
///
/// let task = RawTask::new().with_field("title", "Tidy desk");
/// let scored = ScoredTask::new(
///     task,
///     Assessment {
///         score: 2.5,
///         explanation: "Quick win.".to_owned(),
///         days_until_due: None,
///     },
/// );
/// let value = serde_json::to_value(&scored).expect("serialise");
/// assert_eq!(
///     value,
///     json!({
///         "title": "Tidy desk",
///         "_score": 2.5,
///         "_explanation": "Quick win.",
///         "_days_until_due": null,
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTask {
    /// The task exactly as supplied.
    pub task: RawTask,
    /// Non-negative score rounded to four decimal places.
    pub score: f64,
    /// Human-readable account of the score.
    pub explanation: String,
    /// Signed days until the due date, `None` without a valid date.
    pub days_until_due: Option<i64>,
}

impl ScoredTask {
    /// Attach an assessment to a task.
    #[must_use]
    pub fn new(task: RawTask, assessment: Assessment) -> Self {
        let Assessment {
            score,
            explanation,
            days_until_due,
        } = assessment;
        Self {
            task,
            score,
            explanation,
            days_until_due,
        }
    }
}

impl Serialize for ScoredTask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let reserved = [SCORE_KEY, EXPLANATION_KEY, DAYS_UNTIL_DUE_KEY];
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.task.fields() {
            if !reserved.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.serialize_entry(SCORE_KEY, &self.score)?;
        map.serialize_entry(EXPLANATION_KEY, &self.explanation)?;
        map.serialize_entry(DAYS_UNTIL_DUE_KEY, &self.days_until_due)?;
        map.end()
    }
}
