//! Rank scored tasks and select the most pressing ones.
//!
//! Ordering is by descending score, then by ascending days until due, with
//! undated tasks placed after dated ones that share a score. The sort is
//! stable, so tasks that tie on both keys keep their input order.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde_json::Value;

use crate::{PriorityScorer, RawTask, ScoredTask, Scorer};

/// Days-until-due value used for undated tasks when breaking score ties.
pub const UNDATED_SENTINEL_DAYS: i64 = 1_000_000;

/// Applies a [`Scorer`] to a batch of tasks and orders the results.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use serde_json::json;
/// use taskrank_core::Ranker;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
/// let tasks = vec![
///     json!({"title": "Later", "importance": 3}),
///     json!("not a task"),
///     json!({"title": "Now", "importance": 9, "due_date": "2024-05-01"}),
/// ];
///
/// let ranked = Ranker::with_defaults().rank(&tasks, today, None);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].task.get("title"), Some(&json!("Now")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ranker<S = PriorityScorer> {
    scorer: S,
}

impl Ranker {
    /// Build a ranker around the standard [`PriorityScorer`].
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PriorityScorer::default())
    }
}

impl<S: Scorer> Ranker<S> {
    /// Build a ranker around `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Scorer used by this ranker.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score every object in `tasks`, sort, and keep the first `limit`.
    ///
    /// Elements that are not JSON objects are skipped.
    #[must_use]
    pub fn rank<'a, I>(&self, tasks: I, today: NaiveDate, limit: Option<usize>) -> Vec<ScoredTask>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let records = tasks
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match RawTask::from_value(value) {
                Ok(task) => Some(task),
                Err(err) => {
                    log::debug!("skipping task at index {index}: {err}");
                    None
                }
            });
        self.rank_records(records, today, limit)
    }

    /// Rank already-parsed tasks.
    #[must_use]
    pub fn rank_records<I>(&self, tasks: I, today: NaiveDate, limit: Option<usize>) -> Vec<ScoredTask>
    where
        I: IntoIterator<Item = RawTask>,
    {
        let mut scored: Vec<ScoredTask> = tasks
            .into_iter()
            .map(|task| self.scorer.score(&task, today))
            .collect();
        scored.sort_by(compare);
        if let Some(n) = limit {
            scored.truncate(n);
        }
        scored
    }

    /// The `n` highest-ranked tasks.
    #[must_use]
    pub fn top<'a, I>(&self, tasks: I, today: NaiveDate, n: usize) -> Vec<ScoredTask>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        self.rank(tasks, today, Some(n))
    }
}

/// Ranking comparator: higher score first, then sooner due date.
///
/// NaN scores compare as `0.0` and missing due dates as
/// [`UNDATED_SENTINEL_DAYS`].
#[must_use]
pub fn compare(left: &ScoredTask, right: &ScoredTask) -> Ordering {
    sort_score(right)
        .partial_cmp(&sort_score(left))
        .unwrap_or(Ordering::Equal)
        .then_with(|| sort_days(left).cmp(&sort_days(right)))
}

fn sort_score(task: &ScoredTask) -> f64 {
    if task.score.is_nan() { 0.0_f64 } else { task.score }
}

fn sort_days(task: &ScoredTask) -> i64 {
    task.days_until_due.unwrap_or(UNDATED_SENTINEL_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Assessment;
    use crate::test_support::{FixedScorer, dated_task, reference_date};
    use rstest::rstest;
    use serde_json::json;

    fn scored(title: &str, score: f64, days_until_due: Option<i64>) -> ScoredTask {
        ScoredTask::new(
            RawTask::new().with_field("title", title),
            Assessment {
                score,
                explanation: format!("{title} scored {score}"),
                days_until_due,
            },
        )
    }

    fn titles(tasks: &[ScoredTask]) -> Vec<String> {
        tasks
            .iter()
            .filter_map(|task| task.task.get("title").and_then(Value::as_str))
            .map(str::to_owned)
            .collect()
    }

    #[rstest]
    fn equal_scores_prefer_sooner_due_dates() {
        let mut tasks = vec![
            scored("undated", 5.0, None),
            scored("in three days", 5.0, Some(3)),
            scored("tomorrow", 5.0, Some(1)),
        ];
        tasks.sort_by(compare);
        assert_eq!(titles(&tasks), ["tomorrow", "in three days", "undated"]);
    }

    #[rstest]
    fn higher_scores_come_first() {
        let mut tasks = vec![
            scored("low", 1.0, Some(-3)),
            scored("high", 9.0, None),
            scored("mid", 4.0, Some(2)),
        ];
        tasks.sort_by(compare);
        assert_eq!(titles(&tasks), ["high", "mid", "low"]);
    }

    #[rstest]
    fn nan_scores_rank_as_zero() {
        let mut tasks = vec![scored("nan", f64::NAN, Some(0)), scored("small", 0.1, None)];
        tasks.sort_by(compare);
        assert_eq!(titles(&tasks), ["small", "nan"]);
    }

    #[rstest]
    fn full_ties_keep_input_order() {
        let mut tasks = vec![
            scored("first", 2.0, Some(4)),
            scored("second", 2.0, Some(4)),
            scored("third", 2.0, Some(4)),
        ];
        tasks.sort_by(compare);
        assert_eq!(titles(&tasks), ["first", "second", "third"]);
    }

    #[rstest]
    fn truncates_after_the_full_sort() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        let tasks = vec![
            json!({"title": "a", "importance": 1}),
            json!({"title": "b", "importance": 2}),
            json!({"title": "c", "importance": 10}),
            json!({"title": "d", "importance": 9}),
        ];
        let top = Ranker::with_defaults().top(&tasks, today, 2);
        assert_eq!(titles(&top), ["c", "d"]);
    }

    #[rstest]
    fn limit_larger_than_input_returns_everything() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        let tasks = vec![json!({"title": "only"})];
        let ranked = Ranker::with_defaults().rank(&tasks, today, Some(10));
        assert_eq!(ranked.len(), 1);
    }

    #[rstest]
    fn skips_non_objects() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        let tasks = vec![json!(1), json!(null), json!([]), json!({"title": "real"})];
        let ranked = Ranker::with_defaults().rank(&tasks, today, None);
        assert_eq!(titles(&ranked), ["real"]);
    }

    #[rstest]
    fn rank_records_orders_dated_tasks_with_a_custom_scorer() {
        let today = reference_date();
        let ranker = Ranker::new(FixedScorer { score: 2.5 });
        let tasks = vec![
            dated_task("next week", 4, today, 7),
            dated_task("overdue", 4, today, -2),
            RawTask::new().with_field("title", "undated"),
            dated_task("tomorrow", 4, today, 1),
        ];

        let ranked = ranker.rank_records(tasks, today, None);

        assert_eq!(titles(&ranked), ["overdue", "tomorrow", "next week", "undated"]);
        assert_eq!(ranked.first().and_then(|task| task.days_until_due), Some(-2));
        assert!((ranker.scorer().score - 2.5).abs() < f64::EPSILON);
    }
}
