//! Behavioural coverage for ranking and top-N selection.

use std::cell::RefCell;

use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use taskrank_core::test_support::{FixedScorer, dated_task, reference_date};
use taskrank_core::{Ranker, RawTask, ScoredTask};

/// Shared state for a ranking scenario.
pub struct RankingContext {
    today: NaiveDate,
    fixed_score: RefCell<Option<f64>>,
    records: RefCell<Vec<RawTask>>,
    values: RefCell<Vec<Value>>,
    ranked: RefCell<Vec<ScoredTask>>,
}

impl RankingContext {
    fn ranked_titles(&self) -> Vec<String> {
        self.ranked
            .borrow()
            .iter()
            .map(|task| {
                task.task
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned()
            })
            .collect()
    }

    fn tie_scores(&self) {
        *self.fixed_score.borrow_mut() = Some(5.0);
    }

    fn run(&self, limit: Option<usize>) {
        let records = self.records.borrow().clone();
        let values = self.values.borrow();
        let ranked = match *self.fixed_score.borrow() {
            Some(score) => {
                Ranker::new(FixedScorer { score }).rank_records(records, self.today, limit)
            }
            None if values.is_empty() => {
                Ranker::with_defaults().rank_records(records, self.today, limit)
            }
            None => Ranker::with_defaults().rank(values.iter(), self.today, limit),
        };
        *self.ranked.borrow_mut() = ranked;
    }
}

#[fixture]
/// Build a fresh `RankingContext` pinned to the shared reference date.
pub fn context() -> RankingContext {
    RankingContext {
        today: reference_date(),
        fixed_score: RefCell::new(None),
        records: RefCell::new(Vec::new()),
        values: RefCell::new(Vec::new()),
        ranked: RefCell::new(Vec::new()),
    }
}

#[given("two identically scored tasks due in three days and tomorrow")]
fn tied_dated_tasks(context: &RankingContext) {
    context.tie_scores();
    *context.records.borrow_mut() = vec![
        dated_task("B", 5, context.today, 3),
        dated_task("A", 5, context.today, 1),
    ];
}

#[given("identically scored tasks where one has no due date")]
fn tied_with_undated(context: &RankingContext) {
    context.tie_scores();
    *context.records.borrow_mut() = vec![
        RawTask::new().with_field("title", "undated"),
        dated_task("far", 5, context.today, 292),
        dated_task("overdue", 5, context.today, -74),
    ];
}

#[given("five tasks of increasing importance")]
fn five_tasks(context: &RankingContext) {
    *context.records.borrow_mut() = (1..=5)
        .map(|importance| {
            RawTask::new()
                .with_field("title", format!("imp-{importance}"))
                .with_field("importance", importance)
        })
        .collect();
}

#[given("a batch containing entries that are not objects")]
fn mixed_batch(context: &RankingContext) {
    *context.values.borrow_mut() = vec![
        json!("just text"),
        json!({"title": "kept", "importance": 2}),
        json!(42),
        json!(["nested"]),
        json!({"title": "also kept", "importance": 9}),
    ];
}

#[when("I rank the tasks")]
fn rank_tasks(context: &RankingContext) {
    context.run(None);
}

#[when("I select the top three tasks")]
fn select_top_three(context: &RankingContext) {
    context.run(Some(3));
}

#[then("the task due tomorrow is ranked first")]
fn tomorrow_first(context: &RankingContext) {
    assert_eq!(context.ranked_titles(), ["A", "B"]);
}

#[then("the undated task is ranked last")]
fn undated_last(context: &RankingContext) {
    assert_eq!(context.ranked_titles(), ["overdue", "far", "undated"]);
}

#[then("the three most important tasks are returned in order")]
fn top_three_in_order(context: &RankingContext) {
    assert_eq!(context.ranked_titles(), ["imp-5", "imp-4", "imp-3"]);
}

#[then("only the object entries are ranked")]
fn only_objects(context: &RankingContext) {
    assert_eq!(context.ranked_titles(), ["also kept", "kept"]);
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn due_date_tie_break(context: RankingContext) {
    let _ = context;
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn undated_tie_break(context: RankingContext) {
    let _ = context;
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn top_three(context: RankingContext) {
    let _ = context;
}

#[scenario(path = "tests/features/ranking.feature", index = 3)]
fn skips_non_objects(context: RankingContext) {
    let _ = context;
}
