//! Analyze and suggest request handling.
//!
//! Both endpoints are framework-neutral: they take a parsed [`Method`], the
//! raw body bytes and the caller's notion of today, and return either a
//! response value or a [`RequestError`] ready to be rendered.

use chrono::NaiveDate;
use serde_json::Value;
use taskrank_core::{PriorityScorer, Ranker, ScoredTask, Scorer, is_truthy};

use crate::request::{STRATEGY_FIELD, optional_tasks, parse_body, required_tasks};
use crate::{AnalyzeResponse, Method, RequestError, SuggestResponse};

/// Strategy reported when the request names none.
pub const DEFAULT_STRATEGY: &str = "default";
/// Number of tasks returned by suggest unless configured otherwise.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;
/// Summary returned when there is nothing to suggest.
pub const NO_SUGGESTIONS_SUMMARY: &str = "No tasks provided to suggest from.";
/// Separator between explanations in the suggest summary.
pub const SUMMARY_DELIMITER: &str = " | ";

/// Endpoint handlers sharing one ranker.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskrank_api::{Method, TaskEndpoints};
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
/// let endpoints = TaskEndpoints::with_defaults();
/// let body = br#"{"tasks": [{"title": "Pay bill", "importance": 8}]}"#;
///
/// let response = endpoints
///     .analyze(&Method::Post, body, today)
///     .expect("accepted");
/// assert_eq!(response.tasks.len(), 1);
/// assert_eq!(response.strategy, "default");
/// ```
#[derive(Debug, Clone)]
pub struct TaskEndpoints<S = PriorityScorer> {
    ranker: Ranker<S>,
    suggestion_limit: usize,
}

impl TaskEndpoints {
    /// Endpoints backed by the standard heuristic.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Ranker::with_defaults())
    }
}

impl<S: Scorer> TaskEndpoints<S> {
    /// Endpoints backed by `ranker`, suggesting [`DEFAULT_SUGGESTION_LIMIT`] tasks.
    #[must_use]
    pub const fn new(ranker: Ranker<S>) -> Self {
        Self {
            ranker,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Replace the number of tasks suggest returns.
    #[must_use]
    pub const fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Number of tasks suggest returns.
    #[must_use]
    pub const fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    /// Score and rank every task in a `POST` body.
    ///
    /// # Errors
    /// [`RequestError::MethodNotAllowed`] for anything but `POST`, and
    /// [`RequestError::TasksNotAList`] when `tasks` is not a JSON array.
    pub fn analyze(
        &self,
        method: &Method,
        body: &[u8],
        today: NaiveDate,
    ) -> Result<AnalyzeResponse, RequestError> {
        if *method != Method::Post {
            return Err(RequestError::POST_ONLY);
        }
        let payload = parse_body(body);
        let tasks = required_tasks(&payload)?;
        let strategy = payload
            .get(STRATEGY_FIELD)
            .filter(|value| is_truthy(value))
            .cloned()
            .unwrap_or_else(|| Value::from(DEFAULT_STRATEGY));
        Ok(AnalyzeResponse {
            tasks: self.ranker.rank(tasks, today, None),
            strategy,
        })
    }

    /// Suggest the most pressing tasks.
    ///
    /// `GET` ignores the body and suggests from nothing. `POST` reads the
    /// optional `tasks` list.
    ///
    /// # Errors
    /// [`RequestError::MethodNotAllowed`] for methods other than `GET` and
    /// `POST`, and [`RequestError::TasksNotAList`] when a `POST` carries a
    /// `tasks` field that is neither `null` nor an array.
    pub fn suggest(
        &self,
        method: &Method,
        body: &[u8],
        today: NaiveDate,
    ) -> Result<SuggestResponse, RequestError> {
        let tasks = match method {
            Method::Get => Vec::new(),
            Method::Post => {
                let payload = parse_body(body);
                let tasks = optional_tasks(&payload)?;
                self.ranker.top(tasks, today, self.suggestion_limit)
            }
            _ => return Err(RequestError::GET_OR_POST),
        };
        let summary = summarise(&tasks, today);
        Ok(SuggestResponse { tasks, summary })
    }
}

/// Handle an analyze request with the standard heuristic.
///
/// # Errors
/// See [`TaskEndpoints::analyze`].
pub fn analyze(
    method: &Method,
    body: &[u8],
    today: NaiveDate,
) -> Result<AnalyzeResponse, RequestError> {
    TaskEndpoints::with_defaults().analyze(method, body, today)
}

/// Handle a suggest request with the standard heuristic.
///
/// # Errors
/// See [`TaskEndpoints::suggest`].
pub fn suggest(
    method: &Method,
    body: &[u8],
    today: NaiveDate,
    limit: usize,
) -> Result<SuggestResponse, RequestError> {
    TaskEndpoints::with_defaults()
        .with_suggestion_limit(limit)
        .suggest(method, body, today)
}

fn summarise(tasks: &[ScoredTask], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return NO_SUGGESTIONS_SUMMARY.to_owned();
    }
    let explanations: Vec<&str> = tasks.iter().map(|task| task.explanation.as_str()).collect();
    format!(
        "Top {} suggestions for {}: {}",
        tasks.len(),
        today.format("%Y-%m-%d"),
        explanations.join(SUMMARY_DELIMITER)
    )
}
