//! Core scoring and ranking for Taskrank.
//!
//! Loosely-typed task objects enter as [`RawTask`] values and are normalised
//! once into a typed [`TaskRecord`]. A [`Scorer`] turns each record into an
//! [`Assessment`], and the [`Ranker`] orders the resulting [`ScoredTask`]s by
//! descending score and then by nearest due date.
//!
//! Scoring never fails. Malformed fields fall back to defaults and the
//! fallback is described in the explanation attached to each score. The
//! reference date ("today") is always supplied by the caller.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod raw;
mod ranker;
mod record;
mod scored;
mod scorer;
mod urgency;
mod weights;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use raw::{RawTask, RawTaskError, field, is_truthy};
pub use ranker::{Ranker, UNDATED_SENTINEL_DAYS, compare};
pub use record::{
    DEFAULT_ESTIMATED_HOURS, DEFAULT_IMPORTANCE, DueDate, MAX_IMPORTANCE, MIN_IMPORTANCE,
    TaskRecord, UNTITLED_TASK,
};
pub use scored::{DAYS_UNTIL_DUE_KEY, EXPLANATION_KEY, SCORE_KEY, ScoredTask};
pub use scorer::{Assessment, PriorityScorer, Scorer, effort_factor};
pub use urgency::Urgency;
pub use weights::{PriorityWeights, PriorityWeightsError};
