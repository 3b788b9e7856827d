//! Facade crate for the Taskrank prioritisation engine.
//!
//! This crate re-exports the core scoring and ranking types and exposes the
//! request adapters behind the `api` feature.

#![forbid(unsafe_code)]

pub use taskrank_core::{
    Assessment, PriorityScorer, PriorityWeights, PriorityWeightsError, Ranker, RawTask,
    RawTaskError, ScoredTask, Scorer, TaskRecord, UNDATED_SENTINEL_DAYS, Urgency,
};

#[cfg(feature = "test-support")]
pub use taskrank_core::test_support;

#[cfg(feature = "api")]
pub use taskrank_api::{
    AnalyzeResponse, DEFAULT_SUGGESTION_LIMIT, ErrorBody, Method, RequestError, SuggestResponse,
    TaskEndpoints, analyze, suggest,
};
