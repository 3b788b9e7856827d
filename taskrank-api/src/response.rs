//! Successful endpoint responses.

use serde::Serialize;
use serde_json::Value;
use taskrank_core::ScoredTask;

/// Response from the analyze endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResponse {
    /// Every task, ranked.
    pub tasks: Vec<ScoredTask>,
    /// Strategy label echoed from the request, or `"default"`.
    pub strategy: Value,
}

/// Response from the suggest endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestResponse {
    /// The highest-ranked tasks.
    pub tasks: Vec<ScoredTask>,
    /// One-line account of the suggestions.
    pub summary: String,
}
