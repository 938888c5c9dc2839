use serde::{Deserialize, Serialize};

use crate::scoring::ReadabilityScores;

/// Fixed identifier of the per-snapshot average result.
pub const AVERAGE_RESULT_NAME: &str = "Average";

/// Scores of one document, identified by its path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleResult {
    pub name: String,
    pub scores: ReadabilityScores,
}

impl SingleResult {
    pub fn new(name: impl Into<String>, scores: ReadabilityScores) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }
}

/// A result paired with its change against the other snapshot.
///
/// `diff` is `None` when the other snapshot had no counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultWithDiff {
    pub name: String,
    pub scores: ReadabilityScores,
    pub diff: Option<ReadabilityScores>,
}

/// All results of one snapshot plus their average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readability {
    pub file_results: Vec<SingleResult>,
    pub average_result: SingleResult,
}

impl Readability {
    /// Build a snapshot, averaging the file results field by field. An empty
    /// snapshot averages to the worst-case scores.
    pub fn new(file_results: Vec<SingleResult>) -> Self {
        let scores: Vec<ReadabilityScores> = file_results.iter().map(|r| r.scores).collect();
        let average = ReadabilityScores::mean(&scores).unwrap_or_else(ReadabilityScores::worst);
        Self {
            file_results,
            average_result: SingleResult::new(AVERAGE_RESULT_NAME, average),
        }
    }
}

/// A document that moved from `from` to `to` between snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

impl Rename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Classification of the documents touched by a change-set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStatuses {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub renamed: Vec<Rename>,
}

impl FileStatuses {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.renamed.is_empty()
    }
}

/// Comparison of two snapshots restricted to the documents a change-set
/// added or modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub file_results: Vec<ResultWithDiff>,
    pub average_result: ResultWithDiff,
}
