//! Scoring of whole snapshots.
//!
//! Every document of a snapshot runs through the normalizer and the scorer
//! independently. Results keep the order the documents were discovered in,
//! whether or not they are processed in parallel.

use rayon::prelude::*;

use crate::comparison::{Readability, SingleResult};
use crate::core::errors::Result;
use crate::metrics::MetricsProvider;
use crate::scoring::ReadabilityScorer;
use crate::transformers::{NormalizeOptions, Pipeline};

/// Raw text of one document and its stable identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Runs normalizer and scorer over the documents of one snapshot.
pub struct SnapshotScorer<'a> {
    pipeline: Pipeline,
    scorer: ReadabilityScorer<'a>,
    parallel: bool,
}

impl<'a> SnapshotScorer<'a> {
    pub fn new(options: &NormalizeOptions, provider: &'a dyn MetricsProvider) -> Self {
        Self {
            pipeline: Pipeline::standard(options),
            scorer: ReadabilityScorer::new(provider),
            parallel: true,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Normalize and score one document.
    pub fn score_document(&self, document: &Document) -> Result<SingleResult> {
        let text = self.pipeline.normalize(&document.name, &document.text)?;
        let scores = self.scorer.score(&text);
        log::debug!(
            "Scored {}: readability {:.2}",
            document.name,
            scores.readability_score
        );
        Ok(SingleResult::new(document.name.clone(), scores))
    }

    /// Score every document. Any document that fails to parse fails the
    /// whole snapshot.
    pub fn score_documents(&self, documents: &[Document]) -> Result<Readability> {
        log::info!("Scoring {} documents", documents.len());
        let file_results = if self.parallel {
            documents
                .par_iter()
                .map(|document| self.score_document(document))
                .collect::<Result<Vec<_>>>()?
        } else {
            documents
                .iter()
                .map(|document| self.score_document(document))
                .collect::<Result<Vec<_>>>()?
        };
        Ok(Readability::new(file_results))
    }
}
