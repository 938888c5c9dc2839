//! Readability scoring.
//!
//! Raw metrics from a [`MetricsProvider`] are capped into their declared
//! ranges, normalized to 0..=1 with the best end at 1, and combined with
//! fixed weights into a 0-100 composite score.

pub mod ranges;
pub mod types;

use crate::metrics::MetricsProvider;

pub use ranges::{Metric, MetricRange, READABILITY_SCORE_RANGE};
pub use types::{RawScores, ReadabilityScores};

pub struct ReadabilityScorer<'a> {
    provider: &'a dyn MetricsProvider,
}

impl<'a> ReadabilityScorer<'a> {
    pub fn new(provider: &'a dyn MetricsProvider) -> Self {
        Self { provider }
    }

    /// Score cleaned plain text.
    ///
    /// Text without a single word gets the worst value of every metric and
    /// a composite of 0 without consulting the provider.
    pub fn score(&self, text: &str) -> ReadabilityScores {
        if !has_words(text) {
            log::debug!("No words in text, using worst-case scores");
            return ReadabilityScores::worst();
        }

        let metrics = RawScores::from_fn(|metric| metric.range().cap(self.raw_metric(metric, text)));
        ReadabilityScores::new(metrics, composite_score(&metrics))
    }

    fn raw_metric(&self, metric: Metric, text: &str) -> f64 {
        match metric {
            Metric::FleschReadingEase => self.provider.flesch_reading_ease(text),
            Metric::GunningFog => self.provider.gunning_fog(text),
            Metric::AutomatedReadabilityIndex => self.provider.automated_readability_index(text),
            Metric::DaleChallReadabilityScore => self.provider.dale_chall_readability_score(text),
            Metric::ColemanLiauIndex => {
                let value = self.provider.coleman_liau_index(text);
                if value.is_nan() {
                    log::debug!("Coleman-Liau index undefined, using 0");
                    0.0
                } else {
                    value
                }
            }
        }
    }
}

// A word needs at least one letter or digit; whitespace and punctuation
// alone leave every formula undefined.
fn has_words(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// Score cleaned plain text with `provider`.
pub fn score(text: &str, provider: &dyn MetricsProvider) -> ReadabilityScores {
    ReadabilityScorer::new(provider).score(text)
}

/// Weighted sum of normalized metrics, scaled to 0-100.
pub fn composite_score(metrics: &RawScores) -> f64 {
    let weighted: f64 = Metric::ALL
        .iter()
        .map(|&metric| metric.weight() * metric.range().normalize(metrics.get(metric)))
        .sum();
    weighted * 100.0
}
