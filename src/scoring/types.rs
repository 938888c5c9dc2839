use serde::{Deserialize, Serialize};
use std::ops::Sub;

use super::ranges::Metric;

/// The five raw metrics, each capped into its range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScores {
    pub flesch_reading_ease: f64,
    pub gunning_fog: f64,
    pub automated_readability_index: f64,
    pub dale_chall_readability_score: f64,
    pub coleman_liau_index: f64,
}

impl RawScores {
    /// Build a record by evaluating `f` once per metric.
    pub fn from_fn(mut f: impl FnMut(Metric) -> f64) -> Self {
        Self {
            flesch_reading_ease: f(Metric::FleschReadingEase),
            gunning_fog: f(Metric::GunningFog),
            automated_readability_index: f(Metric::AutomatedReadabilityIndex),
            dale_chall_readability_score: f(Metric::DaleChallReadabilityScore),
            coleman_liau_index: f(Metric::ColemanLiauIndex),
        }
    }

    /// Every metric at the worst end of its range.
    pub fn worst() -> Self {
        Self::from_fn(|metric| metric.range().min)
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::FleschReadingEase => self.flesch_reading_ease,
            Metric::GunningFog => self.gunning_fog,
            Metric::AutomatedReadabilityIndex => self.automated_readability_index,
            Metric::DaleChallReadabilityScore => self.dale_chall_readability_score,
            Metric::ColemanLiauIndex => self.coleman_liau_index,
        }
    }
}

/// Raw metrics plus the weighted composite score (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityScores {
    #[serde(flatten)]
    pub metrics: RawScores,
    pub readability_score: f64,
}

impl ReadabilityScores {
    pub fn new(metrics: RawScores, readability_score: f64) -> Self {
        Self {
            metrics,
            readability_score,
        }
    }

    /// Scores of a document with nothing to read.
    pub fn worst() -> Self {
        Self::new(RawScores::worst(), 0.0)
    }

    /// Every field set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self::new(RawScores::from_fn(|_| value), value)
    }

    /// Field-wise arithmetic mean, `None` for an empty slice.
    pub fn mean(scores: &[ReadabilityScores]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let count = scores.len() as f64;
        let metrics = RawScores::from_fn(|metric| {
            scores.iter().map(|s| s.metrics.get(metric)).sum::<f64>() / count
        });
        let readability_score = scores.iter().map(|s| s.readability_score).sum::<f64>() / count;
        Some(Self::new(metrics, readability_score))
    }
}

impl Sub for ReadabilityScores {
    type Output = ReadabilityScores;

    /// Field-wise difference, `self` minus `other`.
    fn sub(self, other: ReadabilityScores) -> ReadabilityScores {
        ReadabilityScores::new(
            RawScores::from_fn(|metric| self.metrics.get(metric) - other.metrics.get(metric)),
            self.readability_score - other.readability_score,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtraction_is_fieldwise() {
        let diff = ReadabilityScores::uniform(5.0) - ReadabilityScores::uniform(2.0);
        assert_eq!(diff, ReadabilityScores::uniform(3.0));
    }

    #[test]
    fn test_mean_of_scores() {
        let mean = ReadabilityScores::mean(&[
            ReadabilityScores::uniform(1.0),
            ReadabilityScores::uniform(3.0),
        ]);
        assert_eq!(mean, Some(ReadabilityScores::uniform(2.0)));
        assert_eq!(ReadabilityScores::mean(&[]), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(ReadabilityScores::uniform(1.0)).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "automatedReadabilityIndex",
                "colemanLiauIndex",
                "daleChallReadabilityScore",
                "fleschReadingEase",
                "gunningFog",
                "readabilityScore",
            ]
        );
    }
}
