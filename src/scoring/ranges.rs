//! Metric ranges and composite weights.
//!
//! Each range is declared as `(min, max)` where `min` is the worst value a
//! document can get and `max` the best. For grade-level metrics a higher
//! raw value is harder to read, so their `min` is numerically larger than
//! their `max`. Normalizing against the declared endpoints makes a higher
//! normalized value mean "more readable" for every metric.

use serde::{Deserialize, Serialize};

/// Valid range of one raw metric, from worst (`min`) to best (`max`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Numerically smaller endpoint.
    pub fn low(&self) -> f64 {
        self.min.min(self.max)
    }

    /// Numerically larger endpoint.
    pub fn high(&self) -> f64 {
        self.min.max(self.max)
    }

    /// Clamp a raw value into the range regardless of its orientation.
    pub fn cap(&self, value: f64) -> f64 {
        value.clamp(self.low(), self.high())
    }

    /// Map a capped value onto 0..=1, where 1 is the best end of the range.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Whether a positive change of the raw value means easier reading.
    pub fn higher_is_better(&self) -> bool {
        self.max > self.min
    }

    /// Whether `delta` moves a value toward the best end of the range.
    pub fn is_improvement(&self, delta: f64) -> bool {
        if self.higher_is_better() {
            delta > 0.0
        } else {
            delta < 0.0
        }
    }
}

pub const FLESCH_READING_EASE_RANGE: MetricRange = MetricRange::new(0.0, 100.0);
pub const GUNNING_FOG_RANGE: MetricRange = MetricRange::new(19.0, 6.0);
pub const AUTOMATED_READABILITY_INDEX_RANGE: MetricRange = MetricRange::new(22.0, 6.0);
pub const DALE_CHALL_READABILITY_SCORE_RANGE: MetricRange = MetricRange::new(11.0, 4.9);
pub const COLEMAN_LIAU_INDEX_RANGE: MetricRange = MetricRange::new(19.0, 6.0);

/// Range of the weighted composite.
pub const READABILITY_SCORE_RANGE: MetricRange = MetricRange::new(0.0, 100.0);

pub const FLESCH_READING_EASE_WEIGHT: f64 = 0.1653977378;
pub const GUNNING_FOG_WEIGHT: f64 = 0.2228367277;
pub const AUTOMATED_READABILITY_INDEX_WEIGHT: f64 = 0.2325290236;
pub const DALE_CHALL_READABILITY_SCORE_WEIGHT: f64 = 0.1960641698;
pub const COLEMAN_LIAU_INDEX_WEIGHT: f64 = 0.1831723411;

/// The five raw readability metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    FleschReadingEase,
    GunningFog,
    AutomatedReadabilityIndex,
    DaleChallReadabilityScore,
    ColemanLiauIndex,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::FleschReadingEase,
        Metric::GunningFog,
        Metric::AutomatedReadabilityIndex,
        Metric::DaleChallReadabilityScore,
        Metric::ColemanLiauIndex,
    ];

    pub const fn range(self) -> MetricRange {
        match self {
            Metric::FleschReadingEase => FLESCH_READING_EASE_RANGE,
            Metric::GunningFog => GUNNING_FOG_RANGE,
            Metric::AutomatedReadabilityIndex => AUTOMATED_READABILITY_INDEX_RANGE,
            Metric::DaleChallReadabilityScore => DALE_CHALL_READABILITY_SCORE_RANGE,
            Metric::ColemanLiauIndex => COLEMAN_LIAU_INDEX_RANGE,
        }
    }

    pub const fn weight(self) -> f64 {
        match self {
            Metric::FleschReadingEase => FLESCH_READING_EASE_WEIGHT,
            Metric::GunningFog => GUNNING_FOG_WEIGHT,
            Metric::AutomatedReadabilityIndex => AUTOMATED_READABILITY_INDEX_WEIGHT,
            Metric::DaleChallReadabilityScore => DALE_CHALL_READABILITY_SCORE_WEIGHT,
            Metric::ColemanLiauIndex => COLEMAN_LIAU_INDEX_WEIGHT,
        }
    }

    /// Short column label used by the renderers.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Metric::FleschReadingEase => "FRE",
            Metric::GunningFog => "GF",
            Metric::AutomatedReadabilityIndex => "ARI",
            Metric::DaleChallReadabilityScore => "DCRS",
            Metric::ColemanLiauIndex => "CLI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = Metric::ALL.iter().map(|m| m.weight()).sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
    }

    #[test]
    fn test_cap_handles_inverted_ranges() {
        assert_eq!(GUNNING_FOG_RANGE.cap(30.0), 19.0);
        assert_eq!(GUNNING_FOG_RANGE.cap(2.0), 6.0);
        assert_eq!(GUNNING_FOG_RANGE.cap(10.0), 10.0);
        assert_eq!(FLESCH_READING_EASE_RANGE.cap(-20.0), 0.0);
        assert_eq!(FLESCH_READING_EASE_RANGE.cap(120.0), 100.0);
    }

    #[test]
    fn test_normalize_orients_toward_readability() {
        // Worst endpoint maps to 0 and best to 1 in both orientations.
        for metric in Metric::ALL {
            let range = metric.range();
            assert_eq!(range.normalize(range.min), 0.0);
            assert_eq!(range.normalize(range.max), 1.0);
        }
        assert!(GUNNING_FOG_RANGE.normalize(8.0) > GUNNING_FOG_RANGE.normalize(12.0));
    }

    #[test]
    fn test_improvement_direction() {
        assert!(FLESCH_READING_EASE_RANGE.is_improvement(3.0));
        assert!(!FLESCH_READING_EASE_RANGE.is_improvement(-3.0));
        assert!(GUNNING_FOG_RANGE.is_improvement(-1.0));
        assert!(!GUNNING_FOG_RANGE.is_improvement(1.0));
        assert!(!GUNNING_FOG_RANGE.is_improvement(0.0));
    }
}
