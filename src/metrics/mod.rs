//! Raw readability metrics.
//!
//! The scorer only depends on [`MetricsProvider`]. [`TextStatistics`] is the
//! provider used by the CLI; tests substitute fixed values.

pub mod easy_words;
pub mod text_stats;

pub use text_stats::{count_syllables, TextCounts, TextStatistics};

/// Source of the five raw readability metrics for a piece of plain text.
///
/// Behaviour on input without words is up to the implementation; the
/// scorer never calls a provider with text lacking a letter or digit.
pub trait MetricsProvider: Sync {
    fn flesch_reading_ease(&self, text: &str) -> f64;
    fn gunning_fog(&self, text: &str) -> f64;
    fn automated_readability_index(&self, text: &str) -> f64;
    fn dale_chall_readability_score(&self, text: &str) -> f64;
    /// May be NaN when the formula is undefined for `text`.
    fn coleman_liau_index(&self, text: &str) -> f64;
}
