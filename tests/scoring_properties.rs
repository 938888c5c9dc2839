//! Property-based tests for scoring and diffing
//!
//! - Every capped metric lies inside its range, so its normalized value is
//!   within 0..=1 and the composite within 0..=100
//! - Empty text, or text without a word, always scores the worst case
//! - Diffing a snapshot with itself yields all-zero diffs

use proptest::prelude::*;
use readability_diff::comparison::{diff, SingleResult};
use readability_diff::metrics::TextStatistics;
use readability_diff::scoring::{score, Metric, ReadabilityScores};

const EPSILON: f64 = 1e-9;

/// Sentences of lowercase words, optionally with punctuation noise.
fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,14}( [a-z]{1,14}){0,25}[.!?]", 1..8)
        .prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #[test]
    fn prop_metrics_stay_in_range(text in prose()) {
        let scores = score(&text, &TextStatistics);
        for metric in Metric::ALL {
            let range = metric.range();
            let value = scores.metrics.get(metric);
            prop_assert!(value >= range.low() - EPSILON && value <= range.high() + EPSILON,
                "{:?} = {} outside {:?}", metric, value, range);
            let normalized = range.normalize(value);
            prop_assert!((-EPSILON..=1.0 + EPSILON).contains(&normalized));
        }
        prop_assert!(scores.readability_score >= -EPSILON);
        prop_assert!(scores.readability_score <= 100.0 + EPSILON);
    }

    #[test]
    fn prop_any_text_is_finite(text in "\\PC{1,200}") {
        let scores = score(&text, &TextStatistics);
        for metric in Metric::ALL {
            prop_assert!(scores.metrics.get(metric).is_finite());
        }
        prop_assert!(scores.readability_score.is_finite());
    }

    #[test]
    fn prop_diff_with_itself_is_zero(texts in prop::collection::vec(prose(), 0..6)) {
        let results: Vec<SingleResult> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| SingleResult::new(format!("doc-{i}.md"), score(text, &TextStatistics)))
            .collect();

        let diffed = diff(&results, &results, &[]);
        prop_assert_eq!(diffed.len(), results.len());
        for result in diffed {
            prop_assert_eq!(result.diff, Some(ReadabilityScores::uniform(0.0)));
        }
    }
}

proptest! {
    #[test]
    fn prop_text_without_words_scores_worst(text in "[ \\n.,;:!?()-]{0,40}") {
        prop_assert_eq!(score(&text, &TextStatistics), ReadabilityScores::worst());
    }
}

#[test]
fn test_empty_text_scores_worst() {
    let scores = score("", &TextStatistics);
    assert_eq!(scores, ReadabilityScores::worst());
    assert_eq!(scores.readability_score, 0.0);
    assert_eq!(scores.metrics.get(Metric::FleschReadingEase), 0.0);
    assert_eq!(scores.metrics.get(Metric::GunningFog), 19.0);
    assert_eq!(scores.metrics.get(Metric::AutomatedReadabilityIndex), 22.0);
    assert_eq!(scores.metrics.get(Metric::DaleChallReadabilityScore), 11.0);
    assert_eq!(scores.metrics.get(Metric::ColemanLiauIndex), 19.0);
}

#[test]
fn test_simple_text_beats_dense_text() {
    let simple = score("The cat sat on the mat. It was warm. We sat too.", &TextStatistics);
    let dense = score(
        "Notwithstanding considerable organizational heterogeneity, institutional \
         administrators systematically underestimated the interdependencies \
         characterizing multidimensional infrastructural modernization initiatives.",
        &TextStatistics,
    );
    assert!(simple.readability_score > dense.readability_score);
}
