//! Snapshot comparison through the public API

use pretty_assertions::assert_eq;
use readability_diff::comparison::{report, FileStatuses, Readability, Rename, Report, SingleResult};
use readability_diff::metrics::TextStatistics;
use readability_diff::scoring::ReadabilityScores;
use readability_diff::snapshot::{Document, SnapshotScorer};
use readability_diff::transformers::NormalizeOptions;

fn snapshot(results: &[(&str, f64)]) -> Readability {
    Readability::new(
        results
            .iter()
            .map(|&(name, value)| SingleResult::new(name, ReadabilityScores::uniform(value)))
            .collect(),
    )
}

#[test]
fn test_only_modified_document_is_reported() {
    let old = snapshot(&[("1", 1.0), ("2", 1.0), ("3", 1.0)]);
    let new = snapshot(&[("1", 1.0), ("2", 1.0), ("3", 1.0)]);
    let statuses: FileStatuses = serde_json::from_str(r#"{"modified": ["3"], "added": []}"#).unwrap();

    let report = report(&new, &old, &statuses);
    assert_eq!(report.file_results.len(), 1);
    assert_eq!(report.file_results[0].name, "3");
}

#[test]
fn test_rename_with_change_diffs_against_old_name() {
    let old = snapshot(&[("1", 1.0)]);
    let new = snapshot(&[("2", 2.0)]);
    let statuses: FileStatuses = serde_json::from_str(
        r#"{"added": [], "modified": ["2"], "renamed": [{"from": "1", "to": "2"}]}"#,
    )
    .unwrap();
    assert_eq!(statuses.renamed, vec![Rename::new("1", "2")]);

    let report = report(&new, &old, &statuses);
    assert_eq!(
        report.file_results[0].diff,
        Some(ReadabilityScores::uniform(1.0))
    );
}

#[test]
fn test_added_document_reports_null_diff() {
    let old = snapshot(&[("a.md", 10.0)]);
    let new = snapshot(&[("a.md", 10.0), ("b.md", 30.0)]);
    let statuses = FileStatuses {
        added: vec!["b.md".into()],
        ..FileStatuses::default()
    };

    let report = report(&new, &old, &statuses);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["fileResults"][0]["name"], "b.md");
    assert!(json["fileResults"][0]["diff"].is_null());
    assert_eq!(json["averageResult"]["name"], "Average");
    assert_eq!(json["averageResult"]["diff"]["readabilityScore"], 10.0);
}

#[test]
fn test_report_json_round_trip() {
    let old = snapshot(&[("a.md", 10.0)]);
    let new = snapshot(&[("a.md", 12.5)]);
    let statuses = FileStatuses {
        modified: vec!["a.md".into()],
        ..FileStatuses::default()
    };
    let report = report(&new, &old, &statuses);

    let json = serde_json::to_string(&report).unwrap();
    let parsed: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_scored_snapshots_end_to_end() {
    let scorer = SnapshotScorer::new(&NormalizeOptions::default(), &TextStatistics);
    let old = scorer
        .score_documents(&[
            Document::new("guide.md", "Notwithstanding considerable organizational heterogeneity, administrators systematically underestimated interdependencies.\n"),
            Document::new("intro.md", "This is a short intro. It is easy to read.\n"),
        ])
        .unwrap();
    let new = scorer
        .score_documents(&[
            Document::new("guide.md", "The team had many parts. People did not see how they fit.\n"),
            Document::new("intro.md", "This is a short intro. It is easy to read.\n"),
        ])
        .unwrap();
    let statuses = FileStatuses {
        modified: vec!["guide.md".into()],
        ..FileStatuses::default()
    };

    let report = report(&new, &old, &statuses);
    assert_eq!(report.file_results.len(), 1);
    let delta = report.file_results[0].diff.unwrap();
    assert!(delta.readability_score > 0.0);
    assert!(report.average_result.diff.unwrap().readability_score > 0.0);
}
