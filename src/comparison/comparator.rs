use std::collections::{HashMap, HashSet};

use crate::comparison::types::*;

/// Pairs two snapshots and reports the change-set's effect on them.
pub struct Comparator<'a> {
    old: &'a Readability,
    new: &'a Readability,
    statuses: &'a FileStatuses,
}

impl<'a> Comparator<'a> {
    pub fn new(old: &'a Readability, new: &'a Readability, statuses: &'a FileStatuses) -> Self {
        Self { old, new, statuses }
    }

    /// Diff every new file result, keep only added and modified documents,
    /// and diff the two averages.
    pub fn compare(&self) -> Report {
        let in_scope: HashSet<&str> = self
            .statuses
            .added
            .iter()
            .chain(self.statuses.modified.iter())
            .map(String::as_str)
            .collect();

        let file_results: Vec<ResultWithDiff> = diff(
            &self.new.file_results,
            &self.old.file_results,
            &self.statuses.renamed,
        )
        .into_iter()
        .filter(|result| in_scope.contains(result.name.as_str()))
        .collect();

        log::info!(
            "Compared {} of {} documents touched by the change-set",
            file_results.len(),
            self.new.file_results.len()
        );

        let average_result = diff_one(
            &self.new.average_result,
            std::slice::from_ref(&self.old.average_result),
            &[],
        );

        Report {
            file_results,
            average_result,
        }
    }
}

/// Build a report from two snapshots and a change-set classification.
pub fn report(new: &Readability, old: &Readability, statuses: &FileStatuses) -> Report {
    Comparator::new(old, new, statuses).compare()
}

/// Pair each new result with its old counterpart and subtract old from new.
///
/// A new result is matched through the rename whose `to` is its name, if
/// any, and by its own name otherwise. Unmatched results get no diff.
pub fn diff(
    new_results: &[SingleResult],
    old_results: &[SingleResult],
    renames: &[Rename],
) -> Vec<ResultWithDiff> {
    let old_by_name = index_by_name(old_results);
    let renamed_from = index_renames(renames);

    new_results
        .iter()
        .map(|result| pair(result, &old_by_name, &renamed_from))
        .collect()
}

fn diff_one(new: &SingleResult, old_results: &[SingleResult], renames: &[Rename]) -> ResultWithDiff {
    pair(new, &index_by_name(old_results), &index_renames(renames))
}

fn pair(
    result: &SingleResult,
    old_by_name: &HashMap<&str, &SingleResult>,
    renamed_from: &HashMap<&str, &str>,
) -> ResultWithDiff {
    let key = renamed_from
        .get(result.name.as_str())
        .copied()
        .unwrap_or(result.name.as_str());

    ResultWithDiff {
        name: result.name.clone(),
        scores: result.scores,
        diff: old_by_name.get(key).map(|old| result.scores - old.scores),
    }
}

// First occurrence wins on duplicate names.
fn index_by_name(results: &[SingleResult]) -> HashMap<&str, &SingleResult> {
    let mut index = HashMap::with_capacity(results.len());
    for result in results {
        index.entry(result.name.as_str()).or_insert(result);
    }
    index
}

fn index_renames(renames: &[Rename]) -> HashMap<&str, &str> {
    let mut index = HashMap::with_capacity(renames.len());
    for rename in renames {
        index.entry(rename.to.as_str()).or_insert(rename.from.as_str());
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ReadabilityScores;
    use pretty_assertions::assert_eq;

    fn result(name: &str, value: f64) -> SingleResult {
        SingleResult::new(name, ReadabilityScores::uniform(value))
    }

    fn names(results: &[ResultWithDiff]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_diff_with_itself_is_zero() {
        let results = vec![result("a.md", 42.5), result("b.md", 7.0)];
        for diffed in diff(&results, &results, &[]) {
            assert_eq!(diffed.diff, Some(ReadabilityScores::uniform(0.0)));
        }
    }

    #[test]
    fn test_diff_is_new_minus_old() {
        let diffed = diff(&[result("a.md", 10.0)], &[result("a.md", 4.0)], &[]);
        assert_eq!(diffed[0].diff, Some(ReadabilityScores::uniform(6.0)));
        assert_eq!(diffed[0].scores, ReadabilityScores::uniform(10.0));
    }

    #[test]
    fn test_added_document_has_no_diff() {
        let diffed = diff(&[result("new.md", 10.0)], &[result("old.md", 4.0)], &[]);
        assert_eq!(diffed[0].diff, None);
    }

    #[test]
    fn test_rename_takes_priority_over_name_match() {
        let new = vec![result("2", 2.0)];
        let old = vec![result("1", 1.0), result("2", 50.0)];
        let diffed = diff(&new, &old, &[Rename::new("1", "2")]);
        assert_eq!(diffed[0].diff, Some(ReadabilityScores::uniform(1.0)));
    }

    #[test]
    fn test_report_keeps_only_touched_documents() {
        let old = Readability::new(vec![result("1", 1.0), result("2", 1.0), result("3", 1.0)]);
        let new = Readability::new(vec![result("1", 1.0), result("2", 1.0), result("3", 3.0)]);
        let statuses = FileStatuses {
            modified: vec!["3".into()],
            ..FileStatuses::default()
        };

        let report = report(&new, &old, &statuses);
        assert_eq!(names(&report.file_results), vec!["3"]);
        assert_eq!(
            report.file_results[0].diff,
            Some(ReadabilityScores::uniform(2.0))
        );
    }

    #[test]
    fn test_report_renamed_with_changes() {
        let old = Readability::new(vec![result("1", 1.0)]);
        let new = Readability::new(vec![result("2", 2.0)]);
        let statuses = FileStatuses {
            modified: vec!["2".into()],
            renamed: vec![Rename::new("1", "2")],
            ..FileStatuses::default()
        };

        let report = report(&new, &old, &statuses);
        assert_eq!(names(&report.file_results), vec!["2"]);
        assert_eq!(
            report.file_results[0].diff,
            Some(ReadabilityScores::uniform(1.0))
        );
    }

    #[test]
    fn test_report_excludes_pure_renames() {
        let old = Readability::new(vec![result("1", 1.0)]);
        let new = Readability::new(vec![result("2", 1.0)]);
        let statuses = FileStatuses {
            renamed: vec![Rename::new("1", "2")],
            ..FileStatuses::default()
        };
        assert!(report(&new, &old, &statuses).file_results.is_empty());
    }

    #[test]
    fn test_report_preserves_new_snapshot_order() {
        let old = Readability::new(vec![]);
        let new = Readability::new(vec![result("c", 1.0), result("a", 1.0), result("b", 1.0)]);
        let statuses = FileStatuses {
            added: vec!["a".into(), "b".into()],
            modified: vec!["c".into()],
            ..FileStatuses::default()
        };
        let report = report(&new, &old, &statuses);
        assert_eq!(names(&report.file_results), vec!["c", "a", "b"]);
        assert!(report.file_results.iter().all(|r| r.diff.is_none()));
    }

    #[test]
    fn test_report_diffs_averages() {
        let old = Readability::new(vec![result("a", 10.0), result("b", 20.0)]);
        let new = Readability::new(vec![result("a", 30.0), result("b", 20.0)]);
        let report = report(&new, &old, &FileStatuses::default());

        assert_eq!(report.average_result.name, AVERAGE_RESULT_NAME);
        assert_eq!(report.average_result.scores, ReadabilityScores::uniform(25.0));
        assert_eq!(
            report.average_result.diff,
            Some(ReadabilityScores::uniform(10.0))
        );
    }
}
