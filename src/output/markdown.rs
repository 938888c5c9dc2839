use super::{format_cell, ScoreTable, COLUMNS};

/// Render a score table as a GitHub-flavoured markdown table.
pub fn render(table: &ScoreTable) -> String {
    let mut md = String::new();
    md.push_str(&format!("## {}\n\n", table.title));

    md.push_str("| File |");
    for column in COLUMNS {
        md.push_str(&format!(" {} |", column.header()));
    }
    md.push('\n');

    md.push_str("| --- |");
    for _ in COLUMNS {
        md.push_str(" ---: |");
    }
    md.push('\n');

    for row in &table.rows {
        md.push_str(&format!("| {} |", row.name));
        for column in COLUMNS {
            let delta = row.diff.as_ref().map(|diff| column.value(diff));
            md.push_str(&format!(
                " {} |",
                format_cell(column.value(&row.scores), delta)
            ));
        }
        md.push('\n');
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ScoreRow;
    use crate::scoring::ReadabilityScores;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_with_and_without_deltas() {
        let table = ScoreTable {
            title: "Readability report",
            rows: vec![
                ScoreRow {
                    name: "docs/a.md".into(),
                    scores: ReadabilityScores::uniform(50.0),
                    diff: Some(ReadabilityScores::uniform(-2.5)),
                },
                ScoreRow {
                    name: "Average".into(),
                    scores: ReadabilityScores::uniform(40.0),
                    diff: None,
                },
            ],
        };

        let expected = indoc! {"
            ## Readability report

            | File | Readability | FRE | GF | ARI | CLI | DCRS |
            | --- | ---: | ---: | ---: | ---: | ---: | ---: |
            | docs/a.md | 50.00 (-2.50) | 50.00 (-2.50) | 50.00 (-2.50) | 50.00 (-2.50) | 50.00 (-2.50) | 50.00 (-2.50) |
            | Average | 40.00 | 40.00 | 40.00 | 40.00 | 40.00 | 40.00 |
        "};
        assert_eq!(render(&table), expected);
    }
}
