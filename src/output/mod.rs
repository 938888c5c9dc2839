//! Rendering of snapshots and reports as JSON, markdown or a terminal table.

pub mod json;
pub mod markdown;
pub mod terminal;

use clap::ValueEnum;

use crate::comparison::{Readability, Report};
use crate::core::errors::Result;
use crate::scoring::{Metric, MetricRange, ReadabilityScores, READABILITY_SCORE_RANGE};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// One score column of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Readability,
    Metric(Metric),
}

pub const COLUMNS: [Column; 6] = [
    Column::Readability,
    Column::Metric(Metric::FleschReadingEase),
    Column::Metric(Metric::GunningFog),
    Column::Metric(Metric::AutomatedReadabilityIndex),
    Column::Metric(Metric::ColemanLiauIndex),
    Column::Metric(Metric::DaleChallReadabilityScore),
];

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Readability => "Readability",
            Column::Metric(metric) => metric.abbreviation(),
        }
    }

    pub fn value(self, scores: &ReadabilityScores) -> f64 {
        match self {
            Column::Readability => scores.readability_score,
            Column::Metric(metric) => scores.metrics.get(metric),
        }
    }

    fn range(self) -> MetricRange {
        match self {
            Column::Readability => READABILITY_SCORE_RANGE,
            Column::Metric(metric) => metric.range(),
        }
    }

    pub fn is_improvement(self, delta: f64) -> bool {
        self.range().is_improvement(delta)
    }
}

/// A row of scores with an optional change against the other snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub name: String,
    pub scores: ReadabilityScores,
    pub diff: Option<ReadabilityScores>,
}

/// Renderer-neutral view of a snapshot or a report. The average row is last.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    pub title: &'static str,
    pub rows: Vec<ScoreRow>,
}

impl From<&Readability> for ScoreTable {
    fn from(snapshot: &Readability) -> Self {
        let rows = snapshot
            .file_results
            .iter()
            .chain(std::iter::once(&snapshot.average_result))
            .map(|result| ScoreRow {
                name: result.name.clone(),
                scores: result.scores,
                diff: None,
            })
            .collect();
        Self {
            title: "Readability",
            rows,
        }
    }
}

impl From<&Report> for ScoreTable {
    fn from(report: &Report) -> Self {
        let rows = report
            .file_results
            .iter()
            .chain(std::iter::once(&report.average_result))
            .map(|result| ScoreRow {
                name: result.name.clone(),
                scores: result.scores,
                diff: result.diff,
            })
            .collect();
        Self {
            title: "Readability report",
            rows,
        }
    }
}

/// `12.34`, or `12.34 (+1.50)` when a delta is known.
pub fn format_cell(value: f64, delta: Option<f64>) -> String {
    match delta {
        Some(delta) => format!("{:.2} ({:+.2})", value, delta),
        None => format!("{:.2}", value),
    }
}

pub fn render_snapshot(snapshot: &Readability, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(snapshot),
        OutputFormat::Markdown => Ok(markdown::render(&ScoreTable::from(snapshot))),
        OutputFormat::Terminal => Ok(terminal::render(&ScoreTable::from(snapshot))),
    }
}

pub fn render_report(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report),
        OutputFormat::Markdown => Ok(markdown::render(&ScoreTable::from(report))),
        OutputFormat::Terminal => Ok(terminal::render(&ScoreTable::from(report))),
    }
}
