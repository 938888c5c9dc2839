// Export modules for library usage
pub mod cli;
pub mod comparison;
pub mod config;
pub mod core;
pub mod document;
pub mod io;
pub mod metrics;
pub mod output;
pub mod scoring;
pub mod snapshot;
pub mod transformers;

// Re-export commonly used types
pub use crate::comparison::{
    diff, report, Comparator, FileStatuses, Readability, Rename, Report, ResultWithDiff,
    SingleResult,
};
pub use crate::config::ReadabilityConfig;
pub use crate::core::{Error, Result};
pub use crate::document::{parse, serialize, Node, NodeKind};
pub use crate::metrics::{MetricsProvider, TextStatistics};
pub use crate::output::OutputFormat;
pub use crate::scoring::{score, Metric, RawScores, ReadabilityScorer, ReadabilityScores};
pub use crate::snapshot::{Document, SnapshotScorer};
pub use crate::transformers::{normalize, NormalizeOptions, Pipeline};
