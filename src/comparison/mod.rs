//! Snapshot comparison.
//!
//! Pairs the results of a new snapshot with those of an old one (by name,
//! or through a rename) and reports the per-document and average deltas
//! for the documents a change-set touched.

pub mod comparator;
pub mod types;

pub use comparator::{diff, report, Comparator};
pub use types::{
    FileStatuses, Readability, Rename, Report, ResultWithDiff, SingleResult, AVERAGE_RESULT_NAME,
};
