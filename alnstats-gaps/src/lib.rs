//! Gap-run statistics for multiple sequence alignments.
//!
//! This crate provides tools for analyzing the gap structure of aligned
//! sequences, including:
//!
//! - Extracting the maximal gap runs of each aligned sequence
//! - Folding runs into a dense histogram of gap-run lengths
//! - Summarizing frameshifts (runs whose length is not a multiple of 3)
//! - Measuring the reading-frame phase at which runs begin
//!
//! # Example
//!
//! ```no_run
//! use alnstats_core::models::Alignment;
//! use alnstats_gaps::{GapLengthHistogram, GapRunStatistics};
//!
//! let alignment = Alignment::try_from("input.fa").unwrap();
//!
//! let mut histogram = GapLengthHistogram::new();
//! alignment.fold_gap_lengths(&mut histogram);
//!
//! let summary = histogram.frameshift_summary().unwrap();
//! println!("{}/{} gap runs shift the frame", summary.frameshifts, summary.total);
//! ```

pub mod errors;
pub mod extract;
pub mod histogram;
pub mod phase;
pub mod statistics;

// re-exports
pub use self::errors::GapStatsError;
pub use self::extract::{gap_runs, GapRun, GapRuns, GAP};
pub use self::histogram::{FrameshiftSummary, GapLengthHistogram};
pub use self::phase::GapPhases;
pub use self::statistics::GapRunStatistics;
