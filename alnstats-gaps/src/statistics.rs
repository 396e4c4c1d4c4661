//! Gap-run statistics over whole alignments.
//!
//! This file folds the per-sequence gap runs of an [`Alignment`] into the
//! batch counters, so the histogram and phase reports share one scan.

use alnstats_core::models::Alignment;

use crate::extract::gap_runs;
use crate::histogram::GapLengthHistogram;
use crate::phase::GapPhases;

/// Trait for folding gap-run statistics out of aligned sequences.
pub trait GapRunStatistics {
    /// Record the length of every maximal gap run into `histogram`.
    ///
    /// The longest sequence length is passed down as a sizing hint
    /// before the fold; it does not bound what gets recorded.
    fn fold_gap_lengths(&self, histogram: &mut GapLengthHistogram);

    /// Record the starting phase of every maximal gap run into `phases`.
    fn fold_gap_phases(&self, phases: &mut GapPhases);
}

impl GapRunStatistics for Alignment {
    fn fold_gap_lengths(&self, histogram: &mut GapLengthHistogram) {
        histogram.reserve(self.max_seq_len());

        for seq in self.iter_seqs() {
            for run in gap_runs(seq) {
                histogram.record(run);
            }
        }
    }

    fn fold_gap_phases(&self, phases: &mut GapPhases) {
        for seq in self.iter_seqs() {
            for run in gap_runs(seq) {
                phases.record(run);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;

    fn get_test_path(file_name: &str) -> Result<PathBuf, std::io::Error> {
        let file_path: PathBuf = std::env::current_dir()
            .unwrap()
            .join("../tests/data/gaps")
            .join(file_name);
        Ok(file_path)
    }

    #[rstest]
    fn test_fold_gap_lengths_in_memory() {
        let alignment = Alignment::try_from(&b">s1\nAA---AA\n>s2\nA-AA--AA\n"[..]).unwrap();

        let mut histogram = GapLengthHistogram::new();
        alignment.fold_gap_lengths(&mut histogram);

        assert_eq!(histogram.counts(), &[0, 1, 1, 1]);
        assert_eq!(histogram.total_runs(), 3);

        let summary = histogram.frameshift_summary().unwrap();
        assert_eq!((summary.frameshifts, summary.total), (2, 3));
    }

    #[rstest]
    fn test_fold_gap_phases_in_memory() {
        let alignment = Alignment::try_from(&b">s1\nAA---AA\n>s2\nA-AA--AA\n"[..]).unwrap();

        let mut phases = GapPhases::new();
        alignment.fold_gap_phases(&mut phases);

        // starts 2, 1, 4
        assert_eq!(phases.counts(), [0, 2, 1]);
        assert_eq!(phases.total(), 3);
    }

    #[rstest]
    fn test_fixture_histogram() {
        let path = get_test_path("example1.fa").unwrap();
        let alignment = Alignment::try_from(path.as_path()).unwrap();

        let mut histogram = GapLengthHistogram::new();
        alignment.fold_gap_lengths(&mut histogram);

        assert_eq!(histogram.counts(), &[0, 1, 1, 1]);
    }

    // example2.fa ends one sequence with a gap run in the last column;
    // the run must be counted at full length.
    #[rstest]
    fn test_fixture_run_in_last_column() {
        let path = get_test_path("example2.fa").unwrap();
        let alignment = Alignment::try_from(path.as_path()).unwrap();

        let mut histogram = GapLengthHistogram::new();
        alignment.fold_gap_lengths(&mut histogram);

        assert_eq!(histogram.counts(), &[0, 1, 0, 2]);
        assert_eq!(histogram.total_runs(), 3);
    }

    #[rstest]
    fn test_fixture_phases() {
        let path = get_test_path("example2.fa").unwrap();
        let alignment = Alignment::try_from(path.as_path()).unwrap();

        let mut phases = GapPhases::new();
        alignment.fold_gap_phases(&mut phases);

        // starts 0, 7, 5
        assert_eq!(phases.counts(), [1, 1, 1]);
    }

    // Folding two files into one histogram must equal merging their
    // per-file histograms.
    #[rstest]
    fn test_multi_file_additivity() {
        let first = Alignment::try_from(get_test_path("example1.fa").unwrap()).unwrap();
        let second = Alignment::try_from(get_test_path("example2.fa").unwrap()).unwrap();

        let mut batched = GapLengthHistogram::new();
        first.fold_gap_lengths(&mut batched);
        second.fold_gap_lengths(&mut batched);

        let mut partial_first = GapLengthHistogram::new();
        first.fold_gap_lengths(&mut partial_first);
        let mut partial_second = GapLengthHistogram::new();
        second.fold_gap_lengths(&mut partial_second);

        let mut merged = partial_first;
        merged.merge(&partial_second);

        assert_eq!(merged, batched);
        assert_eq!(batched.counts(), &[0, 2, 1, 3]);
    }

    #[rstest]
    fn test_gapless_fixture_has_undefined_ratios() {
        let path = get_test_path("nogaps.fa").unwrap();
        let alignment = Alignment::try_from(path.as_path()).unwrap();

        let mut histogram = GapLengthHistogram::new();
        alignment.fold_gap_lengths(&mut histogram);
        let mut phases = GapPhases::new();
        alignment.fold_gap_phases(&mut phases);

        assert_eq!(histogram.total_runs(), 0);
        assert!(histogram.frameshift_summary().is_err());
        assert!(phases.fractions().is_err());
    }

    // The histogram and phase paths consume the same runs, so their
    // totals always agree.
    #[rstest]
    #[case("example1.fa")]
    #[case("example2.fa")]
    fn test_histogram_and_phase_totals_agree(#[case] file_name: &str) {
        let alignment = Alignment::try_from(get_test_path(file_name).unwrap()).unwrap();

        let mut histogram = GapLengthHistogram::new();
        alignment.fold_gap_lengths(&mut histogram);
        let mut phases = GapPhases::new();
        alignment.fold_gap_phases(&mut phases);

        assert_eq!(histogram.total_runs(), phases.total());
    }
}
