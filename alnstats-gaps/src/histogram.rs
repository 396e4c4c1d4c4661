use crate::errors::GapStatsError;
use crate::extract::GapRun;

///
/// Dense histogram of gap-run lengths.
///
/// `counts[len]` is the number of maximal gap runs of length `len`
/// recorded so far. The vector grows with zero fill as longer runs are
/// observed and never shrinks, so indices below the current size are
/// always valid.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GapLengthHistogram {
    counts: Vec<u64>,
}

impl GapLengthHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for runs up to `max_len`.
    ///
    /// This is a sizing hint only, typically the longest sequence length
    /// of the file about to be folded in. [`record`](Self::record) grows
    /// the histogram on demand regardless of what was reserved.
    pub fn reserve(&mut self, max_len: usize) {
        self.counts
            .reserve((max_len + 1).saturating_sub(self.counts.len()));
    }

    /// Count one gap run, growing the histogram if its length is not yet
    /// representable.
    pub fn record(&mut self, run: GapRun) {
        if run.length >= self.counts.len() {
            self.counts.resize(run.length + 1, 0);
        }
        self.counts[run.length] += 1;
    }

    /// The dense count vector, indexed by run length.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Iterate `(length, count)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    /// Total number of gap runs recorded.
    pub fn total_runs(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Element-wise addition of another histogram into this one.
    ///
    /// Histogram addition is associative and commutative, so per-file
    /// partial histograms can be folded in any order.
    pub fn merge(&mut self, other: &GapLengthHistogram) {
        if other.counts.len() > self.counts.len() {
            self.counts.resize(other.counts.len(), 0);
        }
        for (slot, count) in self.counts.iter_mut().zip(other.counts.iter()) {
            *slot += count;
        }
    }

    /// Summarize frameshift-inducing runs over the finalized histogram.
    ///
    /// A run shifts the reading frame when its length is not a multiple
    /// of 3. Length 0 is never produced by extraction and contributes
    /// nothing. Errors with [`GapStatsError::NoGapRuns`] when no runs
    /// were recorded, since the ratio is undefined.
    pub fn frameshift_summary(&self) -> Result<FrameshiftSummary, GapStatsError> {
        let mut total: u64 = 0;
        let mut frameshifts: u64 = 0;

        for (length, count) in self.iter() {
            if count > 0 {
                total += count;
                if length % 3 != 0 {
                    frameshifts += count;
                }
            }
        }

        if total == 0 {
            return Err(GapStatsError::NoGapRuns);
        }

        Ok(FrameshiftSummary { frameshifts, total })
    }
}

///
/// Totals for gap runs whose length would shift a downstream reading
/// frame.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrameshiftSummary {
    /// Runs with a length not divisible by 3.
    pub frameshifts: u64,
    /// All runs in the batch.
    pub total: u64,
}

impl FrameshiftSummary {
    /// Fraction of gap runs that shift the frame. `total` is non-zero by
    /// construction.
    pub fn ratio(&self) -> f64 {
        self.frameshifts as f64 / self.total as f64
    }
}
