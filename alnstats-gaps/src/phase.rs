use crate::errors::GapStatsError;
use crate::extract::GapRun;

///
/// Counts of gap runs bucketed by the reading-frame offset of their
/// start position.
///
/// Invariant: the element sum equals the number of runs recorded.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GapPhases {
    counts: [u64; 3],
}

impl GapPhases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one gap run under the phase at which it starts.
    ///
    /// A run contributes exactly once, regardless of its length.
    pub fn record(&mut self, run: GapRun) {
        self.counts[run.phase()] += 1;
    }

    /// Per-phase counts, in phase order 0, 1, 2.
    pub fn counts(&self) -> [u64; 3] {
        self.counts
    }

    /// Total number of gap runs recorded, summed in integer arithmetic.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Element-wise addition of another phase counter into this one.
    pub fn merge(&mut self, other: &GapPhases) {
        for (slot, count) in self.counts.iter_mut().zip(other.counts.iter()) {
            *slot += count;
        }
    }

    /// Fraction of gap runs starting at each phase, in phase order.
    ///
    /// The total is accumulated as an integer before the division, so
    /// large batches lose no precision. Errors with
    /// [`GapStatsError::NoGapRuns`] when no runs were recorded, since
    /// the fractions are undefined.
    pub fn fractions(&self) -> Result<[f64; 3], GapStatsError> {
        let total = self.total();
        if total == 0 {
            return Err(GapStatsError::NoGapRuns);
        }

        Ok(self.counts.map(|count| count as f64 / total as f64))
    }
}
