use thiserror::Error;

#[derive(Error, Debug)]
pub enum GapStatsError {
    #[error("no gap runs observed, ratio is undefined")]
    NoGapRuns,
}
