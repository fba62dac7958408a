//! Error types for binning and subsampling operations.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while binning or subsampling a dataset.
#[derive(Debug, Error)]
pub enum BinError {
    /// Features and targets disagree on the number of rows.
    ///
    /// Every operation applies the same row selection to both frames, so
    /// they must describe the same samples before binning starts.
    #[error("features have {features} rows but targets have {targets} rows")]
    ShapeMismatch {
        /// Row count of the feature frame
        features: usize,
        /// Row count of the target frame
        targets: usize,
    },

    /// The age vector is not row-aligned with the dataset.
    #[error("age vector has {ages} entries but the dataset has {rows} rows")]
    AgeLengthMismatch {
        /// Length of the supplied age vector
        ages: usize,
        /// Row count of the dataset
        rows: usize,
    },

    /// A subsample requested more rows than the bin holds.
    ///
    /// Draws are without replacement, so the request cannot be satisfied
    /// and is never clamped to the available count.
    #[error("requested {requested} samples but only {available} are available")]
    InsufficientSamples {
        /// Number of rows requested
        requested: usize,
        /// Number of rows in the bin
        available: usize,
    },

    /// Requested random bin sizes sum to more than the available rows.
    #[error("requested bin sizes sum to {requested} but only {available} samples are available")]
    SizeExceedsAvailable {
        /// Sum of the requested bin sizes
        requested: usize,
        /// Row count of the dataset
        available: usize,
    },

    /// Row gathering failed inside polars.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
