//! Random subsampling of a bin

use polars::prelude::*;
use rand::Rng;

use super::error::BinError;
use super::types::{ensure_aligned, take_rows};

/// Default row cap for [`bin_to_approximate_size`]
pub const DEFAULT_MAX_SAMPLES: usize = 75;

/// Subsamples a bin uniformly at random, without replacement.
///
/// # Arguments
/// * `features` - Feature frame of the bin
/// * `targets` - Target frame of the bin, row-aligned with `features`
/// * `num_samples` - Exact number of rows to draw
/// * `rng` - Random source; seed it for reproducible draws
///
/// # Errors
/// [`BinError::InsufficientSamples`] when `num_samples` exceeds the number
/// of rows in the bin. The draw is never clamped.
pub fn subsample_bin<R: Rng + ?Sized>(
    features: &DataFrame,
    targets: &DataFrame,
    num_samples: usize,
    rng: &mut R,
) -> Result<(DataFrame, DataFrame), BinError> {
    ensure_aligned(features, targets)?;

    let rows = features.height();
    if num_samples > rows {
        return Err(BinError::InsufficientSamples {
            requested: num_samples,
            available: rows,
        });
    }

    let indices: Vec<IdxSize> = rand::seq::index::sample(rng, rows, num_samples)
        .into_iter()
        .map(|row| row as IdxSize)
        .collect();

    Ok((take_rows(features, &indices)?, take_rows(targets, &indices)?))
}

/// Caps a bin at `max_samples` rows.
///
/// Returns the input unchanged (same rows, same order) when the bin
/// already has fewer than `max_samples` rows; otherwise draws exactly
/// `max_samples` rows without replacement.
pub fn bin_to_approximate_size<R: Rng + ?Sized>(
    features: &DataFrame,
    targets: &DataFrame,
    max_samples: usize,
    rng: &mut R,
) -> Result<(DataFrame, DataFrame), BinError> {
    ensure_aligned(features, targets)?;

    if features.height() < max_samples {
        return Ok((features.clone(), targets.clone()));
    }

    subsample_bin(features, targets, max_samples, rng)
}
