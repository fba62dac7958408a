//! Randomized equal-size binning
//!
//! Assigns samples to fixed-size bins at random, disregarding age.

use polars::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::BinError;
use super::types::{ensure_aligned, take_rows, DataBin};

/// Default per-bin sample counts for the three-way random split
pub const DEFAULT_BIN_SIZES: [usize; 3] = [114, 147, 112];

/// Bins the data into fixed-size bins, disregarding age.
///
/// Draws one uniform random permutation of all row positions and cuts it
/// into three contiguous slices of the requested sizes, so the bins are
/// disjoint by construction. Rows beyond the requested total stay
/// unbinned. Labels follow the "Bin 1".."Bin 3" form.
///
/// # Arguments
/// * `features` - Feature frame, one row per sample
/// * `targets` - Target frame, row-aligned with `features`
/// * `bin_sizes` - Requested sample count per bin (see [`DEFAULT_BIN_SIZES`])
/// * `rng` - Random source; seed it for reproducible assignments
///
/// # Errors
/// [`BinError::SizeExceedsAvailable`] when the sizes sum to more than the
/// number of rows.
pub fn bin_by_random_equivalent_size<R: Rng + ?Sized>(
    features: &DataFrame,
    targets: &DataFrame,
    bin_sizes: [usize; 3],
    rng: &mut R,
) -> Result<Vec<DataBin>, BinError> {
    ensure_aligned(features, targets)?;

    let rows = features.height();
    let requested: usize = bin_sizes.iter().sum();
    if requested > rows {
        return Err(BinError::SizeExceedsAvailable {
            requested,
            available: rows,
        });
    }

    let mut permutation: Vec<IdxSize> = (0..rows as IdxSize).collect();
    permutation.shuffle(rng);

    let mut data_bins = Vec::with_capacity(bin_sizes.len());
    let mut offset = 0;

    for (bin_num, &size) in bin_sizes.iter().enumerate() {
        let indices = &permutation[offset..offset + size];
        offset += size;

        data_bins.push(DataBin::new(
            format!("Bin {}", bin_num + 1),
            take_rows(features, indices)?,
            take_rows(targets, indices)?,
        ));
    }

    Ok(data_bins)
}
