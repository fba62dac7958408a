//! Threshold binning by age
//!
//! Splits samples into contiguous, non-overlapping age bins using fixed
//! cutoffs, plus the composite [`bin_data`] entry point that optionally
//! prepends an unpartitioned "All" bin.

use polars::prelude::*;

use super::error::BinError;
use super::types::{ensure_ages_aligned, ensure_aligned, take_rows, AgeBinCount, DataBin};

/// Gets the index sets that bin the samples by age.
///
/// This does not return the binned samples themselves, but one set of row
/// indices per age bin. To gather the data, use [`bin_by_age`] or apply the
/// returned sets to the frames directly.
///
/// # Arguments
/// * `ages` - Sample ages, one per dataset row
/// * `bins` - Two-way or three-way split
///
/// # Returns
/// One index set per bin, in ascending age-range order. Every row index
/// appears in exactly one set. Any numeric age is accepted and classified
/// by the same comparisons; no range validation is performed.
pub fn get_age_bins_indices(ages: &[f64], bins: AgeBinCount) -> Vec<Vec<IdxSize>> {
    match bins {
        AgeBinCount::Three => {
            let mut bin_1 = Vec::new();
            let mut bin_2 = Vec::new();
            let mut bin_3 = Vec::new();

            for (row, &age) in ages.iter().enumerate() {
                if age <= 9.0 {
                    bin_1.push(row as IdxSize);
                } else if age <= 12.0 {
                    bin_2.push(row as IdxSize);
                } else {
                    bin_3.push(row as IdxSize);
                }
            }

            vec![bin_1, bin_2, bin_3]
        }
        AgeBinCount::Two => {
            let mut bin_1 = Vec::new();
            let mut bin_2 = Vec::new();

            for (row, &age) in ages.iter().enumerate() {
                if age <= 10.0 {
                    bin_1.push(row as IdxSize);
                } else {
                    bin_2.push(row as IdxSize);
                }
            }

            vec![bin_1, bin_2]
        }
    }
}

/// Bins the data by age.
///
/// # Arguments
/// * `features` - Feature frame, one row per sample
/// * `targets` - Target frame (one or more columns), row-aligned with `features`
/// * `ages` - Sample ages, one per row
/// * `bins` - Two-way or three-way split
///
/// # Returns
/// One `(features, targets)` pair per age bin, in the order produced by
/// [`get_age_bins_indices`]. A bin may be empty when no sample falls in
/// its age range.
pub fn bin_by_age(
    features: &DataFrame,
    targets: &DataFrame,
    ages: &[f64],
    bins: AgeBinCount,
) -> Result<Vec<(DataFrame, DataFrame)>, BinError> {
    ensure_aligned(features, targets)?;
    ensure_ages_aligned(ages, features.height())?;

    let mut age_bins = Vec::with_capacity(bins.bin_count());
    for indices in get_age_bins_indices(ages, bins) {
        age_bins.push((take_rows(features, &indices)?, take_rows(targets, &indices)?));
    }

    Ok(age_bins)
}

/// Bins the data by age, or returns it whole when no usable ages exist.
///
/// Wraps [`bin_by_age`] for callers that run one modeling session per bin.
///
/// # Arguments
/// * `features` - Feature frame, one row per sample
/// * `targets` - Target frame, row-aligned with `features`
/// * `ages` - Sample ages, one per row, if recorded for this dataset
/// * `include_all` - Prepend an "All" bin holding the complete dataset
/// * `bins` - Two-way or three-way split
///
/// # Behavior
/// - With usable ages, produces one [`DataBin`] per age bin labeled
///   "Bin 1", "Bin 2", ... and, when `include_all` is set, an "All" bin
///   with the complete dataset ahead of them.
/// - Ages that are `None`, empty, or all zero are treated as absent: the
///   result is a single "All" bin and `include_all`/`bins` are ignored.
///   Zero is a placeholder for unrecorded ages, so an all-zero vector
///   carries no age information; a warning is printed when this fallback
///   triggers on a non-empty vector.
pub fn bin_data(
    features: &DataFrame,
    targets: &DataFrame,
    ages: Option<&[f64]>,
    include_all: bool,
    bins: AgeBinCount,
) -> Result<Vec<DataBin>, BinError> {
    ensure_aligned(features, targets)?;

    let usable_ages = match ages {
        Some(ages) if ages.iter().any(|&age| age != 0.0) => Some(ages),
        Some(ages) if !ages.is_empty() => {
            eprintln!(
                "Warning: age vector contains only zero placeholders, returning a single 'All' bin"
            );
            None
        }
        _ => None,
    };

    let Some(ages) = usable_ages else {
        return Ok(vec![DataBin::new("All", features.clone(), targets.clone())]);
    };

    let mut data_bins = Vec::with_capacity(bins.bin_count() + 1);

    if include_all {
        data_bins.push(DataBin::new("All", features.clone(), targets.clone()));
    }

    let age_bins = bin_by_age(features, targets, ages, bins)?;
    for (bin_num, (bin_features, bin_targets)) in age_bins.into_iter().enumerate() {
        data_bins.push(DataBin::new(
            format!("Bin {}", bin_num + 1),
            bin_features,
            bin_targets,
        ));
    }

    Ok(data_bins)
}
