//! Sliding-window binning by age
//!
//! Generates overlapping age windows of fixed width, stepping by one year
//! across the observed age range. A sample can appear in several windows.

use polars::prelude::*;
use serde::Serialize;

use super::error::BinError;
use super::types::{ensure_ages_aligned, ensure_aligned, take_rows};

/// Default window width in years
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Start age of the single widened window, adolescence onset in the
/// source cohort. Windows starting here span one extra year.
const WIDENED_WINDOW_START: i64 = 12;

/// An inclusive age range covered by one sliding window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeWindow {
    /// Youngest age included in the window
    pub min_age: i64,
    /// Oldest age included in the window
    pub max_age: i64,
}

impl AgeWindow {
    /// Whether `age` falls inside the window, bounds inclusive.
    pub fn contains(&self, age: f64) -> bool {
        self.min_age as f64 <= age && age <= self.max_age as f64
    }
}

/// One sliding window with its gathered samples
#[derive(Debug, Clone)]
pub struct WindowBin {
    /// Inclusive age bounds of the window
    pub window: AgeWindow,
    /// Feature rows whose age falls inside the window
    pub features: DataFrame,
    /// Target rows, row-aligned with `features`
    pub targets: DataFrame,
}

/// Bins the data by a sliding age window.
///
/// Windows are `window_size` years wide (inclusive integer bounds), step by
/// one year from the rounded minimum observed age, and may overlap. The
/// window starting at age 12 spans one extra year.
///
/// # Arguments
/// * `features` - Feature frame, one row per sample
/// * `targets` - Target frame, row-aligned with `features`
/// * `ages` - Sample ages, one per row; non-integer ages are matched
///   against the integer bounds
/// * `window_size` - Window width in years (see [`DEFAULT_WINDOW_SIZE`])
///
/// # Returns
/// One [`WindowBin`] per window, in ascending start-age order. The result
/// is empty when the observed age range is narrower than the window, or
/// when the dataset has no rows; this is a valid outcome, not an error.
pub fn bin_by_sliding_window(
    features: &DataFrame,
    targets: &DataFrame,
    ages: &[f64],
    window_size: usize,
) -> Result<Vec<WindowBin>, BinError> {
    ensure_aligned(features, targets)?;
    ensure_ages_aligned(ages, features.height())?;

    if ages.is_empty() {
        return Ok(Vec::new());
    }

    // Ties round to even, matching how the source ages were recorded
    let min_age = ages
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min)
        .round_ties_even() as i64;
    let max_age = ages
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
        .round_ties_even() as i64;

    let mut window_bins = Vec::new();

    for start in min_age..max_age - window_size as i64 {
        let window = if start == WIDENED_WINDOW_START {
            AgeWindow {
                min_age: start,
                max_age: start + window_size as i64,
            }
        } else {
            AgeWindow {
                min_age: start,
                max_age: start + window_size as i64 - 1,
            }
        };

        let indices: Vec<IdxSize> = ages
            .iter()
            .enumerate()
            .filter_map(|(row, &age)| window.contains(age).then_some(row as IdxSize))
            .collect();

        window_bins.push(WindowBin {
            window,
            features: take_rows(features, &indices)?,
            targets: take_rows(targets, &indices)?,
        });
    }

    Ok(window_bins)
}
