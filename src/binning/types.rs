//! Shared bin types, label vocabulary, and row selection helpers

use polars::prelude::*;
use serde::Serialize;

use super::error::BinError;

/// Display labels for the standard three-bin split preceded by the "All" bin
pub const BIN_LABELS: [&str; 4] = ["All", "Bin 1", "Bin 2", "Bin 3"];

/// Display labels for the three-bin split without the "All" bin
pub const ONLY_BIN_LABELS: [&str; 3] = ["Bin 1", "Bin 2", "Bin 3"];

/// Display labels for the two-bin split
pub const TWO_BIN_LABELS: [&str; 2] = ["Bin 1", "Bin 2"];

/// Alternate labels marking the middle bin of a three-way split as size-matched
pub const EQUAL_BIN_LABELS: [&str; 3] = ["Bin 1", "Bin 2 Equal", "Bin 3"];

/// Number of threshold bins to split the age range into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AgeBinCount {
    /// Two bins: ages up to 10, ages above 10
    Two,
    /// Three bins: ages up to 9, over 9 up to 12, above 12
    #[default]
    Three,
}

impl AgeBinCount {
    /// Number of index sets the threshold binner produces for this split
    pub fn bin_count(&self) -> usize {
        match self {
            AgeBinCount::Two => 2,
            AgeBinCount::Three => 3,
        }
    }
}

impl std::fmt::Display for AgeBinCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeBinCount::Two => write!(f, "2"),
            AgeBinCount::Three => write!(f, "3"),
        }
    }
}

impl std::str::FromStr for AgeBinCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "2" | "two" => Ok(AgeBinCount::Two),
            "3" | "three" => Ok(AgeBinCount::Three),
            _ => Err(format!("Unknown bin count: '{}'. Use '2' or '3'.", s)),
        }
    }
}

/// A named group of samples with its gathered features and targets
#[derive(Debug, Clone)]
pub struct DataBin {
    /// Display label ("All", "Bin 1", ...)
    pub label: String,
    /// Feature rows of the samples in this bin
    pub features: DataFrame,
    /// Target rows of the samples in this bin, row-aligned with `features`
    pub targets: DataFrame,
}

impl DataBin {
    /// Create a new bin from a label and its gathered frames
    pub fn new(label: impl Into<String>, features: DataFrame, targets: DataFrame) -> Self {
        Self {
            label: label.into(),
            features,
            targets,
        }
    }

    /// Number of samples in this bin
    pub fn len(&self) -> usize {
        self.features.height()
    }

    /// Whether the bin holds no samples
    pub fn is_empty(&self) -> bool {
        self.features.height() == 0
    }
}

/// Gather the rows of `df` at `indices`, preserving index order.
pub(crate) fn take_rows(df: &DataFrame, indices: &[IdxSize]) -> PolarsResult<DataFrame> {
    df.take(&IdxCa::from_vec("rows".into(), indices.to_vec()))
}

/// Check that features and targets describe the same number of samples.
pub(crate) fn ensure_aligned(features: &DataFrame, targets: &DataFrame) -> Result<(), BinError> {
    if features.height() != targets.height() {
        return Err(BinError::ShapeMismatch {
            features: features.height(),
            targets: targets.height(),
        });
    }
    Ok(())
}

/// Check that the age vector has one entry per dataset row.
pub(crate) fn ensure_ages_aligned(ages: &[f64], rows: usize) -> Result<(), BinError> {
    if ages.len() != rows {
        return Err(BinError::AgeLengthMismatch {
            ages: ages.len(),
            rows,
        });
    }
    Ok(())
}
