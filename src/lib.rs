//! Agebin: Age-Stratified Binning Library
//!
//! A library for partitioning labeled datasets into named bins
//! using age thresholds, sliding age windows, and randomized
//! equal-size assignment, for per-bin model evaluation.

pub mod binning;
