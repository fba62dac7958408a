//! Shared test utilities and fixture generators

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a small cohort dataset with known characteristics for testing
///
/// The twelve samples include:
/// - ages spanning the full 6-16 cohort range, with one fractional age
/// - a `sample_id` feature equal to the row position
/// - a `score` target equal to `sample_id * 10`, so row alignment can be
///   checked after any selection
pub fn create_cohort_dataset() -> (DataFrame, DataFrame, Vec<f64>) {
    let ages = vec![6.0, 7.0, 8.0, 9.0, 9.5, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];

    let features = df! {
        "sample_id" => (0..ages.len() as i64).collect::<Vec<i64>>(),
        "measure" => [0.4f64, 1.1, 0.9, 2.3, 1.7, 0.2, 3.1, 2.8, 1.5, 0.6, 2.0, 1.2],
    }
    .unwrap();

    let targets = df! {
        "score" => (0..ages.len() as i64).map(|id| id * 10).collect::<Vec<i64>>(),
    }
    .unwrap();

    (features, targets, ages)
}

/// Create a dataset whose targets have two columns (vector labels)
pub fn create_multi_target_dataset() -> (DataFrame, DataFrame, Vec<f64>) {
    let ages = vec![6.0, 9.0, 10.0, 12.0, 13.0, 16.0];

    let features = df! {
        "sample_id" => (0..ages.len() as i64).collect::<Vec<i64>>(),
    }
    .unwrap();

    let targets = df! {
        "score_a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0],
        "score_b" => [10.0f64, 20.0, 30.0, 40.0, 50.0, 60.0],
    }
    .unwrap();

    (features, targets, ages)
}

/// Create a larger dataset with seeded random ages for stress tests
///
/// Ages are uniform in `[6, 16]`; `sample_id` equals the row position so
/// selections can be traced back to the original rows.
pub fn create_random_dataset(rows: usize, seed: u64) -> (DataFrame, DataFrame, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let ages: Vec<f64> = (0..rows).map(|_| 6.0 + rng.gen::<f64>() * 10.0).collect();
    let measures: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>()).collect();
    let labels: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..2)).collect();

    let features = df! {
        "sample_id" => (0..rows as i64).collect::<Vec<i64>>(),
        "measure" => measures,
    }
    .unwrap();

    let targets = df! {
        "label" => labels,
    }
    .unwrap();

    (features, targets, ages)
}

/// Extract the `sample_id` column of a frame as a plain vector
pub fn sample_ids(df: &DataFrame) -> Vec<i64> {
    df.column("sample_id")
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}
