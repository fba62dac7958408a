//! Binning module - partitions a labeled dataset into named sample groups

pub mod age;
pub mod error;
pub mod random;
pub mod subsample;
pub mod types;
pub mod window;

pub use age::*;
pub use error::BinError;
pub use random::*;
pub use subsample::*;
pub use types::*;
pub use window::*;
