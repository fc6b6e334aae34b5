//! Resampling methods.
//!
//! - [`bootstrap`]: resample with replacement to estimate a statistic's sampling distribution
//! - [`jackknife`]: leave-one-out replicates for bias and standard error
//! - [`permutation`]: label-shuffling significance test for two groups

pub mod bootstrap;
pub mod jackknife;
pub mod permutation;

pub use bootstrap::{bootstrap, BootstrapResult};
pub use jackknife::{jackknife, JackknifeResult};
pub use permutation::{permutation_test, PermutationResult};
