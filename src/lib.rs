//! # simlab — Monte Carlo simulation and resampling exercises
//!
//! A collection of small, self-contained probability exercises. Each binary
//! under `src/bin/` is one exercise: define parameters, draw samples from a
//! named distribution, compute a summary statistic, print the result.
//!
//! The one pattern every exercise shares — draw N samples, compute a
//! statistic, repeat M times, read off a mean / percentile / p-value — lives
//! in [`estimate`] and [`resample`] instead of being re-typed per exercise:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`stats`] | Mean, variance, percentiles, count fractions, [`stats::Summary`] |
//! | [`estimate`] | Parallel seeded trial batches, proportion estimates, grow-until loops |
//! | [`resample`] | Bootstrap, jackknife, permutation test |
//! | [`datasets`] | Literal toy data: card deck, wrench measurements, A/B donations |
//! | [`report`] | Serializable trial statistics, JSON artifacts |
//!
//! ## Reproducibility
//!
//! Every simulation takes an explicit `u64` seed. Parallel batches derive
//! per-trial seeds as `seed.wrapping_add(trial_index)`, so a batch produces
//! identical output regardless of thread count or scheduling.

pub mod datasets;
pub mod env_config;
pub mod estimate;
pub mod report;
pub mod resample;
pub mod stats;
