//! Statistical utilities for the pitwall analyses.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: count, range, mean and sample standard
//!   deviation of a dataset
//! - **Correlation**: Pearson correlation coefficient between two paired
//!   series
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`correlation`]: Correlation between paired observations
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use pitwall_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Correlating two metrics
//!
//! ```
//! use pitwall_stats::correlation::pearson;
//!
//! let points = [50.0, 30.0, 20.0];
//! let fast_laps = [60.0, 25.0, 15.0];
//! let r = pearson(&points, &fast_laps).unwrap();
//! assert!(r > 0.9);
//! ```

pub mod correlation;
pub mod descriptive;
