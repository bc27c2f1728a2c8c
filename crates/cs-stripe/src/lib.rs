//! Per-column stripe region detection.
//!
//! Pipeline for one column:
//! - Map the target mask to `±1` and the background mask to a `{1, 0}` indicator.
//! - Streak encode the target signal, optionally bridging short background gaps.
//! - Keep positions where adjacent streak ratios fall inside the acceptance range.
//! - Group at least three consecutive positions into a candidate region.
//! - Keep candidates whose non-target streaks are mostly background pixels.
//!
//! Columns are independent. [`StripeScanner`] gathers columns from a pair of
//! mask images; choosing columns and combining their results is left to the
//! caller.

mod column;
mod config;
mod scanner;

pub use column::{ColumnStripes, StripeRegion, detect_stripes_in_col};
pub use config::StripeConfig;
pub use scanner::{ColumnScan, StripeScanner};
