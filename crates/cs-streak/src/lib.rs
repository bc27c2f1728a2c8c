//! 1D streak primitives for stripe detection.
//!
//! A column of classified pixels is a unit sequence: `+1` for the target
//! (well-detected) class and `-1` for background. Streak encoding turns it
//! into alternating signed run lengths; `|streak|` is the run's pixel count
//! and the sign is its class.
//!
//! Background classification is the noisier of the two, so
//! [`streak_lengths_bridged`] folds short background gaps back into the
//! surrounding target run. Near-periodic stripes then show up as a run of
//! consecutive streak ratios close to one, which [`continuous_runs`] finds.

pub mod continuity;
pub mod ratio;
pub mod streak;

pub use continuity::{ContinuousRuns, MIN_RUN_LEN, continuous_runs};
pub use ratio::{accepted_indices, streak_offsets, streak_ratios};
pub use streak::{streak_lengths, streak_lengths_bridged};
