//! Umbrella crate for the `column-stripes` workspace.
//!
//! Re-exports the mask primitives, the streak encoders and the per-column
//! stripe detector.

pub use cs_core::*;
pub use cs_streak::*;
pub use cs_stripe::*;
