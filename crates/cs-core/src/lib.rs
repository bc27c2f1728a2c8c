//! Foundational primitives for column stripe detection.
//!
//! ## Images
//! Images are tightly packed row-major buffers. Views borrow them without
//! copying.
//!
//! ## Masks
//! Class masks are `u8` images where [`MASK_SET`] marks a pixel classified as
//! the mask's class. Detection works on one column at a time, so views expose
//! [`ImageView::gather_col`] to copy a column into a contiguous buffer.

mod error;
mod image;
mod mask;

pub use error::Error;
pub use image::{Image, ImageView};
pub use mask::{MASK_CLEAR, MASK_SET, unit_indicator, unit_signs};
