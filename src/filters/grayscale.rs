//! Grayscale conversion filter.
//!
//! Uses the ITU-R BT.601 luma coefficients (`0.299R + 0.587G + 0.114B`),
//! evaluated in `f64` and rounded half up so the output is bit-exact
//! across platforms.

use ndarray::{Array3, ArrayView3};

use super::core::{ensure_rgba, render_rows, round_to_u8, RGBA_CHANNELS};
use crate::error::FilterResult;

/// ITU-R BT.601 luma coefficients
pub const LUMA_R: f64 = 0.299;
pub const LUMA_G: f64 = 0.587;
pub const LUMA_B: f64 = 0.114;

/// Luma of a single RGB triple, rounded and clamped to 0-255.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    round_to_u8(LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64)
}

/// Convert an RGBA u8 image to grayscale.
///
/// Output is RGBA with R=G=B=luma, A preserved.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
///
/// # Returns
/// New array with the luma in the RGB channels, alpha copied verbatim
///
/// # Errors
/// `InvalidInput` if the view does not have 4 channels.
#[tracing::instrument(level = "debug", skip(input), fields(dim = ?input.dim()))]
pub fn grayscale_rgba_u8(input: ArrayView3<u8>) -> FilterResult<Array3<u8>> {
    let (height, width) = ensure_rgba(&input, "image")?;

    render_rows(height, width, RGBA_CHANNELS, |y, row| {
        for (x, px) in row.chunks_exact_mut(RGBA_CHANNELS).enumerate() {
            let gray = luma_u8(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            px[0] = gray;
            px[1] = gray;
            px[2] = gray;
            px[3] = input[[y, x, 3]];
        }
    })
}
