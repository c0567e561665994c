//! Mask-weighted compositing.
//!
//! Linear interpolation between a base and an overlay image, weighted per
//! pixel by the red channel of a mask normalized to [0, 1]. Feeding the
//! edge detector's output as both overlay and mask draws edges over the
//! base in proportion to their gradient strength.

use ndarray::{Array3, ArrayView3};

use super::core::{ensure_rgba, ensure_same_dims, render_rows, round_to_u8, RGBA_CHANNELS};
use crate::error::FilterResult;

/// `round(base * (1 - w) + overlay * w)` with `w = mask / 255`.
#[inline]
pub fn blend_channel(base: u8, overlay: u8, mask: u8) -> u8 {
    let w = mask as f64 / 255.0;
    round_to_u8(base as f64 * (1.0 - w) + overlay as f64 * w)
}

/// Blend `overlay` onto `base` using `mask.R` as the weight - u8 version.
///
/// Mask green and blue are ignored. Output alpha is always 255.
///
/// # Arguments
/// * `base` - RGBA image (height, width, 4)
/// * `overlay` - RGBA image with the same dimensions as `base`
/// * `mask` - RGBA image with the same dimensions as `base`
///
/// # Errors
/// `InvalidInput` if any operand lacks 4 channels, `DimensionMismatch` if
/// the overlay or mask differ from the base in width or height.
#[tracing::instrument(level = "debug", skip_all, fields(dim = ?base.dim()))]
pub fn composite_u8(
    base: ArrayView3<u8>,
    overlay: ArrayView3<u8>,
    mask: ArrayView3<u8>,
) -> FilterResult<Array3<u8>> {
    let dims = ensure_rgba(&base, "base")?;
    ensure_same_dims(dims, &overlay, "overlay")?;
    ensure_same_dims(dims, &mask, "mask")?;
    let (height, width) = dims;

    render_rows(height, width, RGBA_CHANNELS, |y, row| {
        for (x, px) in row.chunks_exact_mut(RGBA_CHANNELS).enumerate() {
            let m = mask[[y, x, 0]];
            for c in 0..3 {
                px[c] = blend_channel(base[[y, x, c]], overlay[[y, x, c]], m);
            }
            px[3] = 255;
        }
    })
}
