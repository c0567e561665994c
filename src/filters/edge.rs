//! Sobel edge detection.
//!
//! Computes the gradient magnitude of the red channel (the luma of a
//! grayscale image) with the standard 3x3 Sobel kernels:
//!
//! ```text
//!   Kx = [-1 0 1]      Ky = [-1 -2 -1]
//!        [-2 0 2]           [ 0  0  0]
//!        [-1 0 1]           [ 1  2  1]
//! ```
//!
//! Only interior pixels are processed. The one-pixel border stays
//! zero-filled, alpha included, so it renders transparent. Downstream
//! compositing treats that as a zero-weight mask.

use ndarray::{Array3, ArrayView3};

use super::core::{ensure_rgba, render_rows, round_to_u8, RGBA_CHANNELS};
use crate::error::FilterResult;
use crate::options::EdgeOptions;

const KERNEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const KERNEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Horizontal and vertical Sobel responses at interior pixel (x, y).
#[inline]
fn sobel_at(input: &ArrayView3<u8>, x: usize, y: usize) -> (i32, i32) {
    let mut gx = 0i32;
    let mut gy = 0i32;

    for ky in 0..3 {
        for kx in 0..3 {
            let v = input[[y + ky - 1, x + kx - 1, 0]] as i32;
            gx += v * KERNEL_X[ky][kx];
            gy += v * KERNEL_Y[ky][kx];
        }
    }

    (gx, gy)
}

/// Scale a gradient to an 8-bit edge value: `min(255, round(|g| * strength))`.
///
/// Negative or NaN strength yields 0.
#[inline]
pub fn edge_magnitude(gx: i32, gy: i32, strength: f64) -> u8 {
    let mag = ((gx * gx + gy * gy) as f64).sqrt();
    round_to_u8(mag * strength)
}

/// Apply Sobel edge detection - u8 version.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4), expected to be grayscale
/// * `opts` - magnitude multiplier; `blur` is ignored
///
/// # Returns
/// RGBA image with R=G=B=edge magnitude and A=255 on interior pixels,
/// all-zero on the border
///
/// # Errors
/// `InvalidInput` if the view does not have 4 channels.
#[tracing::instrument(level = "debug", skip(input), fields(dim = ?input.dim()))]
pub fn sobel_magnitude_u8(input: ArrayView3<u8>, opts: &EdgeOptions) -> FilterResult<Array3<u8>> {
    let (height, width) = ensure_rgba(&input, "image")?;

    if opts.blur != 0.0 {
        tracing::debug!(blur = opts.blur, "blur option is not applied by the Sobel pass");
    }

    let strength = opts.strength;
    render_rows(height, width, RGBA_CHANNELS, |y, row| {
        if y == 0 || y + 1 >= height {
            return;
        }
        for x in 1..width.saturating_sub(1) {
            let (gx, gy) = sobel_at(&input, x, y);
            let value = edge_magnitude(gx, gy, strength);

            let px = &mut row[x * RGBA_CHANNELS..(x + 1) * RGBA_CHANNELS];
            px[0] = value;
            px[1] = value;
            px[2] = value;
            px[3] = 255;
        }
    })
}
