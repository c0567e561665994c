//! Core utilities shared by the filters.
//!
//! This module provides:
//! - Input validation (channel count, operand dimensions)
//! - Row-parallel output rendering
//! - Channel rounding and clamping

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::error::{FilterError, FilterResult};

/// Number of interleaved channels in an RGBA buffer.
pub const RGBA_CHANNELS: usize = 4;

/// Check that `input` is an RGBA image and return its (height, width).
pub fn ensure_rgba(input: &ArrayView3<u8>, operand: &str) -> FilterResult<(usize, usize)> {
    let (height, width, channels) = input.dim();
    if channels != RGBA_CHANNELS {
        return Err(FilterError::invalid_input(format!(
            "{operand} must have {RGBA_CHANNELS} channels, got {channels}"
        )));
    }
    Ok((height, width))
}

/// Check that `other` is RGBA and shares the (height, width) of the base image.
pub fn ensure_same_dims(
    base: (usize, usize),
    other: &ArrayView3<u8>,
    operand: &'static str,
) -> FilterResult<()> {
    let (height, width) = ensure_rgba(other, operand)?;
    if (height, width) != base {
        return Err(FilterError::DimensionMismatch {
            operand,
            width,
            height,
            expected_width: base.1,
            expected_height: base.0,
        });
    }
    Ok(())
}

/// Render an output image one row at a time, rows in parallel.
///
/// `render_row(y, row)` receives the zero-filled row `y` as a flat slice of
/// `width * channels` values. Pixels the closure leaves alone stay zero.
pub fn render_rows<F>(
    height: usize,
    width: usize,
    channels: usize,
    render_row: F,
) -> FilterResult<Array3<u8>>
where
    F: Fn(usize, &mut [u8]) + Sync + Send,
{
    let row_len = width * channels;
    if row_len == 0 || height == 0 {
        return Ok(Array3::<u8>::zeros((height, width, channels)));
    }

    let mut flat = vec![0u8; height * row_len];
    flat.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| render_row(y, row));

    Ok(Array3::from_shape_vec((height, width, channels), flat)?)
}

/// Round half up and clamp to the 8-bit channel range.
///
/// NaN maps to 0.
#[inline]
pub fn round_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
