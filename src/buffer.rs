//! Owned image buffers exchanged with callers.
//!
//! [`RgbaBuffer`] mirrors the browser `ImageData` shape (width, height,
//! interleaved RGBA bytes) on top of an `(height, width, 4)` ndarray.
//! [`BinaryMatrix`] is the single-channel 0/255 result of binarization.

use ndarray::{Array, Array2, Array3, ArrayView3, Dimension};

use crate::error::{FilterError, FilterResult};
use crate::filters::core::{ensure_rgba, RGBA_CHANNELS};

/// Row-major RGBA image, 8 bits per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    pixels: Array3<u8>,
}

impl RgbaBuffer {
    /// Wrap flat RGBA bytes. `data.len()` must equal `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> FilterResult<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGBA_CHANNELS))
            .ok_or_else(|| {
                FilterError::invalid_input(format!("image size {width}x{height} overflows"))
            })?;

        if data.len() != expected {
            return Err(FilterError::invalid_input(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                data.len()
            )));
        }

        let pixels = Array3::from_shape_vec((height, width, RGBA_CHANNELS), data)?;
        Ok(Self { pixels })
    }

    /// Wrap an existing `(height, width, 4)` array.
    pub fn from_array(pixels: Array3<u8>) -> FilterResult<Self> {
        ensure_rgba(&pixels.view(), "image")?;
        Ok(Self { pixels })
    }

    /// Fully transparent black image.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            pixels: Array3::zeros((height, width, RGBA_CHANNELS)),
        }
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.pixels
    }

    pub fn into_array(self) -> Array3<u8> {
        self.pixels
    }

    /// RGBA value at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        [
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
            self.pixels[[y, x, 3]],
        ]
    }

    /// Flat row-major RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        into_flat(self.pixels)
    }
}

/// Single-channel mask where every element is 0 or 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    values: Array2<u8>,
}

impl BinaryMatrix {
    pub(crate) fn new(values: Array2<u8>) -> Self {
        Self { values }
    }

    pub fn width(&self) -> usize {
        self.values.dim().1
    }

    pub fn height(&self) -> usize {
        self.values.dim().0
    }

    /// Value at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.values[[y, x]]
    }

    pub fn as_array(&self) -> &Array2<u8> {
        &self.values
    }

    pub fn into_array(self) -> Array2<u8> {
        self.values
    }

    /// Flat row-major values, `width * height` long.
    pub fn into_raw(self) -> Vec<u8> {
        into_flat(self.values)
    }
}

/// Flatten an array into row-major order.
///
/// Standard-layout arrays reuse their backing vector. A sliced array may
/// start partway into that vector, so only the `len` elements from its
/// offset are kept.
pub(crate) fn into_flat<D: Dimension>(pixels: Array<u8, D>) -> Vec<u8> {
    if !pixels.is_standard_layout() {
        return pixels.iter().copied().collect();
    }
    let len = pixels.len();
    let (mut raw, offset) = pixels.into_raw_vec_and_offset();
    let start = offset.unwrap_or(0);
    raw.truncate(start + len);
    raw.drain(..start);
    raw
}
