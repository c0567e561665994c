//! Binary threshold filter.
//!
//! Turns a grayscale image into pure black and white. Only the red channel
//! is read, so callers run [`grayscale_rgba_u8`](super::grayscale::grayscale_rgba_u8)
//! first; on a color image the raw red values are thresholded.

use ndarray::{Array2, Array3, ArrayView3};

use super::core::{ensure_rgba, render_rows, RGBA_CHANNELS};
use crate::buffer::BinaryMatrix;
use crate::error::FilterResult;
use crate::options::BinarizeOptions;

/// Result of [`binarize_u8`]: the raw mask plus an RGBA rendering of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binarized {
    pub binary: BinaryMatrix,
    /// R=G=B=mask value, A=255.
    pub image: Array3<u8>,
}

/// 255 if `gray > threshold` (flipped by `invert`), else 0.
///
/// A value equal to the threshold is "off" before inversion.
#[inline]
pub fn binary_value(gray: u8, opts: &BinarizeOptions) -> u8 {
    if (gray > opts.threshold) != opts.invert {
        255
    } else {
        0
    }
}

/// Apply a binary threshold - u8 version.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4), expected to be grayscale
/// * `opts` - threshold and invert flag
///
/// # Returns
/// The single-channel mask and its opaque RGBA visualization
///
/// # Errors
/// `InvalidInput` if the view does not have 4 channels.
#[tracing::instrument(level = "debug", skip(input), fields(dim = ?input.dim()))]
pub fn binarize_u8(input: ArrayView3<u8>, opts: &BinarizeOptions) -> FilterResult<Binarized> {
    let (height, width) = ensure_rgba(&input, "image")?;

    let image = render_rows(height, width, RGBA_CHANNELS, |y, row| {
        for (x, px) in row.chunks_exact_mut(RGBA_CHANNELS).enumerate() {
            let value = binary_value(input[[y, x, 0]], opts);
            px[0] = value;
            px[1] = value;
            px[2] = value;
            px[3] = 255;
        }
    })?;

    // The visualization already holds the mask in its red channel.
    let binary: Array2<u8> = image.index_axis(ndarray::Axis(2), 0).to_owned();

    Ok(Binarized {
        binary: BinaryMatrix::new(binary),
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    fn gray_image(width: usize, height: usize, values: &[u8]) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((height, width, 4));
        for (i, &v) in values.iter().enumerate() {
            let (y, x) = (i / width, i % width);
            img[[y, x, 0]] = v;
            img[[y, x, 1]] = v;
            img[[y, x, 2]] = v;
            img[[y, x, 3]] = 255;
        }
        img
    }

    #[test]
    fn test_binarize_threshold_128() {
        let img = gray_image(3, 3, &[200, 100, 150, 50, 250, 0, 128, 180, 75]);
        let expected = [255u8, 0, 255, 0, 255, 0, 0, 255, 0];

        let result = binarize_u8(img.view(), &BinarizeOptions::default()).unwrap();

        for (i, &want) in expected.iter().enumerate() {
            let (y, x) = (i / 3, i % 3);
            assert_eq!(result.binary.get(x, y), want, "pixel {i}");
            assert_eq!(result.image[[y, x, 0]], want);
            assert_eq!(result.image[[y, x, 1]], want);
            assert_eq!(result.image[[y, x, 2]], want);
            assert_eq!(result.image[[y, x, 3]], 255);
        }
    }

    #[test]
    fn test_binarize_invert() {
        let img = gray_image(2, 2, &[200, 100, 150, 50]);
        let opts = BinarizeOptions {
            threshold: 128,
            invert: true,
        };

        let result = binarize_u8(img.view(), &opts).unwrap();

        assert_eq!(result.binary.into_raw(), vec![0, 255, 0, 255]);
    }

    #[test]
    fn test_binarize_invert_is_complement() {
        let values: Vec<u8> = (0..=255).collect();
        let img = gray_image(16, 16, &values);

        for threshold in [0u8, 1, 127, 128, 254, 255] {
            let plain = binarize_u8(img.view(), &BinarizeOptions { threshold, invert: false })
                .unwrap()
                .binary;
            let inverted = binarize_u8(img.view(), &BinarizeOptions { threshold, invert: true })
                .unwrap()
                .binary;

            for (a, b) in plain.as_array().iter().zip(inverted.as_array().iter()) {
                assert_eq!(*a, 255 - *b);
            }
        }
    }

    #[test]
    fn test_binarize_equal_to_threshold_is_off() {
        let img = gray_image(1, 1, &[77]);
        let opts = BinarizeOptions {
            threshold: 77,
            invert: false,
        };
        let result = binarize_u8(img.view(), &opts).unwrap();
        assert_eq!(result.binary.get(0, 0), 0);
    }

    #[test]
    fn test_binarize_forces_opaque_alpha() {
        let mut img = gray_image(2, 1, &[10, 250]);
        img[[0, 0, 3]] = 0;
        img[[0, 1, 3]] = 17;

        let result = binarize_u8(img.view(), &BinarizeOptions::default()).unwrap();
        assert_eq!(result.image[[0, 0, 3]], 255);
        assert_eq!(result.image[[0, 1, 3]], 255);
    }

    #[test]
    fn test_binarize_reads_red_channel_only() {
        let mut img = Array3::<u8>::zeros((1, 2, 4));
        img[[0, 0, 0]] = 200; // red only
        img[[0, 1, 1]] = 200; // green only
        img[[0, 1, 2]] = 200;

        let result = binarize_u8(img.view(), &BinarizeOptions::default()).unwrap();
        assert_eq!(result.binary.get(0, 0), 255);
        assert_eq!(result.binary.get(1, 0), 0);
    }

    #[test]
    fn test_binarize_matrix_shape() {
        let img = Array3::<u8>::zeros((3, 5, 4));
        let result = binarize_u8(img.view(), &BinarizeOptions::default()).unwrap();
        assert_eq!(result.binary.width(), 5);
        assert_eq!(result.binary.height(), 3);
        assert_eq!(result.image.dim(), (3, 5, 4));
    }

    #[test]
    fn test_binarize_rejects_malformed() {
        let img = Array3::<u8>::zeros((2, 2, 2));
        let result = binarize_u8(img.view(), &BinarizeOptions::default());
        assert!(matches!(result, Err(FilterError::InvalidInput(_))));
    }
}
