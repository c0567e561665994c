//! Full stylization chain.
//!
//! raw → grayscale → binarize → (optional) edges composited over the
//! binarized image, using the edges as their own mask.

use crate::buffer::{BinaryMatrix, RgbaBuffer};
use crate::error::FilterResult;
use crate::filters::binarize::binarize_u8;
use crate::filters::composite::composite_u8;
use crate::filters::edge::sobel_magnitude_u8;
use crate::filters::grayscale::grayscale_rgba_u8;
use crate::options::ProcessOptions;

/// Final image plus the binary mask it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub image: RgbaBuffer,
    pub binary: BinaryMatrix,
}

/// Run the whole chain on `input`.
#[tracing::instrument(level = "debug", skip(input), fields(width = input.width(), height = input.height()))]
pub fn process_image(input: &RgbaBuffer, opts: &ProcessOptions) -> FilterResult<ProcessOutput> {
    let gray = grayscale_rgba_u8(input.view())?;
    let binarized = binarize_u8(gray.view(), &opts.binarize)?;

    let image = if opts.show_edges {
        let edges = sobel_magnitude_u8(gray.view(), &opts.edges)?;
        composite_u8(binarized.image.view(), edges.view(), edges.view())?
    } else {
        binarized.image
    };

    Ok(ProcessOutput {
        image: RgbaBuffer::from_array(image)?,
        binary: binarized.binary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BinarizeOptions, EdgeOptions};

    /// 6x4 image: dark red on the left half, light blue on the right.
    fn two_tone() -> RgbaBuffer {
        let mut data = Vec::new();
        for _ in 0..4 {
            for x in 0..6 {
                if x < 3 {
                    data.extend_from_slice(&[120, 10, 10, 255]);
                } else {
                    data.extend_from_slice(&[180, 220, 250, 200]);
                }
            }
        }
        RgbaBuffer::from_raw(6, 4, data).unwrap()
    }

    #[test]
    fn test_process_without_edges_is_binarized() {
        let input = two_tone();
        let opts = ProcessOptions {
            show_edges: false,
            ..ProcessOptions::default()
        };

        let out = process_image(&input, &opts).unwrap();

        // luma(120, 10, 10) = 43, luma(180, 220, 250) = 211
        assert_eq!(out.image.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(out.image.pixel(5, 3), [255, 255, 255, 255]);
        assert_eq!(out.binary.get(2, 1), 0);
        assert_eq!(out.binary.get(3, 1), 255);
    }

    #[test]
    fn test_process_with_edges_matches_manual_chain() {
        let input = two_tone();
        let opts = ProcessOptions {
            binarize: BinarizeOptions {
                threshold: 100,
                invert: true,
            },
            edges: EdgeOptions {
                strength: 0.5,
                blur: 0.0,
            },
            show_edges: true,
        };

        let out = process_image(&input, &opts).unwrap();

        let gray = grayscale_rgba_u8(input.view()).unwrap();
        let binarized = binarize_u8(gray.view(), &opts.binarize).unwrap();
        let edges = sobel_magnitude_u8(gray.view(), &opts.edges).unwrap();
        let expected = composite_u8(binarized.image.view(), edges.view(), edges.view()).unwrap();

        assert_eq!(out.image.as_array(), &expected);
        assert_eq!(out.binary, binarized.binary);
    }

    #[test]
    fn test_process_edges_lighten_boundary() {
        let input = two_tone();
        let out = process_image(&input, &ProcessOptions::default()).unwrap();

        // Black side next to the boundary picks up the white edge overlay.
        let [r, g, b, a] = out.image.pixel(2, 1);
        assert!(r > 100 && r == g && g == b);
        assert_eq!(a, 255);
        // Border pixels have a zero-weight mask and keep the binarized value.
        assert_eq!(out.image.pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_process_preserves_dimensions() {
        let input = RgbaBuffer::zeros(7, 3);
        let out = process_image(&input, &ProcessOptions::default()).unwrap();
        assert_eq!(out.image.width(), 7);
        assert_eq!(out.image.height(), 3);
        assert_eq!(out.binary.width(), 7);
        assert_eq!(out.binary.height(), 3);
    }

    #[test]
    fn test_process_empty_image() {
        let input = RgbaBuffer::from_raw(0, 0, Vec::new()).unwrap();
        let out = process_image(&input, &ProcessOptions::default()).unwrap();
        assert!(out.image.into_raw().is_empty());
        assert!(out.binary.into_raw().is_empty());
    }
}
