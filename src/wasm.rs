//! WebAssembly exports for the stylization filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and take the
//! flat RGBA bytes of a canvas `ImageData` together with its dimensions.
//! Every function returns a new byte array; invalid input raises a JS
//! `Error`.

use wasm_bindgen::prelude::*;

use crate::buffer::{into_flat, RgbaBuffer};
use crate::error::FilterError;
use crate::filters::binarize::binarize_u8;
use crate::filters::composite::composite_u8;
use crate::filters::edge::sobel_magnitude_u8;
use crate::filters::grayscale::grayscale_rgba_u8;
use crate::options::{BinarizeOptions, EdgeOptions, ProcessOptions};
use crate::pipeline::process_image;

fn to_js_err(err: FilterError) -> JsError {
    JsError::new(&err.to_string())
}

fn wrap(data: &[u8], width: usize, height: usize) -> Result<RgbaBuffer, JsError> {
    RgbaBuffer::from_raw(width, height, data.to_vec()).map_err(to_js_err)
}

// ============================================================================
// Grayscale
// ============================================================================

/// Convert RGBA u8 image to grayscale using BT.601 luma.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of RGBA bytes with R=G=B=luma, alpha preserved
#[wasm_bindgen]
pub fn grayscale_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let input = wrap(data, width, height)?;
    let result = grayscale_rgba_u8(input.view()).map_err(to_js_err)?;
    Ok(into_flat(result))
}

// ============================================================================
// Binarize
// ============================================================================

/// Binary mask and its RGBA rendering, returned by [`binarize_wasm`].
#[wasm_bindgen]
pub struct BinarizeOutput {
    binary: Vec<u8>,
    image: Vec<u8>,
}

#[wasm_bindgen]
impl BinarizeOutput {
    /// One byte per pixel, each 0 or 255.
    #[wasm_bindgen(getter)]
    pub fn binary(&self) -> Vec<u8> {
        self.binary.clone()
    }

    /// Flat RGBA bytes, alpha 255.
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> Vec<u8> {
        self.image.clone()
    }
}

/// Threshold a grayscale RGBA image.
#[wasm_bindgen]
pub fn binarize_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: u8,
    invert: bool,
) -> Result<BinarizeOutput, JsError> {
    let input = wrap(data, width, height)?;
    let opts = BinarizeOptions { threshold, invert };
    let result = binarize_u8(input.view(), &opts).map_err(to_js_err)?;
    Ok(BinarizeOutput {
        binary: result.binary.into_raw(),
        image: into_flat(result.image),
    })
}

// ============================================================================
// Edge Detection
// ============================================================================

/// Sobel gradient magnitude of a grayscale RGBA image.
///
/// `blur` is accepted for compatibility and ignored.
#[wasm_bindgen]
pub fn detect_edges_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    strength: f64,
    blur: f64,
) -> Result<Vec<u8>, JsError> {
    let input = wrap(data, width, height)?;
    let opts = EdgeOptions { strength, blur };
    let result = sobel_magnitude_u8(input.view(), &opts).map_err(to_js_err)?;
    Ok(into_flat(result))
}

// ============================================================================
// Composite
// ============================================================================

/// Blend `overlay` onto `base` weighted by the red channel of `mask`.
///
/// All three buffers must describe `width` x `height` images.
#[wasm_bindgen]
pub fn composite_wasm(
    base: &[u8],
    overlay: &[u8],
    mask: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsError> {
    let base = wrap(base, width, height)?;
    let overlay = wrap(overlay, width, height)?;
    let mask = wrap(mask, width, height)?;
    let result = composite_u8(base.view(), overlay.view(), mask.view()).map_err(to_js_err)?;
    Ok(into_flat(result))
}

// ============================================================================
// Full Pipeline
// ============================================================================

/// Run grayscale, binarize and the optional edge overlay in one call.
///
/// # Arguments
/// * `options_json` - e.g. `{"threshold": 128, "invert": false, "show_edges": true, "strength": 1.5}`;
///   missing fields take their defaults
#[wasm_bindgen]
pub fn process_image_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    options_json: &str,
) -> Result<Vec<u8>, JsError> {
    let input = wrap(data, width, height)?;
    let opts = ProcessOptions::from_json(options_json).map_err(to_js_err)?;
    let output = process_image(&input, &opts).map_err(to_js_err)?;
    Ok(output.image.into_raw())
}
