//! Binarize Rust Extensions
//!
//! Turns a raster image into a black/white rendering, optionally overlaid
//! with Sobel edges, for interactive preview in a browser or from Python.
//!
//! ## Image Format
//! Every filter takes and returns RGBA u8 images laid out as
//! `(height, width, 4)` ndarrays, the same row-major interleaved layout as
//! a browser `ImageData` buffer. [`RgbaBuffer`] wraps flat bytes into that
//! shape and validates the length.
//!
//! ## Filters
//! - [`grayscale_rgba_u8`] - BT.601 luma, alpha preserved
//! - [`binarize_u8`] - strict `>` threshold with optional inversion
//! - [`sobel_magnitude_u8`] - 3x3 Sobel magnitude on interior pixels
//! - [`composite_u8`] - mask-weighted linear blend
//!
//! [`process_image`] chains them the way the preview UI does.
//!
//! All filters are pure: they allocate a fresh output, never mutate their
//! input, and render rows in parallel with rayon.

pub mod buffer;
pub mod error;
pub mod filters;
pub mod options;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::{BinaryMatrix, RgbaBuffer};
pub use error::{FilterError, FilterResult};
pub use filters::binarize::{binarize_u8, Binarized};
pub use filters::composite::composite_u8;
pub use filters::edge::sobel_magnitude_u8;
pub use filters::grayscale::grayscale_rgba_u8;
pub use options::{BinarizeOptions, EdgeOptions, ProcessOptions};
pub use pipeline::{process_image, ProcessOutput};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::buffer::RgbaBuffer;
    use crate::error::FilterError;
    use crate::filters::binarize::binarize_u8;
    use crate::filters::composite::composite_u8;
    use crate::filters::edge::sobel_magnitude_u8;
    use crate::filters::grayscale::grayscale_rgba_u8;
    use crate::options::{BinarizeOptions, EdgeOptions, ProcessOptions};
    use crate::pipeline::process_image;

    fn to_py_err(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Grayscale
    // ========================================================================

    /// Convert an RGBA u8 image to grayscale using BT.601 luma.
    ///
    /// Output is RGBA with R=G=B=luma, alpha preserved.
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = grayscale_rgba_u8(image.as_array()).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Binarize
    // ========================================================================

    /// Threshold a grayscale RGBA image.
    ///
    /// Returns `(binary, image)`: the (H, W) 0/255 mask and its opaque RGBA
    /// rendering.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=128, invert=false))]
    pub fn binarize<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: u8,
        invert: bool,
    ) -> PyResult<(Bound<'py, PyArray2<u8>>, Bound<'py, PyArray3<u8>>)> {
        let opts = BinarizeOptions { threshold, invert };
        let result = binarize_u8(image.as_array(), &opts).map_err(to_py_err)?;
        let binary = result.binary.into_array();
        Ok((binary.into_pyarray(py), result.image.into_pyarray(py)))
    }

    // ========================================================================
    // Edge Detection
    // ========================================================================

    /// Sobel gradient magnitude of a grayscale RGBA image.
    ///
    /// `blur` is accepted for compatibility and ignored.
    #[pyfunction]
    #[pyo3(signature = (image, strength=1.0, blur=0.0))]
    pub fn detect_edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        strength: f64,
        blur: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let opts = EdgeOptions { strength, blur };
        let result = sobel_magnitude_u8(image.as_array(), &opts).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Composite
    // ========================================================================

    /// Blend `overlay` onto `base` weighted by the red channel of `mask`.
    #[pyfunction]
    pub fn composite<'py>(
        py: Python<'py>,
        base: PyReadonlyArray3<'py, u8>,
        overlay: PyReadonlyArray3<'py, u8>,
        mask: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = composite_u8(base.as_array(), overlay.as_array(), mask.as_array())
            .map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Full Pipeline
    // ========================================================================

    /// Grayscale, binarize and optionally overlay edges in one call.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=128, invert=false, show_edges=true, strength=1.0))]
    pub fn process<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: u8,
        invert: bool,
        show_edges: bool,
        strength: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = RgbaBuffer::from_array(image.as_array().to_owned()).map_err(to_py_err)?;
        let opts = ProcessOptions {
            binarize: BinarizeOptions { threshold, invert },
            edges: EdgeOptions {
                strength,
                ..EdgeOptions::default()
            },
            show_edges,
        };
        let output = process_image(&input, &opts).map_err(to_py_err)?;
        Ok(output.image.into_array().into_pyarray(py))
    }

    /// Python module definition
    #[pymodule]
    pub fn binarize_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(binarize, m)?)?;
        m.add_function(wrap_pyfunction!(detect_edges, m)?)?;
        m.add_function(wrap_pyfunction!(composite, m)?)?;
        m.add_function(wrap_pyfunction!(process, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::binarize_rust;
