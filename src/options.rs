//! Processing options.
//!
//! All option structs deserialize with `#[serde(default)]`, so a front end
//! can send only the fields the user touched.

use serde::{Deserialize, Serialize};

use crate::error::FilterResult;

/// Options for [`binarize_u8`](crate::filters::binarize::binarize_u8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinarizeOptions {
    /// Pixels strictly brighter than this become white.
    pub threshold: u8,
    /// Swap black and white in the result.
    pub invert: bool,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            threshold: 128,
            invert: false,
        }
    }
}

/// Options for [`sobel_magnitude_u8`](crate::filters::edge::sobel_magnitude_u8).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Multiplier applied to the gradient magnitude before clamping.
    pub strength: f64,
    /// Pre-blur radius. Accepted for compatibility; the Sobel pass ignores it.
    pub blur: f64,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            strength: 1.0,
            blur: 0.0,
        }
    }
}

/// Options for the full [`process_image`](crate::pipeline::process_image) chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions {
    #[serde(flatten)]
    pub binarize: BinarizeOptions,
    #[serde(flatten)]
    pub edges: EdgeOptions,
    /// Overlay detected edges on the binarized image.
    pub show_edges: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            binarize: BinarizeOptions::default(),
            edges: EdgeOptions::default(),
            show_edges: true,
        }
    }
}

impl ProcessOptions {
    /// Parse options from a JSON object such as
    /// `{"threshold": 100, "invert": true, "strength": 2.5}`.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> FilterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
