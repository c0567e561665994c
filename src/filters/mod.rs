//! Filter modules for the binary/edge stylization.
//!
//! ## Format
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//! | Binary | (H, W) | u8 | Single 0/255 channel (binarize output only) |
//!
//! Inputs with any other channel count are rejected with
//! [`FilterError::InvalidInput`](crate::error::FilterError::InvalidInput).
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - a fresh output array per call, input never mutated
//! - **Validated up front** - shape errors are returned before any pixel work
//! - **Deterministic** - `f64` intermediates, round half up, clamp to 0-255
//! - **Thread-safe** - rows rendered in parallel with rayon
//!
//! The binarizer and edge detector read only the red channel, so they
//! expect the output of [`grayscale`].

pub mod core;
pub mod grayscale;
pub mod binarize;
pub mod edge;
pub mod composite;
