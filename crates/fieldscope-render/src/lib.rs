//! Render-side mapping for fieldscope.
//!
//! This crate turns numbers into things a renderer can draw:
//! - Diverging and heatmap color maps, plus legend gradients
//! - Camera auto-fit for arbitrary mesh extents
//! - Legend descriptors in display units
//! - Packed `f32` vertex buffers

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod camera;
pub mod color_maps;
pub mod legend;

pub use buffer::{MeshBuffers, VertexAttributes};
pub use camera::{BoundingBox, CameraFrame};
pub use color_maps::{
    color_from_hex, hsl_to_rgb, iso_diverging, magnitude_heatmap, normalized_diverging, ColorMap,
    ColorMapRegistry, HEATMAP_HUE_HIGH, HEATMAP_HUE_LOW,
};
pub use legend::Legend;
