//! Structure implementations for fieldscope.
//!
//! This crate provides the mesh and everything mapped onto it:
//! - Surface meshes with validated faces and vertex normals
//! - Scalar and displacement quantities (the field-to-color mapping)
//! - Orientation and world-axes overlays

// Graphics code intentionally uses casts for indices
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod orientation;
pub mod surface_mesh;

pub use orientation::{AxesHelper, OrientationRay};
pub use surface_mesh::{
    compute_vertex_normals, SurfaceMesh, VertexDisplacementQuantity, VertexScalarQuantity,
};
