//! Core abstractions for fieldscope.
//!
//! This crate provides the fundamental types used throughout fieldscope:
//! - Boundary data model for meshes and analysis fields
//! - [`Quantity`] trait for data that maps onto mesh vertices
//! - Configuration options and display units
//! - Error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod axis;
pub mod error;
pub mod field;
pub mod options;
pub mod quantity;
pub mod units;

pub use axis::AxisDirection;
pub use error::{FieldscopeError, Result};
pub use field::{Color, FieldLocation, MeshData, Orientation, ScalarField, VectorField};
pub use options::{
    CameraOptions, MappingOptions, Options, OverlayOptions, SceneStyle, DEFAULT_EPSILON, MAX_FOV,
    MIN_FOV,
};
pub use quantity::{MappedAttributes, Quantity, QuantityKind};
pub use units::{format_tick, LengthUnit};

// Re-export glam types for convenience
pub use glam::DVec3;
