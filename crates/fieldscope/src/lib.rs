//! fieldscope: colored, camera-framed meshes from analysis results.
//!
//! Two kinds of per-mesh results are supported:
//! - a sparse **scalar** surface-deviation field, shown with an ISO-style
//!   diverging colormap (valleys blue, peaks red)
//! - dense **vector** displacement fields from a physics solver, applied to
//!   the vertices and shown with a magnitude heatmap
//!
//! # Quick Start
//!
//! ```no_run
//! use fieldscope::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let body = std::fs::read_to_string("roughness.json")?;
//!     let report = RoughnessReport::from_json_str(&body)?;
//!     let view = report.view(&Options::default())?;
//!
//!     println!("{}: camera at {}", view.title, view.scene.camera.position);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`SurfaceMesh`] validates geometry and computes normals
//! - [`VertexScalarQuantity`] and [`VertexDisplacementQuantity`] are the
//!   only place field values become colors
//! - [`CameraFrame`] fits the camera to the mesh bounds
//! - [`SceneInput`] bundles everything for the external renderer, and
//!   [`SceneSlot`] scopes the renderer's per-mesh resources

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod analysis;
pub mod lifecycle;
pub mod scene;

// Re-export core types
pub use fieldscope_core::{
    AxisDirection, CameraOptions, Color, FieldscopeError, LengthUnit, MappedAttributes,
    MappingOptions, MeshData, Options, Orientation, OverlayOptions, Quantity, QuantityKind,
    Result, ScalarField, SceneStyle, VectorField, DVec3,
};

// Re-export render types
pub use fieldscope_render::{
    BoundingBox, CameraFrame, ColorMap, ColorMapRegistry, Legend, MeshBuffers, VertexAttributes,
};

// Re-export structures
pub use fieldscope_structures::{
    AxesHelper, OrientationRay, SurfaceMesh, VertexDisplacementQuantity, VertexScalarQuantity,
};

pub use analysis::{
    AnalysisView, AnalysisViews, MaterialInfo, PhysicsReport, RoughnessMetrics, RoughnessReport,
};
pub use lifecycle::{SceneBackend, SceneSlot};
pub use scene::{MappingOutput, SceneInput};

/// Initializes `env_logger` from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
