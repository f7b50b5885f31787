//! Boundary data model for analysis results.
//!
//! These are the shapes exchanged with the analysis backends. They are
//! deserialized straight from a response body and consumed once by the
//! mapping functions; nothing here is cached between requests.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An RGB color with channels in `[0, 1]`.
pub type Color = DVec3;

/// Raw triangle mesh as delivered by a backend.
///
/// Face indices are not validated here; see `SurfaceMesh::new` in
/// `fieldscope-structures` for the checked form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex positions.
    pub vertices: Vec<DVec3>,
    /// Triangles as vertex index triples.
    pub faces: Vec<[u32; 3]>,
}

impl MeshData {
    /// Creates mesh data from vertices and triangles.
    pub fn new(vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
}

/// Element type a field is defined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    /// One value per mesh vertex.
    #[default]
    Vertex,
}

/// A sparse scalar field over mesh vertices.
///
/// `indices` and `values` are aligned pairwise. The field may cover only a
/// subset of the vertices and may repeat an index. `min`/`max` set the
/// normalization range and need not be the true extrema of `values`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    /// Where the values live.
    #[serde(default)]
    pub mapping: FieldLocation,
    /// Vertex index of each value.
    pub indices: Vec<usize>,
    /// Field values.
    pub values: Vec<f64>,
    /// Lower end of the normalization range.
    pub min: f64,
    /// Upper end of the normalization range.
    pub max: f64,
}

impl ScalarField {
    /// Creates a sparse scalar field with an explicit range.
    pub fn new(indices: Vec<usize>, values: Vec<f64>, min: f64, max: f64) -> Self {
        Self {
            mapping: FieldLocation::Vertex,
            indices,
            values,
            min,
            max,
        }
    }

    /// Creates a field covering vertices `0..values.len()`, with the range
    /// taken from the values themselves.
    pub fn dense(values: Vec<f64>) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (min, max) = if values.is_empty() { (0.0, 0.0) } else { (min, max) };
        let indices = (0..values.len()).collect();
        Self::new(indices, values, min, max)
    }

    /// Returns true if the field carries no samples.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() || self.values.is_empty()
    }

    /// Largest absolute bound of the normalization range.
    pub fn max_abs(&self) -> f64 {
        self.min.abs().max(self.max.abs())
    }
}

/// A dense per-vertex displacement field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorField {
    /// Displacement of every vertex, in mesh order.
    pub displacement: Vec<DVec3>,
    /// Displacement magnitude that maps to the top of the heatmap.
    pub max_disp: f64,
}

impl VectorField {
    /// Creates a displacement field.
    pub fn new(displacement: Vec<DVec3>, max_disp: f64) -> Self {
        Self {
            displacement,
            max_disp,
        }
    }

    /// Creates a displacement field whose range is the largest magnitude present.
    pub fn with_auto_range(displacement: Vec<DVec3>) -> Self {
        let max_disp = displacement
            .iter()
            .map(|d| d.length())
            .fold(0.0, f64::max);
        Self::new(displacement, max_disp)
    }
}

/// Orientation hint reported by the surface analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Detected height axis; not necessarily unit length.
    pub height_axis: DVec3,
}
