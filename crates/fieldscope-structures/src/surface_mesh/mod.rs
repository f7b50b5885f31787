//! Surface mesh structure.

mod geometry;
mod quantities;
pub use geometry::compute_vertex_normals;
pub use quantities::*;

use fieldscope_core::{FieldscopeError, MappedAttributes, MeshData, Quantity, Result};
use fieldscope_render::BoundingBox;
use glam::DVec3;

/// A validated triangle mesh.
///
/// Every face index is checked against the vertex count at construction, so
/// downstream mapping and normal computation can index without bounds
/// failures.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    name: String,
    vertices: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
    vertex_normals: Vec<DVec3>,
}

impl SurfaceMesh {
    /// Creates a new surface mesh from vertices and triangles.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<DVec3>,
        faces: Vec<[u32; 3]>,
    ) -> Result<Self> {
        let num_vertices = vertices.len();
        for (face_idx, face) in faces.iter().enumerate() {
            if let Some(&index) = face.iter().find(|&&i| i as usize >= num_vertices) {
                return Err(FieldscopeError::FaceIndexOutOfRange {
                    face: face_idx,
                    index,
                    num_vertices,
                });
            }
        }

        let vertex_normals = compute_vertex_normals(&vertices, &faces);
        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            vertex_normals,
        })
    }

    /// Creates a surface mesh from backend mesh data.
    pub fn from_data(name: impl Into<String>, data: MeshData) -> Result<Self> {
        Self::new(name, data.vertices, data.faces)
    }

    /// Returns the name of this mesh.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the faces.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the area-weighted vertex normals of the undeformed mesh.
    pub fn vertex_normals(&self) -> &[DVec3] {
        &self.vertex_normals
    }

    /// Returns the axis-aligned bounding box of the undeformed mesh.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Maps a quantity onto this mesh's vertices.
    pub fn map_quantity(&self, quantity: &dyn Quantity) -> Result<MappedAttributes> {
        log::debug!(
            "mapping {:?} quantity '{}' ({} elements) onto '{}' ({} vertices)",
            quantity.kind(),
            quantity.name(),
            quantity.data_size(),
            self.name,
            self.vertices.len()
        );
        quantity.map_onto(&self.vertices)
    }

    /// Recomputes normals for (possibly displaced) positions on this mesh's faces.
    pub fn normals_for(&self, positions: &[DVec3]) -> Result<Vec<DVec3>> {
        if positions.len() != self.vertices.len() {
            return Err(FieldscopeError::ShapeMismatch {
                expected: self.vertices.len(),
                actual: positions.len(),
            });
        }
        Ok(compute_vertex_normals(positions, &self.faces))
    }
}
