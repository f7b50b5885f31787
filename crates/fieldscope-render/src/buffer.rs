//! Render-ready vertex buffers.
//!
//! Mapping works in `f64`; GPUs want tightly packed `f32`. [`MeshBuffers`]
//! interleaves positions, normals and colors into a [`bytemuck::Pod`] layout
//! that the scene composer can upload as-is.

use bytemuck::{Pod, Zeroable};
use fieldscope_core::{Color, FieldscopeError, Result};
use glam::DVec3;

/// One interleaved vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexAttributes {
    /// Position.
    pub position: [f32; 3],
    /// Shading normal.
    pub normal: [f32; 3],
    /// RGB color.
    pub color: [f32; 3],
}

/// Interleaved vertices plus a flat triangle index list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// One entry per vertex.
    pub vertices: Vec<VertexAttributes>,
    /// Three indices per triangle.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Packs dense per-vertex attributes and triangles.
    ///
    /// `normals` and `colors` must have one entry per position.
    pub fn new(
        positions: &[DVec3],
        normals: &[DVec3],
        colors: &[Color],
        faces: &[[u32; 3]],
    ) -> Result<Self> {
        for len in [normals.len(), colors.len()] {
            if len != positions.len() {
                return Err(FieldscopeError::ShapeMismatch {
                    expected: positions.len(),
                    actual: len,
                });
            }
        }

        let vertices = positions
            .iter()
            .zip(normals)
            .zip(colors)
            .map(|((p, n), c)| VertexAttributes {
                position: p.as_vec3().to_array(),
                normal: n.as_vec3().to_array(),
                color: c.as_vec3().to_array(),
            })
            .collect();
        let indices = bytemuck::cast_slice::<[u32; 3], u32>(faces).to_vec();

        Ok(Self { vertices, indices })
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
