//! Geometry computation for surface meshes.

use glam::DVec3;

/// Computes area-weighted vertex normals for a triangle list.
///
/// Each triangle adds its unnormalized cross product (twice its area times
/// its unit normal) to its three corners. Vertices with no incident area get
/// a zero normal. Face indices must already be validated against
/// `positions`.
pub fn compute_vertex_normals(positions: &[DVec3], faces: &[[u32; 3]]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; positions.len()];

    for face in faces {
        let [a, b, c] = face.map(|i| i as usize);
        let e1 = positions[b] - positions[a];
        let e2 = positions[c] - positions[a];
        let weighted_normal = e1.cross(e2);
        normals[a] += weighted_normal;
        normals[b] += weighted_normal;
        normals[c] += weighted_normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}
