//! Scene composer input.
//!
//! [`SceneInput`] is everything the external rendering engine needs to draw
//! one mapped mesh: dense vertex attributes, triangles, the fitted camera and
//! the overlays. Lighting, orbit controls and resizing happen on the other
//! side of this boundary.

use fieldscope_core::{Color, MappedAttributes, Options, Orientation, Quantity, Result, SceneStyle};
use fieldscope_render::{CameraFrame, MeshBuffers};
use fieldscope_structures::{AxesHelper, OrientationRay, SurfaceMesh};
use glam::DVec3;
use serde::Serialize;

/// Render-ready description of one mapped mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneInput {
    /// Name of the source mesh.
    pub name: String,
    /// Vertex positions (base or displaced).
    pub positions: Vec<DVec3>,
    /// Triangles.
    pub faces: Vec<[u32; 3]>,
    /// One color per vertex.
    pub colors: Vec<Color>,
    /// Area-weighted normals of `positions`.
    pub normals: Vec<DVec3>,
    /// Camera fitted to the undeformed mesh.
    pub camera: CameraFrame,
    /// Height-axis arrow, when the analysis reported one.
    pub orientation: Option<OrientationRay>,
    /// World axes reference.
    pub axes: AxesHelper,
    /// Lighting and material constants.
    pub style: SceneStyle,
}

impl SceneInput {
    /// Maps `quantity` onto `mesh` and frames the result.
    ///
    /// Without a quantity the mesh is shown at rest in the no-data color.
    /// The camera is always fitted to the undeformed mesh, so switching
    /// between fields of the same mesh keeps the view stable.
    pub fn compose(
        mesh: &SurfaceMesh,
        quantity: Option<&dyn Quantity>,
        orientation: Option<&Orientation>,
        options: &Options,
    ) -> Result<Self> {
        let MappedAttributes { positions, colors } = match quantity {
            Some(quantity) => mesh.map_quantity(quantity)?,
            None => MappedAttributes {
                positions: mesh.vertices().to_vec(),
                colors: vec![options.mapping.no_data_color; mesh.num_vertices()],
            },
        };
        let normals = mesh.normals_for(&positions)?;

        let camera = CameraFrame::fit(&mesh.bounding_box(), &options.camera);
        let max_dim = camera.max_dim(options.camera.epsilon);
        let orientation =
            OrientationRay::from_hint(orientation, camera.center, max_dim, &options.overlay);
        let axes = AxesHelper::new(max_dim, &options.overlay);

        log::info!(
            "composed scene '{}': {} vertices, {} faces, camera distance {:.3e}",
            mesh.name(),
            positions.len(),
            mesh.num_faces(),
            camera.distance
        );

        Ok(Self {
            name: mesh.name().to_string(),
            positions,
            faces: mesh.faces().to_vec(),
            colors,
            normals,
            camera,
            orientation,
            axes,
            style: options.style.clone(),
        })
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Packs the vertex attributes for upload.
    pub fn buffers(&self) -> Result<MeshBuffers> {
        MeshBuffers::new(&self.positions, &self.normals, &self.colors, &self.faces)
    }

    /// The mapping output in its wire shape.
    pub fn mapping_output(&self) -> MappingOutput {
        MappingOutput {
            colors: self.colors.clone(),
            positions: self.positions.clone(),
        }
    }
}

/// Mapping result as exchanged with the scene composer:
/// `{colors: [[r,g,b],...], positions: [[x,y,z],...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingOutput {
    /// One color per vertex.
    pub colors: Vec<Color>,
    /// One position per vertex.
    pub positions: Vec<DVec3>,
}
