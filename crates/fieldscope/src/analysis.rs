//! Analysis backend payloads.
//!
//! Two backends feed the viewer: a surface-roughness service that returns a
//! sparse deviation field over the top surface, and a physics solver that
//! returns displacement fields for a pressure and a thermal load case. This
//! module decodes their JSON bodies and turns each into ready-to-draw views.

use fieldscope_core::{LengthUnit, MeshData, Options, Orientation, Result, ScalarField, VectorField};
use fieldscope_render::Legend;
use fieldscope_structures::{SurfaceMesh, VertexDisplacementQuantity, VertexScalarQuantity};
use serde::{Deserialize, Serialize};

use crate::scene::SceneInput;

/// Areal roughness parameters, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoughnessMetrics {
    /// Arithmetic mean height.
    #[serde(rename = "Sa")]
    pub sa: f64,
    /// Root mean square height.
    #[serde(rename = "Sq")]
    pub sq: f64,
    /// Maximum height (peak to valley).
    #[serde(rename = "Sz")]
    pub sz: f64,
}

impl RoughnessMetrics {
    /// Labelled values formatted in `unit`.
    pub fn formatted(&self, unit: LengthUnit) -> [(&'static str, String); 3] {
        [("Sa", self.sa), ("Sq", self.sq), ("Sz", self.sz)].map(|(label, value)| {
            let text = format!("{} {}", unit.format_metric(value), unit.symbol());
            (label, text)
        })
    }
}

/// Material metadata attached to a roughness report. Passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    /// Alloy name.
    pub name: String,
    /// Density in kg/m³.
    pub density: f64,
    /// Young's modulus in Pa.
    pub elastic_modulus: f64,
    /// Yield strength in Pa.
    pub yield_strength: f64,
    /// Ultimate tensile strength in Pa.
    pub tensile_strength: f64,
    /// Poisson's ratio.
    pub poisson_ratio: f64,
}

/// Response of the surface-roughness backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoughnessReport {
    /// Unit of all lengths, e.g. `"meters"`.
    #[serde(default)]
    pub units: Option<String>,
    /// Material metadata.
    #[serde(default)]
    pub material: Option<MaterialInfo>,
    /// Summary metrics.
    #[serde(default)]
    pub metrics: Option<RoughnessMetrics>,
    /// Full mesh.
    pub mesh: MeshData,
    /// Deviation field over the analysed surface.
    pub roughness: ScalarField,
    /// Detected height axis.
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

impl RoughnessReport {
    /// Parses a response body.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the deviation view.
    pub fn view(&self, options: &Options) -> Result<AnalysisView> {
        let mesh = SurfaceMesh::from_data("surface roughness", self.mesh.clone())?;
        let quantity = VertexScalarQuantity::new("deviation", self.roughness.clone())
            .with_options(&options.mapping);
        let scene =
            SceneInput::compose(&mesh, Some(&quantity), self.orientation.as_ref(), options)?;
        let legend = Legend::diverging(
            "Deviation",
            self.roughness.min,
            self.roughness.max,
            options.display_unit,
        );
        Ok(AnalysisView {
            title: "Surface Roughness".to_string(),
            scene,
            legend,
        })
    }
}

/// Response of the physics backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsReport {
    /// Mesh the solver ran on.
    pub geometry: MeshData,
    /// Displacement under the pressure load case.
    pub pressure: VectorField,
    /// Displacement under the thermal load case.
    pub thermal: VectorField,
}

impl PhysicsReport {
    /// Parses a response body.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the pressure and thermal displacement views.
    pub fn views(&self, options: &Options) -> Result<Vec<AnalysisView>> {
        let mesh = SurfaceMesh::from_data("physics", self.geometry.clone())?;
        [("Pressure", &self.pressure), ("Thermal", &self.thermal)]
            .into_iter()
            .map(|(title, field)| -> Result<AnalysisView> {
                let quantity = VertexDisplacementQuantity::new(title.to_lowercase(), field.clone())
                    .with_options(&options.mapping);
                let scene = SceneInput::compose(&mesh, Some(&quantity), None, options)?;
                let legend = Legend::spectral("Displacement", field.max_disp, options.display_unit);
                Ok(AnalysisView {
                    title: title.to_string(),
                    scene,
                    legend,
                })
            })
            .collect()
    }
}

/// One panel of the viewer: a mapped scene and its legend.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    /// Panel title.
    pub title: String,
    /// What to draw.
    pub scene: SceneInput,
    /// Color bar description.
    pub legend: Legend,
}

/// All panels built from one pair of backend responses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisViews {
    /// Panels in display order.
    pub views: Vec<AnalysisView>,
}

impl AnalysisViews {
    /// Builds every panel available from the given reports.
    ///
    /// Either report may be missing, for example when one backend is down.
    pub fn build(
        roughness: Option<&RoughnessReport>,
        physics: Option<&PhysicsReport>,
        options: &Options,
    ) -> Result<Self> {
        let mut views = Vec::new();
        if let Some(report) = roughness {
            views.push(report.view(options)?);
        }
        if let Some(report) = physics {
            views.extend(report.views(options)?);
        }
        Ok(Self { views })
    }

    /// Finds a panel by title.
    pub fn get(&self, title: &str) -> Option<&AnalysisView> {
        self.views.iter().find(|v| v.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldscope_core::FieldscopeError;
    use glam::DVec3;

    const ROUGHNESS_JSON: &str = r#"{
        "units": "meters",
        "material": {
            "name": "AlSi10Mg",
            "density": 2670,
            "elastic_modulus": 70e9,
            "yield_strength": 230e6,
            "tensile_strength": 350e6,
            "poisson_ratio": 0.33
        },
        "metrics": {"Sa": 1.5e-6, "Sq": 2e-6, "Sz": 8e-6},
        "mesh": {"vertices": [[0,0,0],[1,0,0],[0,1,0]], "faces": [[0,1,2]]},
        "roughness": {
            "mapping": "vertex",
            "indices": [0,1,2],
            "values": [-2,0,2],
            "min": -2,
            "max": 2
        },
        "orientation": {"height_axis": [0, 0, 1]}
    }"#;

    const PHYSICS_JSON: &str = r#"{
        "geometry": {"vertices": [[0,0,0],[1,0,0],[0,1,0]], "faces": [[0,1,2]]},
        "pressure": {"displacement": [[0,0,1],[0,0,0],[0,0,0.5]], "max_disp": 1},
        "thermal": {"displacement": [[0,0,0],[0,0,0],[0,0,0]], "max_disp": 0}
    }"#;

    #[test]
    fn test_decode_roughness_report() {
        let report = RoughnessReport::from_json_str(ROUGHNESS_JSON).unwrap();
        assert_eq!(report.units.as_deref(), Some("meters"));
        assert_eq!(report.material.as_ref().unwrap().name, "AlSi10Mg");
        assert_eq!(report.metrics.unwrap().sz, 8e-6);
        assert_eq!(report.roughness.values, vec![-2.0, 0.0, 2.0]);
        assert_eq!(report.orientation.unwrap().height_axis, DVec3::Z);
    }

    #[test]
    fn test_decode_minimal_roughness_report() {
        let report = RoughnessReport::from_json_str(
            r#"{
                "mesh": {"vertices": [], "faces": []},
                "roughness": {"indices": [], "values": [], "min": 0, "max": 0}
            }"#,
        )
        .unwrap();
        assert!(report.material.is_none());
        assert!(report.orientation.is_none());
    }

    #[test]
    fn test_roughness_view() {
        let report = RoughnessReport::from_json_str(ROUGHNESS_JSON).unwrap();
        let view = report.view(&Options::default()).unwrap();
        assert_eq!(view.title, "Surface Roughness");
        assert_eq!(
            view.scene.colors,
            vec![
                DVec3::new(0.0, 0.0, 1.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
            ]
        );
        assert!(view.scene.orientation.is_some());
        assert_eq!(view.legend.ticks(), [-2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_physics_views() {
        let report = PhysicsReport::from_json_str(PHYSICS_JSON).unwrap();
        let views = report.views(&Options::default()).unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].title, "Pressure");
        assert_eq!(views[0].scene.positions[0], DVec3::Z);
        assert!((views[0].scene.colors[0] - DVec3::X).length() < 1e-9);
        assert_eq!(views[0].legend.max, 1.0);
        assert_eq!(views[1].title, "Thermal");
        assert!(views[1].scene.colors.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_physics_shape_mismatch() {
        let json = PHYSICS_JSON.replace("[[0,0,1],[0,0,0],[0,0,0.5]]", "[[0,0,1]]");
        let report = PhysicsReport::from_json_str(&json).unwrap();
        assert!(matches!(
            report.views(&Options::default()),
            Err(FieldscopeError::ShapeMismatch {
                expected: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_bad_face_index_is_rejected() {
        let json = ROUGHNESS_JSON.replace("[[0,1,2]]", "[[0,1,9]]");
        let report = RoughnessReport::from_json_str(&json).unwrap();
        assert!(matches!(
            report.view(&Options::default()),
            Err(FieldscopeError::FaceIndexOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn test_build_all_views() {
        let roughness = RoughnessReport::from_json_str(ROUGHNESS_JSON).unwrap();
        let physics = PhysicsReport::from_json_str(PHYSICS_JSON).unwrap();
        let views = AnalysisViews::build(Some(&roughness), Some(&physics), &Options::default())
            .unwrap();
        assert_eq!(views.views.len(), 3);
        assert!(views.get("Thermal").is_some());

        let only_physics = AnalysisViews::build(None, Some(&physics), &Options::default()).unwrap();
        assert_eq!(only_physics.views.len(), 2);
        assert!(only_physics.get("Surface Roughness").is_none());
    }

    #[test]
    fn test_metrics_formatting() {
        let metrics = RoughnessMetrics {
            sa: 1.5e-6,
            sq: 2e-6,
            sz: 8e-6,
        };
        let formatted = metrics.formatted(LengthUnit::Micrometers);
        assert_eq!(formatted[0], ("Sa", "1.500 µm".to_string()));
        assert_eq!(formatted[2], ("Sz", "8.000 µm".to_string()));
        assert_eq!(metrics.formatted(LengthUnit::Meters)[1].1, "2.000e-6 m");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            PhysicsReport::from_json_str("{"),
            Err(FieldscopeError::Json(_))
        ));
    }
}
