//! Configuration options for fieldscope.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::axis::AxisDirection;
use crate::error::Result;
use crate::field::Color;
use crate::units::LengthUnit;

/// Floor applied to normalization ranges and scene extents.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Smallest usable vertical field of view, in radians.
pub const MIN_FOV: f64 = 0.1;
/// Largest usable vertical field of view, in radians.
pub const MAX_FOV: f64 = std::f64::consts::PI - 0.1;

/// Global configuration for field mapping and scene framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Field-to-color mapping settings.
    pub mapping: MappingOptions,

    /// Camera auto-fit settings.
    pub camera: CameraOptions,

    /// Overlay helper settings.
    pub overlay: OverlayOptions,

    /// Constants handed to the scene composer.
    pub style: SceneStyle,

    /// Unit used for legend and metric labels.
    pub display_unit: LengthUnit,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mapping: MappingOptions::default(),
            camera: CameraOptions::default(),
            overlay: OverlayOptions::default(),
            style: SceneStyle::default(),
            display_unit: LengthUnit::Meters,
        }
    }
}

impl Options {
    /// Parses options from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Settings for the scalar and vector colormaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    /// Color for vertices the scalar field does not cover.
    pub no_data_color: Color,
    /// Floor for `max(|min|, |max|)` and `max_disp`.
    pub epsilon: f64,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            no_data_color: DVec3::splat(0.5),
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Settings for camera auto-fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in radians.
    pub fov: f64,
    /// Visual margin: the camera sits this many fit distances from the center.
    /// Values between 1.5 and 1.6 leave a comfortable border around the mesh.
    pub margin_multiplier: f64,
    /// Direction, from the center, the camera looks from.
    pub view_axis: AxisDirection,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
    /// Floor for the largest bounding-box dimension.
    pub epsilon: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov: 60f64.to_radians(),
            margin_multiplier: 1.6,
            view_axis: AxisDirection::PosZ,
            near: 0.001,
            far: 1e6,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl CameraOptions {
    /// Returns FOV in degrees.
    #[must_use]
    pub fn fov_degrees(&self) -> f64 {
        self.fov.to_degrees()
    }

    /// Sets FOV from degrees, clamped to the usable range.
    pub fn set_fov_degrees(&mut self, degrees: f64) {
        self.fov = degrees.to_radians().clamp(MIN_FOV, MAX_FOV);
    }

    /// The field of view used for fitting.
    ///
    /// Values loaded from JSON are not checked on load, so anything outside
    /// `MIN_FOV..=MAX_FOV` is clamped here and a non-finite one falls back
    /// to the default.
    #[must_use]
    pub fn effective_fov(&self) -> f64 {
        if self.fov.is_finite() {
            self.fov.clamp(MIN_FOV, MAX_FOV)
        } else {
            Self::default().fov
        }
    }
}

/// Settings for overlay helpers drawn on top of the mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    /// Orientation ray length as a fraction of the largest scene dimension.
    pub orientation_length_factor: f64,
    /// Orientation ray color.
    pub orientation_color: Color,
    /// World axes length as a fraction of the largest scene dimension.
    pub axes_length_factor: f64,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            orientation_length_factor: 0.6,
            // #800080
            orientation_color: DVec3::new(128.0 / 255.0, 0.0, 128.0 / 255.0),
            axes_length_factor: 0.4,
        }
    }
}

/// Lighting and material constants for the scene composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    /// Background color.
    pub background_color: Color,
    /// Ambient light intensity (white light).
    pub ambient_intensity: f64,
    /// Directional light intensity (white light).
    pub directional_intensity: f64,
    /// Directional light position; the light points at the origin.
    pub directional_position: DVec3,
    /// Surface material roughness.
    pub material_roughness: f64,
    /// Surface material metalness.
    pub material_metalness: f64,
    /// Whether back faces are shaded like front faces.
    pub double_sided: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            // #1e1e1e
            background_color: DVec3::splat(30.0 / 255.0),
            ambient_intensity: 0.6,
            directional_intensity: 0.8,
            directional_position: DVec3::ONE,
            material_roughness: 0.4,
            material_metalness: 0.1,
            double_sided: true,
        }
    }
}
