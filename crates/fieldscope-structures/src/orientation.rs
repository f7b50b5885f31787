//! Overlay helpers: the detected height axis and the world axes.

use fieldscope_core::{Color, Orientation, OverlayOptions};
use glam::DVec3;

/// An arrow drawn from the mesh center along the detected height axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationRay {
    /// Arrow origin (the mesh center).
    pub origin: DVec3,
    /// Unit direction.
    pub direction: DVec3,
    /// Arrow length.
    pub length: f64,
    /// Arrow color.
    pub color: Color,
}

impl OrientationRay {
    /// Builds the ray for an optional axis vector.
    ///
    /// Returns `None` when the vector is absent, zero, or not finite; a
    /// missing hint is not an error.
    pub fn new(
        axis: Option<DVec3>,
        center: DVec3,
        max_dim: f64,
        options: &OverlayOptions,
    ) -> Option<Self> {
        let Some(direction) = axis?.try_normalize() else {
            log::debug!("orientation axis is zero or not finite; skipping indicator");
            return None;
        };
        Some(Self {
            origin: center,
            direction,
            length: options.orientation_length_factor * max_dim,
            color: options.orientation_color,
        })
    }

    /// Builds the ray from the backend's orientation hint.
    pub fn from_hint(
        hint: Option<&Orientation>,
        center: DVec3,
        max_dim: f64,
        options: &OverlayOptions,
    ) -> Option<Self> {
        Self::new(hint.map(|o| o.height_axis), center, max_dim, options)
    }

    /// Returns the arrow tip.
    pub fn tip(&self) -> DVec3 {
        self.origin + self.direction * self.length
    }
}

/// World-axes reference drawn at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesHelper {
    /// Length of each axis line.
    pub length: f64,
}

impl AxesHelper {
    /// Sizes the axes relative to the largest scene dimension.
    pub fn new(max_dim: f64, options: &OverlayOptions) -> Self {
        Self {
            length: options.axes_length_factor * max_dim,
        }
    }

    /// Axis line endpoints, X then Y then Z, each paired with its color.
    pub fn lines(&self) -> [(DVec3, DVec3, Color); 3] {
        [DVec3::X, DVec3::Y, DVec3::Z].map(|axis| (DVec3::ZERO, axis * self.length, axis))
    }
}
