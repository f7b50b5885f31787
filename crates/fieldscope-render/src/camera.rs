//! Camera auto-fit.
//!
//! Frames an axis-aligned bounding box so its largest dimension fits in the
//! vertical field of view, then backs off by a configurable margin along a
//! fixed look-from axis.

use fieldscope_core::{CameraOptions, MAX_FOV, MIN_FOV};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Creates a bounding box from its corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Computes the box enclosing `points`.
    ///
    /// An empty point set yields a zero-size box at the origin.
    pub fn from_points(points: &[DVec3]) -> Self {
        let Some(&first) = points.first() else {
            return Self::new(DVec3::ZERO, DVec3::ZERO);
        };
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Self::new(min, max)
    }

    /// Returns the box center.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the extent along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the largest extent.
    pub fn max_dim(&self) -> f64 {
        self.size().max_element()
    }

    /// Returns true if every extent is zero.
    pub fn is_degenerate(&self) -> bool {
        self.size() == DVec3::ZERO
    }
}

/// Camera parameters framing a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFrame {
    /// Center of the framed box.
    pub center: DVec3,
    /// Box extent along each axis.
    pub size: DVec3,
    /// Distance at which the largest dimension exactly fills the field of view.
    pub distance: f64,
    /// Camera position, including the margin.
    pub position: DVec3,
    /// Point the camera looks at; always the center.
    pub look_at: DVec3,
    /// Vertical field of view in radians.
    pub fov: f64,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
}

impl CameraFrame {
    /// Fits a camera to `bounds`.
    ///
    /// A zero-size box (all vertices coincide) is floored to
    /// `options.epsilon` so the distance stays finite.
    pub fn fit(bounds: &BoundingBox, options: &CameraOptions) -> Self {
        let center = bounds.center();
        let size = bounds.size();
        let max_dim = size.max_element().max(options.epsilon);
        if bounds.is_degenerate() {
            log::debug!("degenerate bounding box at {center}, flooring extent to {max_dim:e}");
        }

        let fov = options.effective_fov();
        if !(MIN_FOV..=MAX_FOV).contains(&options.fov) {
            log::warn!(
                "field of view {} rad is outside the usable range, using {fov} rad",
                options.fov
            );
        }

        let distance = max_dim / (2.0 * (fov / 2.0).tan());
        let view_axis = options.view_axis.to_dvec3();
        let position = center + view_axis * (distance * options.margin_multiplier);
        log::debug!(
            "camera fitted from {} at distance {distance:e}",
            options.view_axis.name()
        );

        Self {
            center,
            size,
            distance,
            position,
            look_at: center,
            fov,
            near: options.near,
            far: options.far,
        }
    }

    /// Fits a camera to the box enclosing `points`.
    pub fn fit_points(points: &[DVec3], options: &CameraOptions) -> Self {
        Self::fit(&BoundingBox::from_points(points), options)
    }

    /// Largest box dimension used for scene scale, floored like the fit.
    pub fn max_dim(&self, epsilon: f64) -> f64 {
        self.size.max_element().max(epsilon)
    }
}
