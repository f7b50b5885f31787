//! Axis directions used for camera placement.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A signed world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisDirection {
    /// Positive X axis.
    PosX,
    /// Negative X axis.
    NegX,
    /// Positive Y axis.
    PosY,
    /// Negative Y axis.
    NegY,
    /// Positive Z axis (default look-from direction).
    #[default]
    PosZ,
    /// Negative Z axis.
    NegZ,
}

impl AxisDirection {
    /// Returns the unit vector for this direction.
    #[must_use]
    pub fn to_dvec3(self) -> DVec3 {
        match self {
            AxisDirection::PosX => DVec3::X,
            AxisDirection::NegX => DVec3::NEG_X,
            AxisDirection::PosY => DVec3::Y,
            AxisDirection::NegY => DVec3::NEG_Y,
            AxisDirection::PosZ => DVec3::Z,
            AxisDirection::NegZ => DVec3::NEG_Z,
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AxisDirection::PosX => "+X",
            AxisDirection::NegX => "-X",
            AxisDirection::PosY => "+Y",
            AxisDirection::NegY => "-Y",
            AxisDirection::PosZ => "+Z",
            AxisDirection::NegZ => "-Z",
        }
    }
}
