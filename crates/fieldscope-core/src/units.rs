//! Display units for length-valued fields.
//!
//! Backends report lengths in meters. Roughness residuals and solver
//! displacements are tiny in meters, so the viewer can switch to
//! micrometers; only legend and metric labels change, never the mapping.

use serde::{Deserialize, Serialize};

/// Unit used to display length values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Meters, the unit the backends report in.
    #[default]
    Meters,
    /// Micrometers.
    Micrometers,
}

impl LengthUnit {
    /// Multiplier from meters to this unit.
    #[must_use]
    pub fn scale(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Micrometers => 1e6,
        }
    }

    /// Short symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Micrometers => "µm",
        }
    }

    /// Converts a value in meters to this unit.
    #[must_use]
    pub fn from_meters(self, meters: f64) -> f64 {
        meters * self.scale()
    }

    /// Formats a metric value given in meters.
    ///
    /// Meters use scientific notation since values are typically far below
    /// one; micrometers use three decimals.
    #[must_use]
    pub fn format_metric(self, meters: f64) -> String {
        match self {
            LengthUnit::Meters => format!("{meters:.3e}"),
            LengthUnit::Micrometers => format!("{:.3}", self.from_meters(meters)),
        }
    }
}

/// Formats a legend tick value that is already in display units.
///
/// Non-zero values smaller than `1e-3` in magnitude switch to scientific
/// notation so they do not print as zero.
#[must_use]
pub fn format_tick(value: f64) -> String {
    if value != 0.0 && value.abs() < 1e-3 {
        format!("{value:.2e}")
    } else {
        format!("{value:.2}")
    }
}
