//! Legend descriptors for mapped views.
//!
//! A legend pairs a gradient from the [`ColorMapRegistry`] with the value
//! range it stands for, converted to the display unit.

use fieldscope_core::{format_tick, Color, LengthUnit};
use serde::{Deserialize, Serialize};

use crate::color_maps::{ColorMap, ColorMapRegistry};

/// Describes the color bar drawn next to a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Quantity being shown, e.g. "Deviation".
    pub title: String,
    /// Name of the gradient in the color map registry.
    pub gradient: String,
    /// Unit the range is expressed in.
    pub unit: LengthUnit,
    /// Lower end of the range, in `unit`.
    pub min: f64,
    /// Upper end of the range, in `unit`.
    pub max: f64,
}

impl Legend {
    /// Legend for a signed scalar field with a range given in meters.
    pub fn diverging(title: impl Into<String>, min: f64, max: f64, unit: LengthUnit) -> Self {
        Self {
            title: title.into(),
            gradient: ColorMapRegistry::DIVERGING.to_string(),
            unit,
            min: unit.from_meters(min),
            max: unit.from_meters(max),
        }
    }

    /// Legend for a displacement magnitude from zero to `max_disp` meters.
    pub fn spectral(title: impl Into<String>, max_disp: f64, unit: LengthUnit) -> Self {
        Self {
            title: title.into(),
            gradient: ColorMapRegistry::SPECTRAL.to_string(),
            unit,
            min: 0.0,
            max: unit.from_meters(max_disp),
        }
    }

    /// Header text, e.g. `Deviation (µm)`.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.unit.symbol())
    }

    /// Tick values at the start, middle and end of the bar.
    pub fn ticks(&self) -> [f64; 3] {
        [self.min, (self.min + self.max) / 2.0, self.max]
    }

    /// Formatted tick labels.
    pub fn tick_labels(&self) -> [String; 3] {
        self.ticks().map(format_tick)
    }

    /// Looks up this legend's gradient, falling back to the spectral one.
    pub fn gradient<'a>(&self, registry: &'a ColorMapRegistry) -> Option<&'a ColorMap> {
        registry.get_or_spectral(&self.gradient)
    }

    /// Gradient stops as `(offset, color)` pairs for drawing the bar.
    pub fn stops(&self, registry: &ColorMapRegistry) -> Vec<(f64, Color)> {
        self.gradient(registry).map(ColorMap::stops).unwrap_or_default()
    }
}
