//! Color map system.
//!
//! Two analytic maps drive the mesh colors:
//! - [`iso_diverging`] for signed scalar fields (valleys blue to cyan,
//!   peaks yellow to red)
//! - [`magnitude_heatmap`] for displacement magnitudes (an HSL hue sweep
//!   from blue to red)
//!
//! [`ColorMap`] holds sampled gradients used to draw legends.

use std::collections::HashMap;

use fieldscope_core::Color;
use glam::DVec3;

/// Hue of the heatmap at zero magnitude (blue).
pub const HEATMAP_HUE_LOW: f64 = 0.66;
/// Hue of the heatmap at full magnitude (red).
pub const HEATMAP_HUE_HIGH: f64 = 0.0;

/// ISO-style diverging color for a value already normalized by the field's
/// largest absolute bound.
///
/// Negative `t` maps to `(0, 1 - |t|, 1)`, non-negative `t` to
/// `(1, 1 - t, 0)`. Zero is therefore pure yellow, not white. The green
/// channel is clamped so out-of-range values saturate instead of leaving
/// `[0, 1]`.
pub fn iso_diverging(t: f64) -> Color {
    if t < 0.0 {
        DVec3::new(0.0, (1.0 - t.abs()).clamp(0.0, 1.0), 1.0)
    } else {
        DVec3::new(1.0, (1.0 - t).clamp(0.0, 1.0), 0.0)
    }
}

/// Diverging color for `value` in a field whose range is `min..max`.
///
/// The range is made symmetric around zero using `max(|min|, |max|)`,
/// floored to `epsilon`.
pub fn normalized_diverging(value: f64, min: f64, max: f64, epsilon: f64) -> Color {
    let max_abs = min.abs().max(max.abs()).max(epsilon);
    iso_diverging(value / max_abs)
}

/// Converts HSL (all components in `[0, 1]`) to RGB.
///
/// Hue wraps, so `1.0` is the same as `0.0`.
#[allow(clippy::many_single_char_names)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    let h = h.rem_euclid(1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h6 = h * 6.0;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h6 < 1.0 {
        (c, x, 0.0)
    } else if h6 < 2.0 {
        (x, c, 0.0)
    } else if h6 < 3.0 {
        (0.0, c, x)
    } else if h6 < 4.0 {
        (0.0, x, c)
    } else if h6 < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    DVec3::new(r + m, g + m, b + m)
}

/// Heatmap color for a magnitude ratio `t` (clamped to `[0, 1]`, NaN
/// treated as `0`).
///
/// The hue moves linearly from [`HEATMAP_HUE_LOW`] to [`HEATMAP_HUE_HIGH`]
/// at full saturation and half lightness.
pub fn magnitude_heatmap(t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let hue = HEATMAP_HUE_LOW + (HEATMAP_HUE_HIGH - HEATMAP_HUE_LOW) * t;
    hsl_to_rgb(hue, 1.0, 0.5)
}

/// Parses a `#rrggbb` hex color.
pub fn color_from_hex(hex: u32) -> Color {
    let r = f64::from((hex >> 16) & 0xff);
    let g = f64::from((hex >> 8) & 0xff);
    let b = f64::from(hex & 0xff);
    DVec3::new(r, g, b) / 255.0
}

/// A sampled gradient, evenly spaced from 0 to 1.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Color>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Samples the color map at a given value (0 to 1).
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        if self.colors.is_empty() {
            return DVec3::ZERO;
        }

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let n = self.colors.len() - 1;
        let idx = (t * n as f64).floor() as usize;
        let idx = idx.min(n - 1);
        let frac = t * n as f64 - idx as f64;

        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }

    /// Returns the stops as `(offset, color)` pairs.
    #[allow(clippy::cast_precision_loss)]
    pub fn stops(&self) -> Vec<(f64, Color)> {
        let n = self.colors.len().saturating_sub(1).max(1) as f64;
        self.colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64 / n, c))
            .collect()
    }
}

/// Registry for legend gradients.
#[derive(Debug, Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Name of the legend gradient for signed scalar fields.
    pub const DIVERGING: &'static str = "diverging";
    /// Name of the legend gradient for displacement magnitudes.
    pub const SPECTRAL: &'static str = "spectral";

    /// Creates a new color map registry with default color maps.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // The legend keeps a white midpoint even though the surface map puts
        // yellow at zero.
        self.register(ColorMap::new(
            Self::DIVERGING,
            vec![
                color_from_hex(0x0000ff),
                color_from_hex(0x00ffff),
                color_from_hex(0xffffff),
                color_from_hex(0xffff00),
                color_from_hex(0xff0000),
            ],
        ));

        // blue, cyan, lime, yellow, red
        self.register(ColorMap::new(
            Self::SPECTRAL,
            vec![
                color_from_hex(0x0000ff),
                color_from_hex(0x00ffff),
                color_from_hex(0x00ff00),
                color_from_hex(0xffff00),
                color_from_hex(0xff0000),
            ],
        ));
    }

    /// Registers a color map.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.clone(), color_map);
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Gets a color map by name, falling back to the spectral gradient.
    pub fn get_or_spectral(&self, name: &str) -> Option<&ColorMap> {
        self.get(name).or_else(|| self.get(Self::SPECTRAL))
    }
}
