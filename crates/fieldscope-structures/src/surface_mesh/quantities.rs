//! Surface mesh quantity implementations.
//!
//! This is the one place field values become vertex colors. Every view uses
//! these two quantities rather than deriving its own colormap math.

use fieldscope_core::{
    Color, FieldscopeError, MappedAttributes, MappingOptions, Quantity, QuantityKind, Result,
    ScalarField, VectorField,
};
use fieldscope_render::{magnitude_heatmap, normalized_diverging};
use glam::DVec3;

/// A sparse scalar quantity on mesh vertices, shown with the diverging map.
#[derive(Debug, Clone)]
pub struct VertexScalarQuantity {
    name: String,
    field: ScalarField,
    no_data_color: Color,
    epsilon: f64,
}

impl VertexScalarQuantity {
    /// Creates a new vertex scalar quantity with default mapping options.
    pub fn new(name: impl Into<String>, field: ScalarField) -> Self {
        let defaults = MappingOptions::default();
        Self {
            name: name.into(),
            field,
            no_data_color: defaults.no_data_color,
            epsilon: defaults.epsilon,
        }
    }

    /// Applies mapping options.
    #[must_use]
    pub fn with_options(mut self, options: &MappingOptions) -> Self {
        self.no_data_color = options.no_data_color;
        self.epsilon = options.epsilon;
        self
    }

    /// Returns the underlying field.
    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    /// Gets the range minimum.
    pub fn range_min(&self) -> f64 {
        self.field.min
    }

    /// Gets the range maximum.
    pub fn range_max(&self) -> f64 {
        self.field.max
    }

    /// Maps the sparse values onto a dense color buffer of `num_vertices`.
    ///
    /// Uncovered vertices keep the no-data color. Samples whose index is not
    /// a vertex, or whose value is not finite, are skipped. When an index
    /// repeats, the later sample wins.
    pub fn compute_colors(&self, num_vertices: usize) -> Vec<Color> {
        let mut colors = vec![self.no_data_color; num_vertices];

        if self.field.indices.len() != self.field.values.len() {
            log::warn!(
                "scalar quantity '{}' has {} indices but {} values; ignoring the unmatched tail",
                self.name,
                self.field.indices.len(),
                self.field.values.len()
            );
        }

        let mut skipped = 0usize;
        for (&index, &value) in self.field.indices.iter().zip(&self.field.values) {
            if index >= num_vertices || !value.is_finite() {
                skipped += 1;
                continue;
            }
            colors[index] =
                normalized_diverging(value, self.field.min, self.field.max, self.epsilon);
        }

        if skipped > 0 {
            log::debug!(
                "scalar quantity '{}': skipped {skipped} samples outside {num_vertices} vertices \
                 or non-finite",
                self.name
            );
        }

        colors
    }
}

impl Quantity for VertexScalarQuantity {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> QuantityKind {
        QuantityKind::Scalar
    }

    fn data_size(&self) -> usize {
        self.field.indices.len().min(self.field.values.len())
    }

    fn map_onto(&self, positions: &[DVec3]) -> Result<MappedAttributes> {
        Ok(MappedAttributes {
            positions: positions.to_vec(),
            colors: self.compute_colors(positions.len()),
        })
    }
}

/// A dense displacement quantity on mesh vertices, shown with the heatmap.
///
/// Displacements are applied as given. Any visual exaggeration must already
/// be baked into the values upstream.
#[derive(Debug, Clone)]
pub struct VertexDisplacementQuantity {
    name: String,
    field: VectorField,
    no_data_color: Color,
    epsilon: f64,
}

impl VertexDisplacementQuantity {
    /// Creates a new displacement quantity with default mapping options.
    pub fn new(name: impl Into<String>, field: VectorField) -> Self {
        let defaults = MappingOptions::default();
        Self {
            name: name.into(),
            field,
            no_data_color: defaults.no_data_color,
            epsilon: defaults.epsilon,
        }
    }

    /// Applies mapping options.
    #[must_use]
    pub fn with_options(mut self, options: &MappingOptions) -> Self {
        self.no_data_color = options.no_data_color;
        self.epsilon = options.epsilon;
        self
    }

    /// Returns the underlying field.
    pub fn field(&self) -> &VectorField {
        &self.field
    }

    /// Returns the displacement vectors.
    pub fn vectors(&self) -> &[DVec3] {
        &self.field.displacement
    }

    /// Returns the Euclidean length of every displacement.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.field.displacement.iter().map(|d| d.length()).collect()
    }

    /// Normalized magnitude in `[0, 1]` for one displacement.
    ///
    /// An infinite displacement saturates at `1.0`; a NaN one reads as `0.0`.
    pub fn normalized_magnitude(&self, displacement: DVec3) -> f64 {
        let ratio = displacement.length() / self.field.max_disp.max(self.epsilon);
        if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        }
    }

    /// Displaces `positions` and colors each vertex by its magnitude.
    ///
    /// A vertex whose displacement is not finite stays at rest in the
    /// no-data color. Fails with [`FieldscopeError::ShapeMismatch`] unless
    /// there is exactly one displacement per position.
    pub fn compute_displaced(&self, positions: &[DVec3]) -> Result<MappedAttributes> {
        let displacement = &self.field.displacement;
        if displacement.len() != positions.len() {
            return Err(FieldscopeError::ShapeMismatch {
                expected: positions.len(),
                actual: displacement.len(),
            });
        }

        let mut skipped = 0usize;
        let (positions, colors) = positions
            .iter()
            .zip(displacement)
            .map(|(&p, &d)| {
                if d.is_finite() {
                    (p + d, magnitude_heatmap(self.normalized_magnitude(d)))
                } else {
                    skipped += 1;
                    (p, self.no_data_color)
                }
            })
            .unzip();

        if skipped > 0 {
            log::debug!(
                "displacement quantity '{}': left {skipped} vertices with non-finite \
                 displacement at rest",
                self.name
            );
        }

        Ok(MappedAttributes { positions, colors })
    }
}

impl Quantity for VertexDisplacementQuantity {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> QuantityKind {
        QuantityKind::Vector
    }

    fn data_size(&self) -> usize {
        self.field.displacement.len()
    }

    fn map_onto(&self, positions: &[DVec3]) -> Result<MappedAttributes> {
        self.compute_displaced(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GRAY: DVec3 = DVec3::splat(0.5);

    fn assert_color_near(actual: Color, expected: Color) {
        assert!(
            (actual - expected).abs().max_element() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_empty_scalar_field_is_all_gray() {
        let q = VertexScalarQuantity::new("empty", ScalarField::new(vec![], vec![], -1.0, 1.0));
        assert_eq!(q.compute_colors(4), vec![GRAY; 4]);
        assert!(q.compute_colors(0).is_empty());
    }

    #[test]
    fn test_scalar_scenario() {
        let q = VertexScalarQuantity::new(
            "deviation",
            ScalarField::new(vec![0, 1, 2], vec![-2.0, 0.0, 2.0], -2.0, 2.0),
        );
        assert_eq!(
            q.compute_colors(3),
            vec![
                DVec3::new(0.0, 0.0, 1.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_scalar_out_of_range_index_is_skipped() {
        let q = VertexScalarQuantity::new(
            "stale",
            ScalarField::new(vec![1, 7], vec![1.0, -1.0], -1.0, 1.0),
        );
        let colors = q.compute_colors(3);
        assert_eq!(colors, vec![GRAY, DVec3::new(1.0, 0.0, 0.0), GRAY]);
    }

    #[test]
    fn test_scalar_partial_coverage() {
        let q = VertexScalarQuantity::new("top", ScalarField::new(vec![2], vec![-0.5], -1.0, 1.0));
        let colors = q.compute_colors(3);
        assert_eq!(colors[0], GRAY);
        assert_eq!(colors[1], GRAY);
        assert_color_near(colors[2], DVec3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_scalar_duplicate_index_last_wins() {
        let q = VertexScalarQuantity::new(
            "dup",
            ScalarField::new(vec![0, 0], vec![1.0, -1.0], -1.0, 1.0),
        );
        assert_eq!(q.compute_colors(1), vec![DVec3::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_scalar_value_beyond_range_saturates() {
        let q = VertexScalarQuantity::new(
            "outlier",
            ScalarField::new(vec![0, 1], vec![5.0, -5.0], -1.0, 1.0),
        );
        assert_eq!(
            q.compute_colors(2),
            vec![DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 1.0)]
        );
    }

    #[test]
    fn test_scalar_zero_range_does_not_divide_by_zero() {
        let q = VertexScalarQuantity::new("flat", ScalarField::new(vec![0], vec![0.0], 0.0, 0.0));
        assert_eq!(q.compute_colors(1), vec![DVec3::new(1.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_scalar_mismatched_lengths_zip() {
        let q = VertexScalarQuantity::new(
            "ragged",
            ScalarField::new(vec![0, 1, 2], vec![1.0], -1.0, 1.0),
        );
        assert_eq!(q.data_size(), 1);
        assert_eq!(q.compute_colors(3), vec![DVec3::new(1.0, 0.0, 0.0), GRAY, GRAY]);
    }

    #[test]
    fn test_scalar_non_finite_value_stays_gray() {
        let q = VertexScalarQuantity::new(
            "nan",
            ScalarField::new(vec![0], vec![f64::NAN], -1.0, 1.0),
        );
        assert_eq!(q.compute_colors(1), vec![GRAY]);
    }

    #[test]
    fn test_scalar_custom_no_data_color() {
        let options = MappingOptions {
            no_data_color: DVec3::ZERO,
            ..MappingOptions::default()
        };
        let q = VertexScalarQuantity::new("x", ScalarField::default()).with_options(&options);
        assert_eq!(q.compute_colors(2), vec![DVec3::ZERO; 2]);
    }

    #[test]
    fn test_scalar_map_onto_keeps_positions() {
        let q = VertexScalarQuantity::new("x", ScalarField::default());
        let positions = [DVec3::X, DVec3::Y];
        let mapped = q.map_onto(&positions).unwrap();
        assert_eq!(mapped.positions, positions);
        assert_eq!(mapped.len(), 2);
        assert_eq!(q.kind(), QuantityKind::Scalar);
    }

    #[test]
    fn test_displacement_full_magnitude_is_red() {
        let q = VertexDisplacementQuantity::new(
            "pressure",
            VectorField::new(vec![DVec3::Z], 1.0),
        );
        let mapped = q.compute_displaced(&[DVec3::ZERO]).unwrap();
        assert_eq!(mapped.positions, vec![DVec3::Z]);
        assert_color_near(mapped.colors[0], DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_displacement_zero_magnitude_is_blue() {
        let q = VertexDisplacementQuantity::new(
            "pressure",
            VectorField::new(vec![DVec3::ZERO], 1.0),
        );
        let mapped = q.compute_displaced(&[DVec3::X]).unwrap();
        assert_eq!(mapped.positions, vec![DVec3::X]);
        let c = mapped.colors[0];
        assert!(c.x.abs() < 1e-9);
        assert!(c.y < 0.05);
        assert!((c.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_displacement_shape_mismatch() {
        let q = VertexDisplacementQuantity::new(
            "thermal",
            VectorField::new(vec![DVec3::Z; 2], 1.0),
        );
        let err = q.compute_displaced(&[DVec3::ZERO; 3]).unwrap_err();
        assert!(matches!(
            err,
            FieldscopeError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert!(q.compute_displaced(&[DVec3::ZERO; 2]).is_ok());
    }

    #[test]
    fn test_displacement_magnitude_clamps_above_max() {
        let q = VertexDisplacementQuantity::new(
            "thermal",
            VectorField::new(vec![DVec3::new(3.0, 4.0, 0.0)], 1.0),
        );
        assert_eq!(q.magnitudes(), vec![5.0]);
        assert_eq!(q.normalized_magnitude(DVec3::new(3.0, 4.0, 0.0)), 1.0);
    }

    #[test]
    fn test_displacement_zero_max_disp_is_finite() {
        let q = VertexDisplacementQuantity::new(
            "still",
            VectorField::new(vec![DVec3::ZERO], 0.0),
        );
        let mapped = q.compute_displaced(&[DVec3::ZERO]).unwrap();
        assert!(mapped.colors[0].is_finite());
        assert_eq!(q.kind(), QuantityKind::Vector);
        assert_eq!(q.data_size(), 1);
    }

    #[test]
    fn test_displacement_non_finite_color_in_range() {
        let q = VertexDisplacementQuantity::new(
            "broken",
            VectorField::new(
                vec![
                    DVec3::new(f64::NAN, 0.0, 0.0),
                    DVec3::ZERO,
                    DVec3::new(0.0, f64::INFINITY, 0.0),
                ],
                1.0,
            ),
        );
        let positions = [DVec3::X, DVec3::Y, DVec3::Z];
        let mapped = q.compute_displaced(&positions).unwrap();

        assert!(mapped.colors.iter().all(|c| c.is_finite()));
        assert!(mapped
            .colors
            .iter()
            .all(|c| c.min_element() >= 0.0 && c.max_element() <= 1.0));
        assert_eq!(mapped.colors[0], GRAY);
        assert_eq!(mapped.colors[2], GRAY);
        assert_eq!(mapped.positions, positions);
    }

    #[test]
    fn test_displacement_non_finite_uses_no_data_color() {
        let options = MappingOptions {
            no_data_color: DVec3::ZERO,
            ..MappingOptions::default()
        };
        let q = VertexDisplacementQuantity::new(
            "broken",
            VectorField::new(vec![DVec3::splat(f64::NAN)], 1.0),
        )
        .with_options(&options);
        let mapped = q.compute_displaced(&[DVec3::ONE]).unwrap();
        assert_eq!(mapped.colors, vec![DVec3::ZERO]);
        assert_eq!(mapped.positions, vec![DVec3::ONE]);
    }

    #[test]
    fn test_normalized_magnitude_non_finite() {
        let q = VertexDisplacementQuantity::new("x", VectorField::new(vec![], 1.0));
        assert_eq!(q.normalized_magnitude(DVec3::new(f64::NAN, 0.0, 0.0)), 0.0);
        assert_eq!(q.normalized_magnitude(DVec3::new(f64::INFINITY, 0.0, 0.0)), 1.0);
    }

    proptest! {
        #[test]
        fn prop_displacement_is_applied_exactly(
            raw in proptest::collection::vec(
                (
                    (-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3),
                    (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0),
                ),
                0..32,
            ),
            max_disp in 0.0f64..2.0,
        ) {
            let positions: Vec<DVec3> =
                raw.iter().map(|&((x, y, z), _)| DVec3::new(x, y, z)).collect();
            let displacement: Vec<DVec3> =
                raw.iter().map(|&(_, (x, y, z))| DVec3::new(x, y, z)).collect();
            let field = VectorField::new(displacement.clone(), max_disp);
            let q = VertexDisplacementQuantity::new("p", field);
            let mapped = q.compute_displaced(&positions).unwrap();

            prop_assert_eq!(mapped.positions.len(), positions.len());
            for i in 0..positions.len() {
                prop_assert_eq!(mapped.positions[i], positions[i] + displacement[i]);
                prop_assert!(mapped.colors[i].min_element() >= -1e-12);
                prop_assert!(mapped.colors[i].max_element() <= 1.0 + 1e-12);
            }
        }

        #[test]
        fn prop_scalar_output_is_dense(
            n in 0usize..64,
            samples in proptest::collection::vec((0usize..128, -10.0f64..10.0), 0..64),
        ) {
            let (indices, values): (Vec<usize>, Vec<f64>) = samples.into_iter().unzip();
            let field = ScalarField::new(indices.clone(), values, -10.0, 10.0);
            let q = VertexScalarQuantity::new("s", field);
            let colors = q.compute_colors(n);
            prop_assert_eq!(colors.len(), n);
            for (i, c) in colors.iter().enumerate() {
                if !indices.contains(&i) {
                    prop_assert_eq!(*c, GRAY);
                }
            }
        }
    }
}
