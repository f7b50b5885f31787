//! Quantity trait and related types.
//!
//! A [`Quantity`] is analysis data attached to a mesh that can be mapped to
//! per-vertex render attributes.

use glam::DVec3;

use crate::error::Result;
use crate::field::Color;

/// The kind of quantity (for categorization and legends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    /// Signed scalar values shown with the diverging colormap.
    Scalar,
    /// Displacement vectors shown with the magnitude heatmap.
    Vector,
}

/// Dense render attributes produced by mapping a quantity onto a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedAttributes {
    /// Vertex positions: the base positions, or displaced ones.
    pub positions: Vec<DVec3>,
    /// One color per vertex.
    pub colors: Vec<Color>,
}

impl MappedAttributes {
    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Analysis data that maps onto mesh vertices.
///
/// Implementations are pure: mapping the same quantity onto the same
/// positions always yields the same attributes.
pub trait Quantity {
    /// Returns the name of this quantity.
    fn name(&self) -> &str;

    /// Returns the kind of this quantity.
    fn kind(&self) -> QuantityKind;

    /// Returns the number of data elements.
    fn data_size(&self) -> usize;

    /// Maps this quantity onto the given base vertex positions.
    ///
    /// Fails only when dense data disagrees with the vertex count.
    fn map_onto(&self, positions: &[DVec3]) -> Result<MappedAttributes>;
}
