/// Scene model: a shape with a color, an orientation, and per-vertex offsets
use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};
use crate::rotation::{Orientation, Rotation};
use crate::shape::Shape;

/// 8-bit RGB color triple, as stored in model files.
pub type Rgb = [u8; 3];

/// One renderable model. The shape is read-only after construction; the
/// orientation and the modification offsets are exclusively owned mutable
/// state, changed only through the methods below.
#[derive(Debug, Clone)]
pub struct SceneModel {
    shape: Shape,
    color: Rgb,
    orientation: Orientation,
    offsets: Vec<Vector3<f64>>,
}

impl SceneModel {
    pub fn new(shape: Shape, color: Rgb) -> Self {
        let offsets = vec![Vector3::zeros(); shape.vertex_count()];
        Self {
            shape,
            color,
            orientation: Orientation::zero(),
            offsets,
        }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Advance the orientation by a delta in degrees.
    pub fn rotate(&mut self, delta: Orientation) {
        self.orientation.advance(delta);
    }

    /// Reset the orientation to zero.
    pub fn revert_rotation(&mut self) {
        self.orientation = Orientation::zero();
    }

    /// Set the modification offset for one vertex. `None` leaves the stored
    /// offset unchanged, so callers can address a sparse subset of vertices.
    pub fn set_offset(&mut self, index: usize, offset: Option<Vector3<f64>>) -> Result<()> {
        if index >= self.offsets.len() {
            return Err(Error::VertexOutOfRange {
                index,
                len: self.offsets.len(),
            });
        }
        if let Some(offset) = offset {
            self.offsets[index] = offset;
        }
        Ok(())
    }

    /// Set offsets for every vertex at once, with the same skip-on-`None`
    /// semantics as [`set_offset`](Self::set_offset). Fails without applying
    /// anything if the slice length does not match the vertex count.
    pub fn set_offsets(&mut self, offsets: &[Option<Vector3<f64>>]) -> Result<()> {
        if offsets.len() != self.offsets.len() {
            return Err(Error::OffsetLengthMismatch {
                expected: self.offsets.len(),
                actual: offsets.len(),
            });
        }
        for (stored, offset) in self.offsets.iter_mut().zip(offsets) {
            if let Some(offset) = offset {
                *stored = *offset;
            }
        }
        Ok(())
    }

    /// Reset every per-vertex offset to the zero vector.
    pub fn revert_shape(&mut self) {
        for offset in &mut self.offsets {
            *offset = Vector3::zeros();
        }
    }

    /// Rotate the offset-adjusted vertices by the current orientation and
    /// return them alongside the unchanged edge list. Pure read: vertex
    /// count and edge indices are preserved.
    pub fn project(&self) -> (Vec<Point3<f64>>, &[[usize; 2]]) {
        let effective: Vec<Point3<f64>> = self
            .shape
            .vertices()
            .iter()
            .zip(&self.offsets)
            .map(|(vertex, offset)| vertex + offset)
            .collect();

        let matrix = Rotation::matrix(&self.orientation);
        (Rotation::apply(&matrix, &effective), self.shape.edges())
    }
}
