/// Wireframe geometry: vertices plus index-pair edges
use nalgebra::Point3;

use crate::error::{Error, Result};

/// A wireframe shape. Vertices are fixed at load time and their indices are
/// stable identifiers; edges reference them as unordered pairs and are never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: Vec<Point3<f64>>,
    edges: Vec<[usize; 2]>,
}

impl Shape {
    /// Build a shape, rejecting any edge whose endpoints fall outside the
    /// vertex list.
    pub fn new(vertices: Vec<Point3<f64>>, edges: Vec<[usize; 2]>) -> Result<Self> {
        for &[a, b] in &edges {
            if a >= vertices.len() || b >= vertices.len() {
                return Err(Error::InvalidEdge {
                    a,
                    b,
                    len: vertices.len(),
                });
            }
        }
        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// An axis-aligned cube centered on the origin: 8 vertices, 12 edges.
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let mut vertices = Vec::with_capacity(8);
        for &x in &[-half, half] {
            for &y in &[-half, half] {
                for &z in &[-half, half] {
                    vertices.push(Point3::new(x, y, z));
                }
            }
        }

        // Vertex i encodes its corner in bits (x=4, y=2, z=1); two corners
        // share an edge when they differ in exactly one bit.
        let mut edges = Vec::with_capacity(12);
        for i in 0..8usize {
            for bit in [1, 2, 4] {
                let j = i ^ bit;
                if i < j {
                    edges.push([i, j]);
                }
            }
        }

        Self { vertices, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = Shape::cube(2.0);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edges().len(), 12);
        for vertex in cube.vertices() {
            assert_eq!(vertex.x.abs(), 1.0);
            assert_eq!(vertex.y.abs(), 1.0);
            assert_eq!(vertex.z.abs(), 1.0);
        }
    }

    #[test]
    fn test_cube_edges_are_unit_cells() {
        let cube = Shape::cube(2.0);
        for &[a, b] in cube.edges() {
            let d = cube.vertices()[a] - cube.vertices()[b];
            // Every cube edge spans exactly one axis.
            assert_eq!(d.norm(), 2.0);
        }
    }

    #[test]
    fn test_rejects_out_of_range_edge() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let result = Shape::new(vertices, vec![[0, 2]]);
        assert!(matches!(
            result,
            Err(Error::InvalidEdge { a: 0, b: 2, len: 2 })
        ));
    }

    #[test]
    fn test_empty_edge_list_is_valid() {
        let shape = Shape::new(vec![Point3::new(0.0, 1.0, 2.0)], Vec::new()).unwrap();
        assert_eq!(shape.vertex_count(), 1);
        assert!(shape.edges().is_empty());
    }
}
