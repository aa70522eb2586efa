//! Geometry primitives: points and index-based shape topology

use nalgebra::Point3;

use crate::error::{Error, Result};

/// An immutable 3D coordinate in model space.
///
/// Every transform in this crate returns a new point instead of mutating one.
pub type Point3D = Point3<f64>;

/// A line segment between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    /// Both endpoint indices, in declaration order
    pub fn indices(&self) -> [usize; 2] {
        [self.0, self.1]
    }
}

/// A closed planar polygon given as vertex indices in winding order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<const N: usize> From<[usize; N]> for Face {
    fn from(indices: [usize; N]) -> Self {
        Self::new(indices.to_vec())
    }
}

/// Vertices, edges and faces of a polyhedron.
///
/// Edges and faces refer to vertices by their position in `vertices`.
/// The only way to build one is [`Topology::new`], which checks that every
/// index is in range, so a value of this type is always safe to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    vertices: Vec<Point3D>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Topology {
    pub fn new(vertices: Vec<Point3D>, edges: Vec<Edge>, faces: Vec<Face>) -> Result<Self> {
        let len = vertices.len();

        for (i, edge) in edges.iter().enumerate() {
            for index in edge.indices() {
                if index >= len {
                    return Err(Error::IndexOutOfBounds { index, len });
                }
            }
            if edge.0 == edge.1 {
                return Err(Error::DegenerateEdge { edge: i });
            }
        }

        for (i, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(Error::DegenerateFace {
                    face: i,
                    len: face.len(),
                });
            }
            if let Some(&index) = face.indices().iter().find(|&&index| index >= len) {
                return Err(Error::IndexOutOfBounds { index, len });
            }
        }

        Ok(Self {
            vertices,
            edges,
            faces,
        })
    }

    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point3D> {
        vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_valid_topology() {
        let topology = Topology::new(
            triangle(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)],
            vec![Face::from([0, 1, 2])],
        )
        .unwrap();

        assert_eq!(topology.vertex_count(), 3);
        assert_eq!(topology.edge_count(), 3);
        assert_eq!(topology.face_count(), 1);
    }

    #[test]
    fn test_edge_index_out_of_bounds() {
        let err = Topology::new(triangle(), vec![Edge(0, 3)], vec![]).unwrap_err();
        assert_eq!(err, Error::IndexOutOfBounds { index: 3, len: 3 });
    }

    #[test]
    fn test_face_index_out_of_bounds() {
        let err = Topology::new(triangle(), vec![], vec![Face::from([0, 1, 7])]).unwrap_err();
        assert_eq!(err, Error::IndexOutOfBounds { index: 7, len: 3 });
    }

    #[test]
    fn test_short_face_rejected() {
        let err = Topology::new(triangle(), vec![], vec![Face::from([0, 1])]).unwrap_err();
        assert_eq!(err, Error::DegenerateFace { face: 0, len: 2 });
    }

    #[test]
    fn test_self_loop_edge_rejected() {
        let err = Topology::new(triangle(), vec![Edge(0, 1), Edge(2, 2)], vec![]).unwrap_err();
        assert_eq!(err, Error::DegenerateEdge { edge: 1 });
    }
}
