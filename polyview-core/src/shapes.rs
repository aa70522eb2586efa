//! Procedural topology for the built-in shapes
//!
//! Each [`ShapeKind`] has one builder. All coordinates sit in a small model
//! space centred near the origin, so every generated `|z|` stays well inside
//! the camera distance used by [`crate::projection::project`].

use std::fmt;
use std::str::FromStr;

use log::trace;
use nalgebra::Vector3;

use crate::error::{Error, Result};
use crate::geometry::{Edge, Face, Point3D, Topology};

/// Number of sides of the built-in prism.
pub const PRISM_SIDES: usize = 6;

/// Half-extents of the rectangular box along x, y and z.
pub const BOX_HALF_EXTENTS: [f64; 3] = [1.0, 0.5, 1.5];

/// The closed set of shapes the viewer can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Pyramid,
    Cube,
    Box,
    Prism,
}

impl ShapeKind {
    /// Every kind, in declaration order
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Pyramid,
        ShapeKind::Cube,
        ShapeKind::Box,
        ShapeKind::Prism,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Cube => "cube",
            ShapeKind::Box => "box",
            ShapeKind::Prism => "prism",
        }
    }

    /// Generate this shape's topology. Same as [`build`].
    pub fn build(self) -> Result<Topology> {
        build(self)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

impl TryFrom<u8> for ShapeKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        ShapeKind::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::UnknownShape(value.to_string()))
    }
}

/// Generate vertices, edges and faces for `kind`.
///
/// Deterministic and side-effect free; returns `Ok` for every kind.
pub fn build(kind: ShapeKind) -> Result<Topology> {
    let topology = match kind {
        ShapeKind::Pyramid => pyramid(),
        ShapeKind::Cube => cuboid(Vector3::new(1.0, 1.0, 1.0)),
        ShapeKind::Box => {
            let [x, y, z] = BOX_HALF_EXTENTS;
            cuboid(Vector3::new(x, y, z))
        }
        ShapeKind::Prism => prism(PRISM_SIDES),
    }?;

    trace!(
        "built {kind}: {} vertices, {} edges, {} faces",
        topology.vertex_count(),
        topology.edge_count(),
        topology.face_count()
    );
    Ok(topology)
}

/// Square-based pyramid: base of side 2 at y = -1, apex at (0, 1, 0)
pub fn pyramid() -> Result<Topology> {
    let vertices = vec![
        Point3D::new(-1.0, -1.0, -1.0),
        Point3D::new(1.0, -1.0, -1.0),
        Point3D::new(1.0, -1.0, 1.0),
        Point3D::new(-1.0, -1.0, 1.0),
        Point3D::new(0.0, 1.0, 0.0),
    ];
    let apex = 4;

    let mut edges: Vec<Edge> = (0..4).map(|i| Edge(i, (i + 1) % 4)).collect();
    edges.extend((0..4).map(|i| Edge(i, apex)));

    let mut faces = vec![Face::from([0, 1, 2, 3])];
    faces.extend((0..4).map(|i| Face::from([i, (i + 1) % 4, apex])));

    Topology::new(vertices, edges, faces)
}

/// Axis-aligned cuboid centred on the origin.
///
/// Front ring (z = -h.z) is indices 0..4, back ring (z = +h.z) is 4..8, both
/// walked in the same rotational order so front index `i` pairs with `i + 4`.
/// ```text
///     7-------6
///    /|      /|
///   3-------2 |     y
///   | 4-----|-5     |  z
///   |/      |/      | /
///   0-------1       +---x
/// ```
pub fn cuboid(half_extents: Vector3<f64>) -> Result<Topology> {
    if half_extents.iter().any(|h| !h.is_finite() || *h <= 0.0) {
        return Err(Error::InvalidArgument(format!(
            "cuboid half-extents must be positive, got {half_extents:?}"
        )));
    }

    const RING: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    let mut vertices = Vec::with_capacity(8);
    for z in [-1.0, 1.0] {
        for (x, y) in RING {
            vertices.push(Point3D::new(
                x * half_extents.x,
                y * half_extents.y,
                z * half_extents.z,
            ));
        }
    }

    let mut edges = Vec::with_capacity(12);
    edges.extend((0..4).map(|i| Edge(i, (i + 1) % 4)));
    edges.extend((0..4).map(|i| Edge(i + 4, (i + 1) % 4 + 4)));
    edges.extend((0..4).map(|i| Edge(i, i + 4)));

    let mut faces = vec![Face::from([0, 1, 2, 3]), Face::from([4, 5, 6, 7])];
    faces.extend((0..4).map(|i| {
        let next = (i + 1) % 4;
        Face::from([i, next, next + 4, i + 4])
    }));

    Topology::new(vertices, edges, faces)
}

/// Right prism over a regular polygon inscribed in the unit circle.
///
/// Lower ring is indices `0..sides` at y = -1, upper ring `sides..2*sides` at
/// y = 1; vertex `i` sits at angle `360° / sides * i` with `x = cos`, `z = sin`.
pub fn prism(sides: usize) -> Result<Topology> {
    if sides < 3 {
        return Err(Error::InvalidArgument(format!(
            "prism needs at least 3 sides, got {sides}"
        )));
    }
    let n = sides;
    let step = 360.0 / n as f64;

    let mut lower = Vec::with_capacity(n);
    let mut upper = Vec::with_capacity(n);
    for i in 0..n {
        let angle = (step * i as f64).to_radians();
        let (x, z) = (angle.cos(), angle.sin());
        lower.push(Point3D::new(x, -1.0, z));
        upper.push(Point3D::new(x, 1.0, z));
    }
    let mut vertices = lower;
    vertices.append(&mut upper);

    let mut edges = Vec::with_capacity(3 * n);
    edges.extend((0..n).map(|i| Edge(i, (i + 1) % n)));
    edges.extend((0..n).map(|i| Edge(i + n, (i + 1) % n + n)));
    edges.extend((0..n).map(|i| Edge(i, i + n)));

    let mut faces = Vec::with_capacity(n + 2);
    faces.push(Face::new((0..n).collect()));
    faces.push(Face::new((n..2 * n).collect()));
    faces.extend((0..n).map(|i| {
        let next = (i + 1) % n;
        Face::from([i, next, next + n, i + n])
    }));

    Topology::new(vertices, edges, faces)
}
