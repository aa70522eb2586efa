//! The current shape plus the rotation and zoom applied before projection

use log::debug;
use nalgebra::Point2;

use crate::error::Result;
use crate::geometry::{Edge, Face, Topology};
use crate::projection::project;
use crate::shapes::{self, ShapeKind};
use crate::transform::RotationState;

/// Zoom change per wheel notch
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom never drops below this. There is no upper bound.
pub const MIN_ZOOM: f64 = 0.1;

/// Rotation (degrees) and zoom applied to the model before projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ViewState {
    zoom: f64,
    rotation: RotationState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            rotation: RotationState::zero(),
        }
    }
}

/// One projected frame: a screen point per vertex, with the index lists to
/// connect them.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub points: Vec<Point2<i32>>,
    pub edges: &'a [Edge],
    pub faces: &'a [Face],
}

impl Frame<'_> {
    /// Screen coordinates of an edge's endpoints
    pub fn edge_points(&self, edge: &Edge) -> (Point2<i32>, Point2<i32>) {
        (self.points[edge.0], self.points[edge.1])
    }

    /// Screen coordinates of a face's corners, in winding order
    pub fn face_points(&self, face: &Face) -> Vec<Point2<i32>> {
        face.indices().iter().map(|&i| self.points[i]).collect()
    }
}

/// Owns the displayed shape and its view parameters.
///
/// Input handlers mutate it through [`apply_drag`](Self::apply_drag) and
/// [`apply_zoom_delta`](Self::apply_zoom_delta); the renderer reads it
/// through [`project_all`](Self::project_all) or [`frame`](Self::frame).
#[derive(Debug, Clone)]
pub struct ViewModel {
    shape: ShapeKind,
    topology: Topology,
    state: ViewState,
}

impl ViewModel {
    pub fn new(shape: ShapeKind) -> Result<Self> {
        Ok(Self {
            shape,
            topology: shapes::build(shape)?,
            state: ViewState::default(),
        })
    }

    /// Replace the shape and reset rotation and zoom
    pub fn select_shape(&mut self, shape: ShapeKind) -> Result<()> {
        self.topology = shapes::build(shape)?;
        self.shape = shape;
        self.state = ViewState::default();
        debug!("selected {shape}");
        Ok(())
    }

    /// Restore the default rotation and zoom, keeping the shape
    pub fn reset_view(&mut self) {
        self.state = ViewState::default();
    }

    /// Rotate by a drag of (`dx`, `dy`) pixels, one degree per pixel.
    ///
    /// Horizontal drag turns about Y, vertical drag about X.
    pub fn apply_drag(&mut self, dx: i32, dy: i32) {
        self.state.rotation.rotate(-f64::from(dy), -f64::from(dx));
    }

    /// Zoom out by `notches` wheel steps (negative zooms in), never below
    /// [`MIN_ZOOM`].
    pub fn apply_zoom_delta(&mut self, notches: i32) {
        self.state.zoom -= f64::from(notches) * ZOOM_STEP;
        if self.state.zoom < MIN_ZOOM {
            self.state.zoom = MIN_ZOOM;
        }
    }

    /// Project every vertex, in index order, onto a `width` x `height`
    /// viewport. Each vertex is rotated about X, then Y, then projected.
    pub fn project_all(&self, width: u32, height: u32) -> Vec<Point2<i32>> {
        let rotation = self.state.rotation;
        self.topology
            .vertices()
            .iter()
            .map(|v| project(&rotation.apply(v), width, height, self.state.zoom))
            .collect()
    }

    /// Project the shape and bundle the result with its edges and faces
    pub fn frame(&self, width: u32, height: u32) -> Frame<'_> {
        Frame {
            points: self.project_all(width, height),
            edges: self.topology.edges(),
            faces: self.topology.faces(),
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn rotation(&self) -> RotationState {
        self.state.rotation
    }
}
