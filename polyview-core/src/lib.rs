//! polyview core: shape topology, rotation and perspective projection
//!
//! This library is the stateless geometry pipeline behind the viewer plus the
//! [`ViewModel`] that holds the current shape and view parameters. It does no
//! drawing; a frontend asks for projected points and connects them using the
//! shape's edge and face index lists.

pub mod error;
pub mod geometry;
pub mod projection;
pub mod shapes;
pub mod transform;
pub mod view;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{Edge, Face, Point3D, Topology};
pub use projection::{project, CAMERA_DISTANCE};
pub use shapes::{build, ShapeKind};
pub use transform::{rotate_x, rotate_y, RotationState};
pub use view::{Frame, ViewModel};
