//! Rotations about the X and Y axes, in degrees

use crate::geometry::Point3D;

/// Rotate `p` about the X axis by `degrees`.
///
/// `x` is unchanged; `y' = y·cos − z·sin`, `z' = y·sin + z·cos`.
pub fn rotate_x(p: &Point3D, degrees: f64) -> Point3D {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point3D::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotate `p` about the Y axis by `degrees`.
///
/// `y` is unchanged; `x' = x·cos − z·sin`, `z' = x·sin + z·cos`. Positive
/// angles turn +x towards +z, the opposite sense of a right-handed yaw.
pub fn rotate_y(p: &Point3D, degrees: f64) -> Point3D {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point3D::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Accumulated rotation about X and Y (in degrees).
///
/// Angles are unbounded; they wrap through the periodicity of sin/cos.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate `p` about X first, then about Y.
    ///
    /// The order matters: rotations do not commute.
    pub fn apply(&self, p: &Point3D) -> Point3D {
        rotate_y(&rotate_x(p, self.x), self.y)
    }
}
