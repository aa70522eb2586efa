//! Perspective projection onto a pixel viewport
use nalgebra::Point2;

use crate::geometry::Point3D;

/// Distance from the eye to the model origin along +z.
///
/// The projection diverges as a point's `z` approaches this value. Nothing
/// clamps it: built-in shapes keep `|z| <= 1.5`, far from the camera, and
/// zoom scales the picture rather than moving the eye.
pub const CAMERA_DISTANCE: f64 = 4.0;

/// Screen-space scale for a point at depth `z`: `D / (D - z)`
pub fn perspective_factor(z: f64) -> f64 {
    CAMERA_DISTANCE / (CAMERA_DISTANCE - z)
}

/// Project a 3D point to integer screen coordinates.
///
/// Model space `[-1, 1]` spans the viewport at `zoom = 1` and `z = 0`. Screen
/// y grows downward, so model y is flipped. Sub-pixel offsets are truncated
/// toward zero before the (integer) viewport centre is added.
pub fn project(p: &Point3D, width: u32, height: u32, zoom: f64) -> Point2<i32> {
    let factor = perspective_factor(p.z);
    let (w, h) = (f64::from(width), f64::from(height));

    let screen_x = (p.x * factor * zoom * w / 2.0) as i32 + (width / 2) as i32;
    let screen_y = (-p.y * factor * zoom * h / 2.0) as i32 + (height / 2) as i32;

    Point2::new(screen_x, screen_y)
}
