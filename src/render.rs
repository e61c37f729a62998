//! Drawing contract between the simulation and whatever presents it.
//!
//! Coordinates are surface pixels with the origin in the top-left corner and
//! y growing downward; the boundary checks in [`crate::items`] rely on it.

use crate::items::Color;
use crate::library::Vec2;

pub trait Surface {
    /// Wipes the `width` x `height` region anchored at the origin.
    fn clear(&mut self, width: f64, height: f64);

    /// Fills the arc of a circle between `start_angle` and `end_angle` (radians).
    fn draw_circle(&mut self, center: Vec2, radius: f64, start_angle: f64, end_angle: f64, color: Color);
}

/// Surface that discards everything, for running the physics headless.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f64, _height: f64) {}

    fn draw_circle(&mut self, _center: Vec2, _radius: f64, _start_angle: f64, _end_angle: f64, _color: Color) {}
}
