//! Elastic collisions between circular balls bouncing around a viewport.
//!
//! The crate is split into the physics core ([`items`], [`collision`],
//! [`world`]), the drawing contract the core renders through ([`render`]),
//! and the ambient pieces ([`config`], [`error`]). The SDL2 front end lives in
//! the `rcollide` binary.

pub mod collision;
pub mod config;
pub mod error;
pub mod items;
pub mod render;
pub mod world;

pub use collision::resolve_collision;
pub use config::{Config, OverlapRule, SimConfig, WindowConfig};
pub use error::{Error, Result};
pub use items::{Ball, Color, PALETTE};
pub use render::Surface;
pub use world::{FrameStats, World};

pub mod library {
    pub type Vec2 = [f64; 2];

    pub fn dot(vec1: Vec2, vec2: Vec2) -> f64 {
        vec1[0] * vec2[0] + vec1[1] * vec2[1]
    }

    pub fn get_magnitude(vec: Vec2) -> f64 {
        (vec[0].powi(2) + vec[1].powi(2)).sqrt()
    }

    pub fn find_vector(x: Vec2, y: Vec2) -> Vec2 {
        [y[0] - x[0], y[1] - x[1]]
    }

    /// Euclidean distance between two points.
    pub fn distance(x: Vec2, y: Vec2) -> f64 {
        get_magnitude(find_vector(x, y))
    }

    /// Rotates `vec` counter-clockwise by `angle` radians.
    pub fn rotate(vec: Vec2, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        [vec[0] * cos - vec[1] * sin, vec[0] * sin + vec[1] * cos]
    }

}
