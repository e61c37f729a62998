use crate::collision::resolve_collision;
use crate::config::OverlapRule;
use crate::error::{Error, Result};
use crate::library::*;
use crate::render::Surface;
use std::f64::consts::TAU;

pub const MIN_RADIUS: f64 = 10.0;
pub const MAX_RADIUS: f64 = 30.0;
pub const DEFAULT_RADIUS: f64 = 10.0;
pub const DEFAULT_MASS: f64 = 1.0;
const START_ANGLE: f64 = 0.0;
const END_ANGLE: f64 = TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

pub const DEFAULT_COLOR: Color = Color::rgb(0x21, 0x85, 0xC5);

/// Colors handed out to generated balls.
pub const PALETTE: [Color; 5] = [
    Color::rgb(0xEC, 0x4E, 0x20),
    Color::rgb(0xFF, 0xCB, 0x47),
    Color::rgb(0xF7, 0xA1, 0xC4),
    Color::rgb(0x54, 0xC6, 0xEB),
    Color::rgb(0x70, 0x67, 0xCF),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
}

impl Ball {
    /// Builds a ball, filling unset attributes with defaults.
    ///
    /// Fails when the radius or mass is not a finite positive number, or the
    /// position or velocity is not finite.
    pub fn new(
        position: Vec2,
        velocity: Option<Vec2>,
        radius: Option<f64>,
        color: Option<Color>,
        mass: Option<f64>,
    ) -> Result<Ball> {
        let ball = Ball {
            position,
            velocity: velocity.unwrap_or([0.0, 0.0]),
            mass: mass.unwrap_or(DEFAULT_MASS),
            radius: radius.unwrap_or(DEFAULT_RADIUS),
            color: color.unwrap_or(DEFAULT_COLOR),
        };
        if !ball.radius.is_finite() || ball.radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !ball.mass.is_finite() || ball.mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !ball.position.iter().chain(&ball.velocity).all(|c| c.is_finite()) {
            return Err(Error::InvalidParam("position and velocity must be finite".into()));
        }
        Ok(ball)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_circle(self.position, self.radius, START_ANGLE, END_ANGLE, self.color);
    }

    /// Whether `other` sits close enough to be hit by this ball.
    ///
    /// The rule is evaluated from this ball's side, so under
    /// [`OverlapRule::DoubledRadius`] the answer is not symmetric.
    pub fn overlaps(&self, other: &Ball, rule: OverlapRule) -> bool {
        distance(self.position, other.position) - rule.threshold(self.radius, other.radius) < 0.0
    }

    /// Flips each velocity component whose axis has the circle touching or
    /// past a viewport edge.
    pub fn bounce_off_edges(&mut self, width: f64, height: f64) {
        let [x, y] = self.position;
        let r = self.radius;
        if y + r >= height || y - r <= 0.0 {
            self.velocity[1] = -self.velocity[1];
        }
        if x + r >= width || x - r <= 0.0 {
            self.velocity[0] = -self.velocity[0];
        }
    }

    /// Advances one unit time step.
    pub fn move_ball(&mut self) {
        self.position = [self.position[0] + self.velocity[0], self.position[1] + self.velocity[1]];
    }

    pub fn momentum(&self) -> Vec2 {
        [self.mass * self.velocity[0], self.mass * self.velocity[1]]
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * dot(self.velocity, self.velocity)
    }

    /// Runs one frame for the ball stored at `idx`: draw, collide against
    /// every other ball, reflect off the edges, then integrate.
    ///
    /// Returns how many collisions were resolved.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds for `balls`.
    pub fn update<S: Surface + ?Sized>(
        balls: &mut [Ball],
        idx: usize,
        width: f64,
        height: f64,
        rule: OverlapRule,
        surface: &mut S,
    ) -> usize {
        balls[idx].draw(surface);

        let mut resolved = 0;
        for o_idx in 0..balls.len() {
            // each ball owns exactly one slot, so the slot is its identity
            if o_idx == idx {
                continue;
            }
            let Ok([ball, other]) = balls.get_disjoint_mut([idx, o_idx]) else {
                continue;
            };
            if ball.overlaps(other, rule) && resolve_collision(ball, other) {
                resolved += 1;
            }
        }

        let ball = &mut balls[idx];
        ball.bounce_off_edges(width, height);
        ball.move_ball();
        resolved
    }
}
