//! The ball collection and the frame loop that drives it.
//!
//! A [`World`] is built with a target ball count and viewport size. Balls are
//! generated one at a time, and each one's position is re-rolled until it
//! clears every ball placed before it. Placement has no retry limit unless
//! [`SimConfig::max_placement_attempts`] is set. When the balls cannot fit,
//! an unlimited search never returns. Keep the total ball area (about
//! `count * π * 20²` on average) well below `width * height`.

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::items::{Ball, MAX_RADIUS, MIN_RADIUS, PALETTE};
use crate::library::*;
use crate::render::Surface;
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Spawn velocity components are drawn from `-MAX_SPAWN_SPEED..=MAX_SPAWN_SPEED`.
const MAX_SPAWN_SPEED: i64 = 2;
/// Fraction of the viewport that generated balls may cover before we warn.
const DENSITY_WARNING: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frame: u64,
    pub collisions: usize,
}

pub struct World {
    balls: Vec<Ball>,
    width: f64,
    height: f64,
    config: SimConfig,
    rng: StdRng,
    frame: u64,
}

impl World {
    /// Generates `config.ball_count` non-overlapping balls inside a
    /// `width` x `height` viewport.
    pub fn new(config: SimConfig, width: f64, height: f64) -> Result<World> {
        check_viewport(width, height)?;
        let mut rng = rng_for(&config);
        let balls = create_balls(&mut rng, &config, width, height)?;
        Ok(World { balls, width, height, config, rng, frame: 0 })
    }

    /// Wraps an explicit set of balls. No placement check is done.
    ///
    /// The ball count in `config` is replaced by `balls.len()`, so a later
    /// [`World::reset`] regenerates as many balls as were given here.
    pub fn from_balls(balls: Vec<Ball>, mut config: SimConfig, width: f64, height: f64) -> Result<World> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidParam(format!("viewport must be positive, got {width}x{height}")));
        }
        config.ball_count = balls.len();
        let rng = rng_for(&config);
        Ok(World { balls, width, height, config, rng, frame: 0 })
    }

    /// Throws every ball away and regenerates the same number of balls for
    /// a viewport of the new size. On error the world is left as it was.
    pub fn reset(&mut self, width: f64, height: f64) -> Result<()> {
        check_viewport(width, height)?;
        let balls = create_balls(&mut self.rng, &self.config, width, height)?;
        debug!(
            "reset: {} balls, viewport {}x{} -> {}x{}",
            balls.len(),
            self.width,
            self.height,
            width,
            height
        );
        self.balls = balls;
        self.width = width;
        self.height = height;
        self.frame = 0;
        Ok(())
    }

    /// Clears the surface and runs one frame for every ball, in order.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear(self.width, self.height);
        let mut collisions = 0;
        for idx in 0..self.balls.len() {
            collisions += Ball::update(
                &mut self.balls,
                idx,
                self.width,
                self.height,
                self.config.overlap_rule,
                surface,
            );
        }
        self.frame += 1;
        trace!("frame {}: {} collisions", self.frame, collisions);
        FrameStats { frame: self.frame, collisions }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Frames run since creation or the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.balls.iter().fold([0.0, 0.0], |acc, b| {
            let p = b.momentum();
            [acc[0] + p[0], acc[1] + p[1]]
        })
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }
}

fn rng_for(config: &SimConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn check_viewport(width: f64, height: f64) -> Result<()> {
    let min_side = MAX_RADIUS * 2.0;
    if !(width.is_finite() && height.is_finite()) || width < min_side || height < min_side {
        return Err(Error::InvalidParam(format!(
            "viewport must be at least {min_side}x{min_side}, got {width}x{height}"
        )));
    }
    Ok(())
}

fn random_position(rng: &mut StdRng, radius: i64, width: f64, height: f64) -> Vec2 {
    let x = rng.random_range(radius..=(width.floor() as i64 - radius));
    let y = rng.random_range(radius..=(height.floor() as i64 - radius));
    [x as f64, y as f64]
}

/// Whether a new ball at `position` would touch `placed`.
///
/// The configured rule applies, and the radius sum is always enforced on top
/// of it so freshly placed balls never start out overlapping.
fn clashes(position: Vec2, radius: f64, placed: &Ball, config: &SimConfig) -> bool {
    let threshold = config
        .overlap_rule
        .threshold(radius, placed.radius)
        .max(radius + placed.radius);
    distance(position, placed.position) - threshold < 0.0
}

fn create_balls(rng: &mut StdRng, config: &SimConfig, width: f64, height: f64) -> Result<Vec<Ball>> {
    let mean_radius = (MIN_RADIUS + MAX_RADIUS) / 2.0;
    let coverage = config.ball_count as f64 * PI * mean_radius * mean_radius / (width * height);
    if coverage > DENSITY_WARNING {
        warn!(
            "{} balls cover about {:.0}% of a {}x{} viewport; placement may stall",
            config.ball_count,
            coverage * 100.0,
            width,
            height
        );
    }

    let mut balls: Vec<Ball> = Vec::with_capacity(config.ball_count);
    let mut rerolls: u64 = 0;
    for index in 0..config.ball_count {
        let radius = rng.random_range(MIN_RADIUS as i64..=MAX_RADIUS as i64);
        let velocity = [
            rng.random_range(-MAX_SPAWN_SPEED..=MAX_SPAWN_SPEED) as f64,
            rng.random_range(-MAX_SPAWN_SPEED..=MAX_SPAWN_SPEED) as f64,
        ];
        let color = PALETTE[rng.random_range(0..PALETTE.len())];

        let mut position = random_position(rng, radius, width, height);
        let mut attempts: u64 = 1;
        let mut j = 0;
        while j < balls.len() {
            if !clashes(position, radius as f64, &balls[j], config) {
                j += 1;
                continue;
            }
            if config.max_placement_attempts.is_some_and(|cap| attempts >= u64::from(cap)) {
                return Err(Error::PlacementFailed { index, attempts });
            }
            position = random_position(rng, radius, width, height);
            attempts = attempts.saturating_add(1);
            j = 0;
        }
        rerolls += attempts - 1;

        balls.push(Ball::new(position, Some(velocity), Some(radius as f64), Some(color), None)?);
    }
    debug!("placed {} balls with {} position re-rolls", balls.len(), rerolls);
    Ok(balls)
}
