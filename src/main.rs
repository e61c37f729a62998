//! Balls bouncing off each other and the window edges.
//!
//! Every ball collides elastically with the others. Clicking anywhere or
//! resizing the window throws the balls away and scatters a fresh set over
//! the current window.

mod canvas;

use crate::canvas::CanvasSurface;
use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use rcollide::{Config, OverlapRule, World};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(about = "Elastic collisions between bouncing balls")]
struct Args {
    /// YAML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of balls
    #[arg(short, long)]
    balls: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Initial window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Give up placing a ball after this many positions
    #[arg(long)]
    max_placement_attempts: Option<u32>,

    /// Detect overlaps with the sum of both radii instead of twice the acting radius
    #[arg(long)]
    radius_sum: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::default(),
    };
    let sim = &mut config.simulation;
    if let Some(balls) = args.balls {
        sim.ball_count = balls;
    }
    if args.seed.is_some() {
        sim.seed = args.seed;
    }
    if args.max_placement_attempts.is_some() {
        sim.max_placement_attempts = args.max_placement_attempts;
    }
    if args.radius_sum {
        sim.overlap_rule = OverlapRule::RadiusSum;
    }
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let config = load_config(&Args::parse())?;

    let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .resizable()
        .build()?;
    let mut canvas = window.into_canvas().build()?;

    let (width, height) = canvas.window().size();
    let mut world = World::new(config.simulation.clone(), width as f64, height as f64)?;
    info!("{} balls in a {}x{} window", world.len(), width, height);

    let frame_time = Duration::from_secs_f64(1.0 / config.window.fps as f64);
    let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;

    'running: loop {
        let started = Instant::now();
        let mut reset = false;
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    break 'running;
                }
                Event::MouseButtonDown { .. }
                | Event::Window { win_event: WindowEvent::Resized(..), .. } => reset = true,
                _ => {}
            }
        }

        // resets only ever land between frames
        if reset {
            let (width, height) = canvas.window().size();
            match world.reset(width as f64, height as f64) {
                Ok(()) => info!("reset to {}x{}", width, height),
                Err(e) => warn!("keeping current balls: {e}"),
            }
        }

        world.tick(&mut CanvasSurface::new(&mut canvas));
        canvas.present();

        if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
            ::std::thread::sleep(rest);
        }
    }
    info!("stopped after {} frames", world.frame());
    Ok(())
}
