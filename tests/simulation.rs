use rcollide::library::{Vec2, distance};
use rcollide::render::NullSurface;
use rcollide::{Ball, Color, OverlapRule, SimConfig, Surface, World, resolve_collision};
use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear(f64, f64),
    Circle { center: Vec2, radius: f64, start: f64, end: f64, color: Color },
}

/// Records every call the world makes on its surface.
#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Surface for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(Call::Clear(width, height));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f64, start_angle: f64, end_angle: f64, color: Color) {
        self.calls.push(Call::Circle { center, radius, start: start_angle, end: end_angle, color });
    }
}

fn ball(position: Vec2, velocity: Vec2, radius: f64) -> Ball {
    Ball::new(position, Some(velocity), Some(radius), None, None).unwrap()
}

fn seeded(count: usize, seed: u64) -> SimConfig {
    SimConfig { ball_count: count, seed: Some(seed), ..SimConfig::default() }
}

#[test]
fn head_on_equal_masses_swap_velocities() {
    let mut a = ball([100.0, 100.0], [1.0, 0.0], 10.0);
    let mut b = ball([119.0, 100.0], [-1.0, 0.0], 10.0);
    assert!(a.overlaps(&b, OverlapRule::DoubledRadius));
    resolve_collision(&mut a, &mut b);
    assert!((a.velocity[0] + 1.0).abs() < 1e-12 && a.velocity[1].abs() < 1e-12);
    assert!((b.velocity[0] - 1.0).abs() < 1e-12 && b.velocity[1].abs() < 1e-12);
}

#[test]
fn ball_at_left_edge_bounces_back() -> rcollide::Result<()> {
    let r = 15.0;
    let k = 4.0;
    let mut world = World::from_balls(vec![ball([r, 200.0], [-k, 0.0], r)], SimConfig::default(), 400.0, 400.0)?;
    world.tick(&mut NullSurface);
    let b = &world.balls()[0];
    assert_eq!(b.velocity[0], k);
    assert_eq!(b.position[0], r + k);
    assert!(b.position[0] - b.radius >= 0.0 && b.position[0] + b.radius <= 400.0);
    Ok(())
}

#[test]
fn placement_never_overlaps() -> rcollide::Result<()> {
    for seed in 0..5 {
        for rule in [OverlapRule::DoubledRadius, OverlapRule::RadiusSum] {
            let config = SimConfig { overlap_rule: rule, ..seeded(100, seed) };
            let world = World::new(config, 1280.0, 720.0)?;
            let balls = world.balls();
            for i in 0..balls.len() {
                for j in (i + 1)..balls.len() {
                    let d = distance(balls[i].position, balls[j].position);
                    assert!(
                        d >= balls[i].radius + balls[j].radius,
                        "seed {seed}: balls {i} and {j} overlap ({d})"
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn tick_clears_once_then_draws_each_ball() -> rcollide::Result<()> {
    let mut world = World::new(seeded(25, 4), 900.0, 700.0)?;
    let expected: Vec<(Vec2, f64, Color)> = world.balls().iter().map(|b| (b.position, b.radius, b.color)).collect();

    let mut recorder = Recorder::default();
    world.tick(&mut recorder);

    assert_eq!(recorder.calls.len(), 26);
    assert_eq!(recorder.calls[0], Call::Clear(900.0, 700.0));
    // a ball only moves during its own update, so every ball is drawn where it started
    for (call, (position, radius, color)) in recorder.calls[1..].iter().zip(&expected) {
        let Call::Circle { center, radius: r, start, end, color: c } = call else {
            panic!("expected a circle, got {call:?}");
        };
        assert_eq!(center, position);
        assert_eq!(r, radius);
        assert_eq!(c, color);
        assert_eq!((*start, *end), (0.0, TAU));
    }
    Ok(())
}

#[test]
fn kinetic_energy_survives_many_frames() -> rcollide::Result<()> {
    let mut world = World::new(seeded(60, 17), 800.0, 600.0)?;
    let e0 = world.total_kinetic_energy();
    let mut collisions = 0;
    for _ in 0..600 {
        collisions += world.tick(&mut NullSurface).collisions;
    }
    let e1 = world.total_kinetic_energy();
    assert!(collisions > 0, "expected at least one collision in 600 frames");
    assert!((e1 - e0).abs() < 1e-6 * e0.max(1.0), "energy drifted {e0} -> {e1}");
    Ok(())
}

#[test]
fn pair_in_world_exchanges_once() -> rcollide::Result<()> {
    let balls = vec![ball([100.0, 100.0], [1.0, 0.0], 10.0), ball([119.0, 100.0], [-1.0, 0.0], 10.0)];
    let mut world = World::from_balls(balls, SimConfig::default(), 400.0, 400.0)?;
    let stats = world.tick(&mut NullSurface);
    // after the swap the second ball no longer reaches the first
    assert_eq!(stats.collisions, 1);
    assert_eq!(world.balls()[0].position, [99.0, 100.0]);
    assert_eq!(world.balls()[1].position, [120.0, 100.0]);
    assert_eq!(world.total_momentum(), [0.0, 0.0]);
    Ok(())
}

#[test]
fn bundled_scenario_loads_and_builds() -> rcollide::Result<()> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("crowded.yaml");
    let config = rcollide::Config::from_yaml_file(&path)?;
    assert_eq!(config.simulation.overlap_rule, OverlapRule::RadiusSum);
    let world = World::new(config.simulation, config.window.width as f64, config.window.height as f64)?;
    assert_eq!(world.len(), 150);
    Ok(())
}
