//! Cursor trail and click sparkles.
//!
//! Particles are integrated with fixed per-frame constants (no time delta),
//! shrink and fade every frame, and are culled the frame they become
//! invisible. The engine redraws its whole surface each frame.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ParticleConfig, SpawnProfile};
use crate::input::{InputState, Point};
use crate::ticker::{Frame, Ticker};

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba()` string with the given alpha.
    pub fn to_css_rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

/// A single trail or sparkle particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub life: f64,
    pub color: Rgb,
}

impl Particle {
    /// Advances one frame. Returns `false` once the particle should be culled.
    fn advance(&mut self, config: &ParticleConfig) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += config.gravity;
        self.size *= config.shrink;
        self.life -= config.decay;
        self.life > 0.0 && self.size >= config.min_size
    }
}

/// 2D drawing target owned by the particle engine.
pub trait Surface {
    /// Clears the whole surface.
    fn clear(&mut self);
    /// Draws a filled circle.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64);
}

/// Owns the live particle set and its drawing surface.
pub struct ParticleEngine {
    config: ParticleConfig,
    particles: Vec<Particle>,
    surface: Option<Box<dyn Surface>>,
    rng: ChaCha8Rng,
    running: bool,
}

impl ParticleEngine {
    /// Creates an engine. Without a surface every operation is a no-op.
    pub fn new(config: ParticleConfig, seed: u64, surface: Option<Box<dyn Surface>>) -> Self {
        Self {
            config,
            particles: Vec::new(),
            surface,
            rng: ChaCha8Rng::seed_from_u64(seed),
            running: false,
        }
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Appends one particle as given, dropping the oldest when full.
    /// Returns `false` if nothing was added.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        size: f64,
        life: f64,
        color: Rgb,
    ) -> bool {
        if self.surface.is_none() || self.config.max_particles == 0 {
            return false;
        }
        if self.particles.len() >= self.config.max_particles {
            let excess = self.particles.len() + 1 - self.config.max_particles;
            self.particles.drain(..excess);
        }
        self.particles.push(Particle {
            x,
            y,
            vx,
            vy,
            size,
            life,
            color,
        });
        true
    }

    /// Spawns one trail particle near `at`.
    pub fn spawn_trail(&mut self, at: Point) {
        let profile = self.config.trail;
        self.spawn_scattered(at, profile);
    }

    /// Spawns a click sparkle burst at `(x, y)`. Returns how many were added.
    pub fn burst(&mut self, x: f64, y: f64) -> usize {
        if self.surface.is_none() {
            return 0;
        }
        let profile = self.config.burst;
        (0..self.config.burst_count)
            .filter(|_| self.spawn_scattered(Point::new(x, y), profile))
            .count()
    }

    /// One frame: trail spawn, integration, culling and redraw.
    pub fn tick(&mut self, input: &InputState) {
        if self.surface.is_none() {
            return;
        }
        if let Some(pointer) = input.pointer_on_canvas() {
            self.spawn_trail(pointer);
        }

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let config = &self.config;
        surface.clear();
        self.particles.retain_mut(|p| {
            if !p.advance(config) {
                return false;
            }
            surface.fill_circle(p.x, p.y, p.size, p.color, p.life.max(0.0));
            true
        });
    }

    /// Wipes the drawing surface without touching the particle set.
    pub fn clear_surface(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
    }

    fn spawn_scattered(&mut self, at: Point, profile: SpawnProfile) -> bool {
        let x = at.x + spread(&mut self.rng, profile.jitter);
        let y = at.y + spread(&mut self.rng, profile.jitter);
        let vx = spread(&mut self.rng, profile.velocity[0]);
        let vy = spread(&mut self.rng, profile.velocity[1]);
        let size = self.config.size_min
            + self.rng.random::<f64>() * (self.config.size_max - self.config.size_min);
        let color = self.config.accent;
        self.spawn(x, y, vx, vy, size, profile.life, color)
    }
}

/// Uniform value in `[-half, half)`.
fn spread(rng: &mut ChaCha8Rng, half: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * 2.0 * half
}

impl Ticker for ParticleEngine {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn on_frame(&mut self, frame: &Frame<'_>) {
        self.tick(frame.input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Circle { radius: f64, alpha: f64 },
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.borrow_mut().push(Call::Clear);
        }

        fn fill_circle(&mut self, _x: f64, _y: f64, radius: f64, _color: Rgb, alpha: f64) {
            self.calls.borrow_mut().push(Call::Circle { radius, alpha });
        }
    }

    const ACCENT: Rgb = Rgb::new(0, 240, 212);

    fn engine() -> (ParticleEngine, Rc<RefCell<Vec<Call>>>) {
        let surface = RecordingSurface::default();
        let calls = surface.calls.clone();
        let engine = ParticleEngine::new(ParticleConfig::default(), 7, Some(Box::new(surface)));
        (engine, calls)
    }

    fn offscreen() -> InputState {
        InputState::new()
    }

    fn at(x: f64, y: f64) -> InputState {
        let mut input = InputState::new();
        input.move_pointer(x, y);
        input
    }

    #[test]
    fn test_particle_removed_at_exactly_fifty_ticks() {
        let (mut engine, _) = engine();
        engine.spawn(100.0, 100.0, 0.0, 0.0, 2.0, 1.0, ACCENT);

        for tick in 1..50 {
            engine.tick(&offscreen());
            assert_eq!(engine.len(), 1, "removed early at tick {tick}");
        }
        engine.tick(&offscreen());
        assert!(engine.is_empty());
    }

    #[test]
    fn test_integration_step() {
        let (mut engine, _) = engine();
        engine.spawn(10.0, 20.0, 1.0, -1.0, 2.0, 1.0, ACCENT);
        engine.tick(&offscreen());

        let p = &engine.particles()[0];
        assert!((p.x - 11.0).abs() < 1e-12);
        assert!((p.y - 19.0).abs() < 1e-12);
        assert!((p.vx - 1.0).abs() < 1e-12);
        assert!((p.vy - -0.98).abs() < 1e-12);
        assert!((p.size - 1.984).abs() < 1e-12);
        assert!((p.life - 0.98).abs() < 1e-12);
    }

    #[test]
    fn test_small_particles_are_culled() {
        let (mut engine, _) = engine();
        engine.spawn(0.0, 0.0, 0.0, 0.0, 0.3, 1.0, ACCENT);
        engine.spawn(0.0, 0.0, 0.0, 0.0, 0.31, 1.0, ACCENT);
        engine.tick(&offscreen());

        assert_eq!(engine.len(), 1);
        assert!(engine.particles()[0].size >= 0.3);
    }

    #[test]
    fn test_click_burst() {
        let (mut engine, _) = engine();
        let added = engine.burst(300.0, 150.0);

        assert_eq!(added, 6);
        assert_eq!(engine.len(), 6);
        for p in engine.particles() {
            assert!((p.life - 0.9).abs() < f64::EPSILON);
            assert!((p.x - 300.0).abs() <= 6.0);
            assert!((p.y - 150.0).abs() <= 6.0);
            assert!(p.vx.abs() <= 0.7 && p.vy.abs() <= 0.7);
            assert!((1.0..4.0).contains(&p.size));
            assert_eq!(p.color, ACCENT);
        }
    }

    #[test]
    fn test_trail_spawns_one_per_tick_on_canvas() {
        let (mut engine, _) = engine();

        engine.tick(&offscreen());
        assert!(engine.is_empty());

        for n in 1..=5 {
            engine.tick(&at(50.0, 60.0));
            assert_eq!(engine.len(), n);
        }

        // The newest particle has been integrated once.
        let p = engine.particles().last().unwrap();
        assert!((p.life - 0.98).abs() < 1e-12);
        assert!((p.x - 50.0).abs() <= 3.0 + 0.35);
        assert!((p.y - 60.0).abs() <= 3.0 + 0.3);
    }

    #[test]
    fn test_render_clears_then_draws_live_particles() {
        let (mut engine, calls) = engine();
        engine.spawn(0.0, 0.0, 0.0, 0.0, 2.0, 1.0, ACCENT);
        engine.spawn(0.0, 0.0, 0.0, 0.0, 2.0, 0.01, ACCENT);
        engine.tick(&offscreen());

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Clear);
        let Call::Circle { radius, alpha } = &calls[1] else {
            panic!("expected a circle, got {:?}", calls[1]);
        };
        assert!((radius - 1.984).abs() < 1e-12);
        assert!((alpha - 0.98).abs() < 1e-12);
    }

    #[test]
    fn test_empty_set_still_clears() {
        let (mut engine, calls) = engine();
        engine.tick(&offscreen());
        engine.tick(&offscreen());
        assert_eq!(*calls.borrow(), vec![Call::Clear, Call::Clear]);
    }

    #[test]
    fn test_missing_surface_is_noop() {
        let mut engine = ParticleEngine::new(ParticleConfig::default(), 7, None);
        assert!(!engine.has_surface());

        for _ in 0..100 {
            engine.tick(&at(10.0, 10.0));
        }
        assert_eq!(engine.burst(10.0, 10.0), 0);
        engine.spawn(0.0, 0.0, 0.0, 0.0, 2.0, 1.0, ACCENT);
        engine.clear_surface();
        assert!(engine.is_empty());
    }

    #[test]
    fn test_set_is_bounded() {
        let config = ParticleConfig {
            max_particles: 10,
            ..ParticleConfig::default()
        };
        let surface = RecordingSurface::default();
        let mut engine = ParticleEngine::new(config, 1, Some(Box::new(surface)));

        engine.spawn(-1000.0, -1000.0, 0.0, 0.0, 2.0, 1.0, ACCENT);
        engine.burst(0.0, 0.0);
        engine.burst(0.0, 0.0);

        assert_eq!(engine.len(), 10);
        // The first particle was the oldest and has been dropped.
        assert!(engine.particles().iter().all(|p| p.x > -500.0));
    }

    #[test]
    fn test_burst_reports_only_added_particles() {
        let config = ParticleConfig {
            max_particles: 0,
            ..ParticleConfig::default()
        };
        let surface = RecordingSurface::default();
        let mut engine = ParticleEngine::new(config, 1, Some(Box::new(surface)));

        assert_eq!(engine.burst(0.0, 0.0), 0);
        assert!(!engine.spawn(0.0, 0.0, 0.0, 0.0, 2.0, 1.0, ACCENT));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_same_seed_same_sparkles() {
        let (mut a, _) = engine();
        let (mut b, _) = engine();
        a.burst(10.0, 10.0);
        b.burst(10.0, 10.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_zero_jitter_is_allowed() {
        let mut config = ParticleConfig::default();
        config.burst.jitter = 0.0;
        config.burst.velocity = [0.0, 0.0];
        let mut engine =
            ParticleEngine::new(config, 3, Some(Box::new(RecordingSurface::default())));

        engine.burst(5.0, 5.0);
        assert!(engine.particles().iter().all(|p| p.x == 5.0 && p.y == 5.0));
    }

    #[test]
    fn test_ticker_forwards_input() {
        use crate::ticker::FrameDriver;

        let (engine, _) = engine();
        let engine = Rc::new(RefCell::new(engine));
        let mut driver = FrameDriver::new();
        driver.register(engine.clone());
        driver.start_all();

        driver.advance(0.0, &at(1.0, 1.0));
        driver.advance(16.0, &at(2.0, 2.0));
        assert_eq!(engine.borrow().len(), 2);
    }

    #[test]
    fn test_css_rgba() {
        assert_eq!(ACCENT.to_css_rgba(0.5), "rgba(0,240,212,0.5)");
    }
}
