use rand::Rng;

use crate::{config::ExplosionConfig, constants::PARTICLE_FADE_TICKS, utils::vector2d::Vector2D};

/// Render palette for debris. Has no effect on particle motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebrisColor {
    Orange,
    Yellow,
    Red,
    White,
}

const PALETTE: [DebrisColor; 4] = [
    DebrisColor::Orange,
    DebrisColor::Yellow,
    DebrisColor::Red,
    DebrisColor::White,
];

/// A single piece of debris in scene coordinates (y grows downward, so an
/// upward launch has a negative angle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector2D,
    pub angle: f64,
    pub speed: f64,
    pub radius: u32,
    pub life: i32,
    pub gravity: f64,
    pub dy: f64,
    pub color: DebrisColor,
}

impl Particle {
    /// Draw one particle at `origin` from the configured ranges.
    pub fn sample<R: Rng + ?Sized>(
        origin: Vector2D,
        config: &ExplosionConfig,
        rng: &mut R,
    ) -> Self {
        Particle {
            position: origin,
            angle: rng.gen_range(config.angle[0]..=config.angle[1]),
            speed: rng.gen_range(config.speed[0]..=config.speed[1]),
            radius: rng.gen_range(config.radius[0]..=config.radius[1]),
            life: rng.gen_range(config.life[0]..=config.life[1]),
            gravity: config.gravity,
            dy: 0.0,
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
        }
    }

    pub fn update(&mut self) {
        let drift = Vector2D::from_polar(self.speed, self.angle) + Vector2D::new(0.0, self.dy);
        self.position = self.position + drift;
        self.dy += self.gravity;
        self.life -= 1;
    }

    /// Still burning: drawn in its own color.
    pub fn is_visible(&self) -> bool {
        self.life > 0
    }

    /// Burnt out but lingering as smoke.
    pub fn is_fading(&self) -> bool {
        !self.is_visible() && self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.life > -PARTICLE_FADE_TICKS
    }
}

/// Owns the debris pool for one explosion.
#[derive(Debug, Default)]
pub struct ParticleExplosionEngine {
    config: ExplosionConfig,
    particles: Vec<Particle>,
}

impl ParticleExplosionEngine {
    pub fn new(config: ExplosionConfig) -> Self {
        ParticleExplosionEngine {
            config,
            particles: Vec::new(),
        }
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, origin: Vector2D, count: usize, rng: &mut R) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::sample(origin, &self.config, rng));
        }
    }

    /// Batch size drawn from the configured count range.
    pub fn sample_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let [min, max] = self.config.particle_count;
        rng.gen_range(min..=max)
    }

    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn has_live_particles(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn live_particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use std::f64::consts::PI;

    fn spawned(seed: u64, count: usize) -> ParticleExplosionEngine {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = ParticleExplosionEngine::new(ExplosionConfig::default());
        engine.spawn(Vector2D::new(300.0, 680.0), count, &mut rng);
        engine
    }

    #[test]
    fn test_sampled_values_within_ranges() {
        let config = ExplosionConfig::default();
        let engine = spawned(1, 500);

        assert_eq!(engine.len(), 500);
        for p in engine.live_particles() {
            assert!(p.angle >= config.angle[0] && p.angle <= config.angle[1]);
            assert!(p.speed >= config.speed[0] && p.speed <= config.speed[1]);
            assert!(p.radius >= config.radius[0] && p.radius <= config.radius[1]);
            assert!(p.life >= config.life[0] && p.life <= config.life[1]);
            assert_eq!(p.gravity, config.gravity);
            assert_eq!(p.dy, 0.0);
            assert_eq!(p.position, Vector2D::new(300.0, 680.0));
        }
    }

    #[test]
    fn test_default_angles_point_upward() {
        let engine = spawned(2, 200);
        for p in engine.live_particles() {
            assert!(
                p.angle.sin() < 0.0,
                "Initial heading should point up the screen. angle = {}",
                p.angle
            );
        }
    }

    #[test]
    fn test_full_upper_half_variant() {
        let mut config = ExplosionConfig::default();
        config.angle = [-PI, 0.0];
        let mut rng = StdRng::seed_from_u64(3);
        let mut engine = ParticleExplosionEngine::new(config);
        engine.spawn(Vector2D::default(), 300, &mut rng);

        for p in engine.live_particles() {
            assert!(p.angle >= -PI && p.angle <= 0.0);
        }
    }

    #[test]
    fn test_update_kinematics() {
        let mut particle = Particle {
            position: Vector2D::new(10.0, 20.0),
            angle: -PI / 2.0,
            speed: 5.0,
            radius: 4,
            life: 2,
            gravity: 0.1,
            dy: 0.0,
            color: DebrisColor::Red,
        };

        particle.update();
        assert_relative_eq!(particle.position.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(particle.position.y, 15.0, epsilon = 1e-9);
        assert_relative_eq!(particle.dy, 0.1, epsilon = 1e-12);
        assert_eq!(particle.life, 1);

        particle.update();
        assert_relative_eq!(particle.position.y, 10.1, epsilon = 1e-9);
        assert_relative_eq!(particle.dy, 0.2, epsilon = 1e-12);
        assert_eq!(particle.life, 0);
        assert!(particle.is_fading());
    }

    #[test]
    fn test_life_states() {
        let mut particle = spawned(4, 1).live_particles()[0];
        particle.life = 1;
        assert!(particle.is_visible() && particle.is_alive());
        particle.life = 0;
        assert!(particle.is_fading());
        particle.life = -29;
        assert!(particle.is_fading());
        particle.life = -30;
        assert!(!particle.is_alive());
    }

    #[test]
    fn test_life_decreases_by_one_per_tick() {
        let mut engine = spawned(5, 50);
        let before: Vec<i32> = engine.live_particles().iter().map(|p| p.life).collect();
        engine.tick();
        let after: Vec<i32> = engine.live_particles().iter().map(|p| p.life).collect();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(*a, b - 1);
        }
    }

    #[test]
    fn test_batch_dies_out_after_longest_life_plus_fade() {
        let mut engine = spawned(6, 120);
        let longest = engine.live_particles().iter().map(|p| p.life).max().unwrap();
        let shortest = engine.live_particles().iter().map(|p| p.life).min().unwrap();

        let mut ticks = 0;
        while engine.has_live_particles() {
            engine.tick();
            ticks += 1;
            assert!(ticks <= 1_000, "Explosion should end in finite time");
            if ticks < shortest + PARTICLE_FADE_TICKS {
                assert_eq!(engine.len(), 120, "No particle may die before its fade ends");
            }
        }

        assert_eq!(ticks, longest + PARTICLE_FADE_TICKS);
    }

    #[test]
    fn test_same_seed_same_debris() {
        let mut first = spawned(7, 100);
        let mut second = spawned(7, 100);
        for _ in 0..40 {
            first.tick();
            second.tick();
        }
        assert_eq!(first.live_particles(), second.live_particles());
    }

    #[test]
    fn test_sample_count_within_range() {
        let engine = ParticleExplosionEngine::new(ExplosionConfig::default());
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let count = engine.sample_count(&mut rng);
            assert!((80..=120).contains(&count));
        }
    }
}
