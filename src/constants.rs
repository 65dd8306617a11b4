// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Rocket Constants (small hobby rocket)
pub const ROCKET_INITIAL_MASS: f64 = 2.5; // kg
pub const ROCKET_DRY_MASS: f64 = 1.0; // kg
pub const ROCKET_THRUST: f64 = 220.0; // N
pub const ROCKET_BURN_TIME: f64 = 10.0; // s
pub const ROCKET_DRAG_COEFFICIENT: f64 = 0.05;

// Atmosphere Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 8500.0; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 0.033; // s
pub const COUNTDOWN_START: u32 = 3;
pub const DEFAULT_SEED: u64 = 42;
pub const MAX_MISSION_TICKS: u64 = 1_000_000;

// Explosion Parameters (scene units, per tick)
pub const PARTICLE_COUNT_MIN: usize = 80;
pub const PARTICLE_COUNT_MAX: usize = 120;
pub const PARTICLE_SPEED_MIN: f64 = 3.0;
pub const PARTICLE_SPEED_MAX: f64 = 9.0;
pub const PARTICLE_RADIUS_MIN: u32 = 3;
pub const PARTICLE_RADIUS_MAX: u32 = 8;
pub const PARTICLE_LIFE_MIN: i32 = 40;
pub const PARTICLE_LIFE_MAX: i32 = 70;
pub const PARTICLE_GRAVITY: f64 = 0.15;
pub const PARTICLE_FADE_TICKS: i32 = 30; // ticks a particle lingers after life runs out
pub const PARTICLE_COUNT_LIMIT: usize = 10_000;
pub const PARTICLE_LIFE_LIMIT: i32 = 10_000;
