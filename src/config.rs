use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::errors::SimulationError;

/// Mission configuration, read once at mission construction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MissionConfig {
    pub rocket: RocketConfig,
    pub gravity: f64,
    pub time_step: f64,
    pub atmosphere: AtmosphereConfig,
    pub drag_mode: DragMode,
    pub countdown: u32,
    pub explosion: ExplosionConfig,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RocketConfig {
    pub initial_mass: f64,
    pub dry_mass: f64,
    pub thrust: f64,
    pub burn_time: f64,
    pub drag_coefficient: f64,
}

/// Which density model scales the drag force.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum AtmosphereConfig {
    /// Flat density; with the default of 1.0 the drag coefficient acts alone.
    Constant { density: f64 },
    Exponential {
        sea_level_density: f64,
        scale_height: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// Drag only while climbing (`v > 0`), nothing on the way down.
    #[default]
    AscentOnly,
    /// Drag always opposes the direction of travel.
    Symmetric,
}

/// Sampling ranges for the impact explosion. All ranges are inclusive `[min, max]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplosionConfig {
    pub particle_count: [usize; 2],
    pub angle: [f64; 2],
    pub speed: [f64; 2],
    pub radius: [u32; 2],
    pub life: [i32; 2],
    pub gravity: f64,
    /// Scene coordinates the debris is spawned at.
    pub origin: [f64; 2],
}

impl Default for MissionConfig {
    fn default() -> Self {
        MissionConfig {
            rocket: RocketConfig::default(),
            gravity: GRAVITY,
            time_step: TIME_STEP,
            atmosphere: AtmosphereConfig::default(),
            drag_mode: DragMode::default(),
            countdown: COUNTDOWN_START,
            explosion: ExplosionConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl Default for RocketConfig {
    fn default() -> Self {
        RocketConfig {
            initial_mass: ROCKET_INITIAL_MASS,
            dry_mass: ROCKET_DRY_MASS,
            thrust: ROCKET_THRUST,
            burn_time: ROCKET_BURN_TIME,
            drag_coefficient: ROCKET_DRAG_COEFFICIENT,
        }
    }
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        AtmosphereConfig::Constant { density: 1.0 }
    }
}

impl AtmosphereConfig {
    pub fn standard_exponential() -> Self {
        AtmosphereConfig::Exponential {
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: ATMOSPHERE_SCALE_HEIGHT,
        }
    }
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        ExplosionConfig {
            particle_count: [PARTICLE_COUNT_MIN, PARTICLE_COUNT_MAX],
            angle: [-3.0 * PI / 4.0, -PI / 4.0],
            speed: [PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX],
            radius: [PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX],
            life: [PARTICLE_LIFE_MIN, PARTICLE_LIFE_MAX],
            gravity: PARTICLE_GRAVITY,
            origin: [0.0, 0.0],
        }
    }
}

impl MissionConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, SimulationError> {
        let config: MissionConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that could never produce a valid mission.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let rocket = &self.rocket;

        let numeric_fields = [
            ("time step", self.time_step),
            ("gravity", self.gravity),
            ("initial mass", rocket.initial_mass),
            ("dry mass", rocket.dry_mass),
            ("thrust", rocket.thrust),
            ("burn time", rocket.burn_time),
            ("drag coefficient", rocket.drag_coefficient),
        ];
        for (name, value) in numeric_fields {
            if !value.is_finite() {
                return Err(config_error(format!("{} must be finite, got {}", name, value)));
            }
        }

        if !(self.time_step > 0.0) {
            return Err(config_error(format!(
                "time step must be positive, got {}",
                self.time_step
            )));
        }
        if !(rocket.burn_time > 0.0) {
            return Err(config_error(format!(
                "burn time must be positive, got {}",
                rocket.burn_time
            )));
        }
        if !(rocket.dry_mass > 0.0) {
            return Err(config_error(format!(
                "dry mass must be positive, got {}",
                rocket.dry_mass
            )));
        }
        if rocket.initial_mass < rocket.dry_mass {
            return Err(config_error(format!(
                "initial mass {} is below dry mass {}",
                rocket.initial_mass, rocket.dry_mass
            )));
        }
        if !(rocket.thrust >= 0.0) {
            return Err(config_error(format!(
                "thrust cannot be negative, got {}",
                rocket.thrust
            )));
        }
        if !(rocket.drag_coefficient >= 0.0) {
            return Err(config_error(format!(
                "drag coefficient cannot be negative, got {}",
                rocket.drag_coefficient
            )));
        }
        if !(self.gravity > 0.0) {
            return Err(config_error(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }

        match self.atmosphere {
            AtmosphereConfig::Constant { density } if !(density > 0.0 && density.is_finite()) => {
                return Err(config_error(format!(
                    "constant air density must be finite and positive, got {}",
                    density
                )));
            }
            AtmosphereConfig::Exponential {
                sea_level_density,
                scale_height,
            } if !(sea_level_density > 0.0 && sea_level_density.is_finite())
                || !(scale_height > 0.0 && scale_height.is_finite()) =>
            {
                return Err(config_error(format!(
                    "bad exponential atmosphere: density {}, scale height {}",
                    sea_level_density, scale_height
                )));
            }
            _ => {}
        }

        self.explosion.validate()
    }
}

impl ExplosionConfig {
    fn validate(&self) -> Result<(), SimulationError> {
        let [count_min, count_max] = self.particle_count;
        if count_min == 0 || count_min > count_max {
            return Err(config_error(format!(
                "particle count range [{}, {}] is empty",
                count_min, count_max
            )));
        }
        if count_max > PARTICLE_COUNT_LIMIT {
            return Err(config_error(format!(
                "particle count {} exceeds the limit of {}",
                count_max, PARTICLE_COUNT_LIMIT
            )));
        }
        check_range("angle", self.angle)?;
        check_range("speed", self.speed)?;
        if self.radius[0] > self.radius[1] {
            return Err(config_error(format!(
                "particle radius range [{}, {}] is inverted",
                self.radius[0], self.radius[1]
            )));
        }
        if self.life[0] > self.life[1] {
            return Err(config_error(format!(
                "particle life range [{}, {}] is inverted",
                self.life[0], self.life[1]
            )));
        }
        // every particle must burn for at least one tick before it fades
        if self.life[0] < 1 || self.life[1] > PARTICLE_LIFE_LIMIT {
            return Err(config_error(format!(
                "particle life range [{}, {}] must lie within [1, {}]",
                self.life[0], self.life[1], PARTICLE_LIFE_LIMIT
            )));
        }
        if !self.gravity.is_finite() {
            return Err(config_error("particle gravity must be finite".to_string()));
        }
        Ok(())
    }
}

fn check_range(name: &str, range: [f64; 2]) -> Result<(), SimulationError> {
    if !range[0].is_finite() || !range[1].is_finite() || range[0] > range[1] {
        return Err(config_error(format!(
            "particle {} range [{}, {}] is invalid",
            name, range[0], range[1]
        )));
    }
    Ok(())
}

fn config_error(message: String) -> SimulationError {
    SimulationError::Configuration(message)
}
