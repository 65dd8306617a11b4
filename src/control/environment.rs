use std::fmt::Debug;

use crate::config::AtmosphereConfig;
use crate::constants::{AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT};

/// Maps altitude (m) to air density (kg/m³).
///
/// Implementations must be pure, defined for every real altitude (negative
/// ones included) and return a strictly positive density.
pub trait AtmosphereModel: Debug {
    fn density(&self, altitude: f64) -> f64;
}

/// Isothermal exponential atmosphere: `ρ(h) = ρ0 · exp(-h / H)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialAtmosphere {
    pub sea_level_density: f64,
    pub scale_height: f64,
}

impl ExponentialAtmosphere {
    pub fn new(sea_level_density: f64, scale_height: f64) -> Self {
        ExponentialAtmosphere {
            sea_level_density,
            scale_height,
        }
    }
}

impl Default for ExponentialAtmosphere {
    fn default() -> Self {
        ExponentialAtmosphere::new(AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT)
    }
}

impl AtmosphereModel for ExponentialAtmosphere {
    fn density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }
}

/// Altitude-independent density, for setups that use a flat drag coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDensity {
    pub density: f64,
}

impl ConstantDensity {
    pub fn new(density: f64) -> Self {
        ConstantDensity { density }
    }
}

impl AtmosphereModel for ConstantDensity {
    fn density(&self, _altitude: f64) -> f64 {
        self.density
    }
}

pub fn build_atmosphere(config: &AtmosphereConfig) -> Box<dyn AtmosphereModel> {
    match *config {
        AtmosphereConfig::Constant { density } => Box::new(ConstantDensity::new(density)),
        AtmosphereConfig::Exponential {
            sea_level_density,
            scale_height,
        } => Box::new(ExponentialAtmosphere::new(sea_level_density, scale_height)),
    }
}
