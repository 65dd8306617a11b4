use crate::config::RocketConfig;

use super::propulsion::PropulsionSystem;

/// Physical state of the rocket between integrator ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketState {
    pub propulsion: PropulsionSystem,
    pub mass: f64,
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
}

impl RocketState {
    /// Rocket fully fuelled and at rest on the pad.
    pub fn on_pad(propulsion: PropulsionSystem) -> Self {
        RocketState {
            propulsion,
            mass: propulsion.initial_mass,
            time: 0.0,
            altitude: 0.0,
            velocity: 0.0,
        }
    }

    pub fn from_config(config: &RocketConfig) -> Self {
        RocketState::on_pad(PropulsionSystem::from_config(config))
    }

    pub fn is_burning(&self) -> bool {
        self.propulsion.is_burning(self.time)
    }

    pub fn has_impacted(&self) -> bool {
        self.altitude < 0.0
    }

    pub fn fuel_fraction(&self) -> f64 {
        self.propulsion.fuel_fraction(self.mass)
    }
}
