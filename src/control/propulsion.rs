use crate::config::RocketConfig;

/// Solid motor with constant thrust and a linear mass burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionSystem {
    pub thrust: f64,
    pub burn_time: f64,
    pub initial_mass: f64,
    pub dry_mass: f64,
    mass_loss_rate: f64,
}

impl PropulsionSystem {
    pub fn new(thrust: f64, burn_time: f64, initial_mass: f64, dry_mass: f64) -> Self {
        PropulsionSystem {
            thrust,
            burn_time,
            initial_mass,
            dry_mass,
            mass_loss_rate: (initial_mass - dry_mass) / burn_time,
        }
    }

    pub fn from_config(config: &RocketConfig) -> Self {
        PropulsionSystem::new(
            config.thrust,
            config.burn_time,
            config.initial_mass,
            config.dry_mass,
        )
    }

    pub fn mass_loss_rate(&self) -> f64 {
        self.mass_loss_rate
    }

    pub fn is_burning(&self, time: f64) -> bool {
        time < self.burn_time
    }

    pub fn thrust_at(&self, time: f64) -> f64 {
        if self.is_burning(time) {
            self.thrust
        } else {
            0.0
        }
    }

    /// Mass after burning for `delta_time` starting at `time`, kept within
    /// `[dry_mass, initial_mass]`.
    pub fn deplete(&self, mass: f64, time: f64, delta_time: f64) -> f64 {
        if !self.is_burning(time) {
            return mass;
        }
        (mass - self.mass_loss_rate * delta_time).clamp(self.dry_mass, self.initial_mass)
    }

    pub fn fuel_fraction(&self, mass: f64) -> f64 {
        let fuel_capacity = self.initial_mass - self.dry_mass;
        if fuel_capacity <= 0.0 {
            0.0
        } else {
            ((mass - self.dry_mass) / fuel_capacity).clamp(0.0, 1.0)
        }
    }
}
