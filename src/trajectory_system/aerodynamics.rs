use crate::{config::DragMode, control::environment::AtmosphereModel};

#[derive(Debug)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub drag_mode: DragMode,
    atmosphere: Box<dyn AtmosphereModel>,
}

impl Aerodynamics {
    pub fn new(
        drag_coefficient: f64,
        drag_mode: DragMode,
        atmosphere: Box<dyn AtmosphereModel>,
    ) -> Self {
        Aerodynamics {
            drag_coefficient,
            drag_mode,
            atmosphere,
        }
    }

    pub fn air_density(&self, altitude: f64) -> f64 {
        self.atmosphere.density(altitude)
    }

    /// Signed drag force along the vertical axis, positive when it opposes an
    /// upward velocity. Subtract it from the net force.
    pub fn calculate_drag(&self, altitude: f64, velocity: f64) -> f64 {
        let scaled_coefficient = self.drag_coefficient * self.air_density(altitude);

        match self.drag_mode {
            DragMode::AscentOnly if velocity > 0.0 => scaled_coefficient * velocity.powi(2),
            DragMode::AscentOnly => 0.0,
            DragMode::Symmetric => scaled_coefficient * velocity * velocity.abs(),
        }
    }
}
