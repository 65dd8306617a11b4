use crate::{
    config::MissionConfig,
    control::{environment::build_atmosphere, rocket::RocketState},
    errors::SimulationError,
    telemetry_system::telemetry::TelemetrySample,
};

use super::aerodynamics::Aerodynamics;

/// Fixed-step vertical flight integrator (semi-implicit Euler).
#[derive(Debug)]
pub struct FlightIntegrator {
    pub gravity: f64,
    pub time_step: f64,
    aerodynamics: Aerodynamics,
}

impl FlightIntegrator {
    pub fn new(aerodynamics: Aerodynamics, gravity: f64, time_step: f64) -> Self {
        FlightIntegrator {
            gravity,
            time_step,
            aerodynamics,
        }
    }

    pub fn from_config(config: &MissionConfig) -> Self {
        let aerodynamics = Aerodynamics::new(
            config.rocket.drag_coefficient,
            config.drag_mode,
            build_atmosphere(&config.atmosphere),
        );
        FlightIntegrator::new(aerodynamics, config.gravity, config.time_step)
    }

    /// Advance `state` by exactly one time step.
    ///
    /// Altitude is not clamped: a negative altitude in the returned state is
    /// the impact signal and the caller must stop stepping.
    pub fn step(
        &self,
        state: &RocketState,
    ) -> Result<(RocketState, TelemetrySample), SimulationError> {
        check_mass(state.mass)?;

        let delta_time = self.time_step;
        let propulsion = &state.propulsion;

        let thrust = propulsion.thrust_at(state.time);
        let mass = propulsion.deplete(state.mass, state.time, delta_time);
        check_mass(mass)?;

        let weight = mass * self.gravity;
        let drag = self
            .aerodynamics
            .calculate_drag(state.altitude, state.velocity);
        let acceleration = (thrust - weight - drag) / mass;

        let velocity = state.velocity + acceleration * delta_time;
        let altitude = state.altitude + velocity * delta_time;
        let time = state.time + delta_time;

        let next = RocketState {
            propulsion: *propulsion,
            mass,
            time,
            altitude,
            velocity,
        };
        let sample = TelemetrySample {
            time,
            altitude,
            velocity,
            acceleration,
            mass,
            thrust,
            drag,
            weight,
        };

        Ok((next, sample))
    }
}

fn check_mass(mass: f64) -> Result<(), SimulationError> {
    if mass > 0.0 && mass.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::PreconditionViolation(format!(
            "cannot integrate with non-positive mass {}",
            mass
        )))
    }
}
