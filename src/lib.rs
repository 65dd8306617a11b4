pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod explosion_system;
pub mod logging;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::{AtmosphereConfig, DragMode, ExplosionConfig, MissionConfig, RocketConfig};
pub use constants::*;
pub use control::environment::{AtmosphereModel, ConstantDensity, ExponentialAtmosphere};
pub use control::mission::{Mission, MissionPhase, PhaseTransition};
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::RocketState;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::FlightIntegrator;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::log::{read_log, read_log_file, write_log, write_log_file};
pub use telemetry_system::replay::TelemetryReplay;
pub use telemetry_system::telemetry::{FlightRecorder, MissionSummary, TelemetrySample};

pub use explosion_system::particles::{DebrisColor, Particle, ParticleExplosionEngine};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
