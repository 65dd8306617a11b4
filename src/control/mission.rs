use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::{
    config::MissionConfig,
    errors::SimulationError,
    explosion_system::particles::{Particle, ParticleExplosionEngine},
    telemetry_system::{
        replay::TelemetryReplay,
        telemetry::{FlightRecorder, MissionSummary, TelemetrySample},
    },
    trajectory_system::kinematics::FlightIntegrator,
    utils::vector2d::Vector2D,
};

use super::{launch_stages::LaunchSequence, rocket::RocketState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissionPhase {
    Countdown,
    Ignition,
    PoweredFlight,
    Coast,
    Impact,
    Exploding,
    Summary,
}

impl MissionPhase {
    pub fn is_flight(&self) -> bool {
        matches!(self, MissionPhase::PoweredFlight | MissionPhase::Coast)
    }
}

/// Entry into `phase` on the given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTransition {
    pub phase: MissionPhase,
    pub tick: u64,
    pub mission_time: f64,
}

#[derive(Debug)]
enum FlightSource {
    Simulated(FlightIntegrator),
    Replay(TelemetryReplay),
}

/// Drives one launch from countdown to the end-of-mission report, one tick
/// per call to [`Mission::advance_tick`].
#[derive(Debug)]
pub struct Mission {
    phase: MissionPhase,
    launch_sequence: LaunchSequence,
    flight: FlightSource,
    rocket: RocketState,
    recorder: FlightRecorder,
    explosion: ParticleExplosionEngine,
    rng: StdRng,
    impact_origin: Vector2D,
    transitions: Vec<PhaseTransition>,
    tick: u64,
    aborted: bool,
    acknowledged: bool,
    summary: Option<MissionSummary>,
}

impl Mission {
    pub fn new(config: MissionConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let integrator = FlightIntegrator::from_config(&config);
        Ok(Mission::with_source(config, FlightSource::Simulated(integrator)))
    }

    /// Builds a mission whose flight phases are fed from recorded samples.
    pub fn from_replay(
        config: MissionConfig,
        samples: Vec<TelemetrySample>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        if samples.is_empty() {
            return Err(SimulationError::Replay(
                "telemetry log contains no samples".to_string(),
            ));
        }
        info!(samples = samples.len(), "loaded flight for replay");
        Ok(Mission::with_source(
            config,
            FlightSource::Replay(TelemetryReplay::new(samples)),
        ))
    }

    fn with_source(config: MissionConfig, flight: FlightSource) -> Self {
        let mut mission = Mission {
            phase: MissionPhase::Countdown,
            launch_sequence: LaunchSequence::new(config.countdown),
            flight,
            rocket: RocketState::from_config(&config.rocket),
            recorder: FlightRecorder::new(),
            rng: StdRng::seed_from_u64(config.seed),
            impact_origin: Vector2D::from(config.explosion.origin),
            explosion: ParticleExplosionEngine::new(config.explosion),
            transitions: Vec::new(),
            tick: 0,
            aborted: false,
            acknowledged: false,
            summary: None,
        };
        mission.enter(MissionPhase::Countdown);
        mission
    }

    pub fn current_phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn current_telemetry(&self) -> Option<&TelemetrySample> {
        self.recorder.last()
    }

    pub fn live_particles(&self) -> &[Particle] {
        self.explosion.live_particles()
    }

    pub fn summary(&self) -> Option<MissionSummary> {
        self.summary
    }

    pub fn recorder(&self) -> &FlightRecorder {
        &self.recorder
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    pub fn rocket_state(&self) -> &RocketState {
        &self.rocket
    }

    pub fn countdown_remaining(&self) -> u32 {
        self.launch_sequence.remaining()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn is_replay(&self) -> bool {
        matches!(self.flight, FlightSource::Replay(_))
    }

    pub fn is_finished(&self) -> bool {
        self.acknowledged
    }

    /// Advances the mission by one tick. Ticks after `Summary` are no-ops.
    pub fn advance_tick(&mut self) -> Result<MissionPhase, SimulationError> {
        if self.phase == MissionPhase::Summary {
            return Ok(self.phase);
        }
        self.tick += 1;

        match self.phase {
            MissionPhase::Countdown => {
                if self.launch_sequence.tick() {
                    self.enter(MissionPhase::Ignition);
                } else {
                    debug!(remaining = self.launch_sequence.remaining(), "countdown");
                }
            }

            MissionPhase::Ignition => self.enter(MissionPhase::PoweredFlight),

            MissionPhase::PoweredFlight | MissionPhase::Coast => {
                self.step_flight()?;
            }

            MissionPhase::Impact => {
                self.detonate();
                self.enter(MissionPhase::Exploding);
            }

            MissionPhase::Exploding => {
                self.explosion.tick();
                if !self.explosion.has_live_particles() {
                    self.finish();
                }
            }

            MissionPhase::Summary => {}
        }

        Ok(self.phase)
    }

    /// Runs one flight tick and applies any resulting transition.
    ///
    /// Only valid during `PoweredFlight` or `Coast`.
    pub fn step_flight(&mut self) -> Result<TelemetrySample, SimulationError> {
        if !self.phase.is_flight() {
            return Err(SimulationError::PreconditionViolation(format!(
                "flight cannot be stepped during {:?}",
                self.phase
            )));
        }

        let (sample, out_of_data) = match &mut self.flight {
            FlightSource::Simulated(integrator) => {
                let (next, sample) = integrator.step(&self.rocket)?;
                self.rocket = next;
                (sample, false)
            }
            FlightSource::Replay(replay) => {
                let sample = replay.next_sample().ok_or_else(|| {
                    SimulationError::Replay("replay stepped past the end of the log".to_string())
                })?;
                self.rocket.mass = sample.mass;
                self.rocket.time = sample.time;
                self.rocket.altitude = sample.altitude;
                self.rocket.velocity = sample.velocity;
                (sample, replay.is_exhausted())
            }
        };

        self.recorder.append(sample);
        debug!(
            time = sample.time,
            altitude = sample.altitude,
            velocity = sample.velocity,
            acceleration = sample.acceleration,
            mass = sample.mass,
            fuel = self.rocket.fuel_fraction(),
            "flight tick"
        );

        if self.rocket.has_impacted() {
            self.enter(MissionPhase::Impact);
        } else if out_of_data {
            warn!(
                altitude = sample.altitude,
                "replay ended above ground, treating as impact"
            );
            self.enter(MissionPhase::Impact);
        } else if self.phase == MissionPhase::PoweredFlight && !self.rocket.is_burning() {
            self.enter(MissionPhase::Coast);
        }

        Ok(sample)
    }

    /// Stops the mission and jumps straight to `Summary` with whatever
    /// statistics have been collected.
    pub fn abort(&mut self) {
        if self.phase == MissionPhase::Summary {
            return;
        }
        warn!(phase = ?self.phase, tick = self.tick, "mission aborted");
        self.aborted = true;
        self.explosion.clear();
        self.finish();
    }

    pub fn acknowledge(&mut self) -> Result<(), SimulationError> {
        if self.phase != MissionPhase::Summary {
            return Err(SimulationError::PreconditionViolation(format!(
                "cannot acknowledge the mission during {:?}",
                self.phase
            )));
        }
        self.acknowledged = true;
        Ok(())
    }

    /// Ticks until `Summary`, aborting if `max_ticks` is exhausted first.
    pub fn run_to_summary(&mut self, max_ticks: u64) -> Result<MissionSummary, SimulationError> {
        while self.phase != MissionPhase::Summary {
            if self.tick >= max_ticks {
                warn!(max_ticks, "tick budget exhausted");
                self.abort();
                break;
            }
            self.advance_tick()?;
        }

        self.summary.ok_or_else(|| {
            SimulationError::PreconditionViolation("mission ended without a summary".to_string())
        })
    }

    fn detonate(&mut self) {
        let count = self.explosion.sample_count(&mut self.rng);
        info!(
            velocity = self.rocket.velocity,
            time = self.rocket.time,
            particles = count,
            "impact"
        );
        self.explosion.spawn(self.impact_origin, count, &mut self.rng);
    }

    fn finish(&mut self) {
        let summary = self.recorder.summarize(self.aborted);
        self.summary = Some(summary);
        self.enter(MissionPhase::Summary);
    }

    fn enter(&mut self, phase: MissionPhase) {
        info!(?phase, tick = self.tick, time = self.rocket.time, "entering phase");
        self.phase = phase;
        self.transitions.push(PhaseTransition {
            phase,
            tick: self.tick,
            mission_time: self.rocket.time,
        });
    }
}
