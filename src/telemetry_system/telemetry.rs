use std::fmt;

/// One integrator tick worth of flight data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample {
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub mass: f64,
    pub thrust: f64,
    pub drag: f64,
    pub weight: f64,
}

impl TelemetrySample {
    pub fn net_force(&self) -> f64 {
        self.thrust - self.weight - self.drag
    }
}

/// Append-only flight log with running statistics.
#[derive(Debug, Default)]
pub struct FlightRecorder {
    samples: Vec<TelemetrySample>,
    max_altitude: Option<f64>,
    max_speed: Option<f64>,
    max_acceleration: Option<f64>,
}

impl FlightRecorder {
    pub fn new() -> Self {
        FlightRecorder::default()
    }

    pub fn append(&mut self, sample: TelemetrySample) {
        self.max_altitude = Some(running_max(self.max_altitude, sample.altitude));
        self.max_speed = Some(running_max(self.max_speed, sample.velocity.abs()));
        self.max_acceleration = Some(running_max(
            self.max_acceleration,
            sample.acceleration.abs(),
        ));
        self.samples.push(sample);
    }

    pub fn max_altitude(&self) -> Option<f64> {
        self.max_altitude
    }

    pub fn impact_velocity(&self) -> Option<f64> {
        self.last().map(|sample| sample.velocity)
    }

    pub fn flight_duration(&self) -> Option<f64> {
        self.last().map(|sample| sample.time)
    }

    pub fn max_speed(&self) -> Option<f64> {
        self.max_speed
    }

    pub fn max_acceleration(&self) -> Option<f64> {
        self.max_acceleration
    }

    pub fn last(&self) -> Option<&TelemetrySample> {
        self.samples.last()
    }

    pub fn samples(&self) -> &[TelemetrySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Statistics for the end-of-mission report. An empty log reports zeros.
    pub fn summarize(&self, aborted: bool) -> MissionSummary {
        MissionSummary {
            max_altitude: self.max_altitude().unwrap_or(0.0),
            impact_velocity: self.impact_velocity().unwrap_or(0.0),
            flight_duration: self.flight_duration().unwrap_or(0.0),
            max_speed: self.max_speed().unwrap_or(0.0),
            max_acceleration: self.max_acceleration().unwrap_or(0.0),
            samples: self.len(),
            aborted,
        }
    }
}

fn running_max(current: Option<f64>, value: f64) -> f64 {
    match current {
        Some(best) if best >= value => best,
        _ => value,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionSummary {
    pub max_altitude: f64,
    pub impact_velocity: f64,
    pub flight_duration: f64,
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub samples: usize,
    pub aborted: bool,
}

pub fn format_time(elapsed_time: f64) -> String {
    if elapsed_time >= 60.0 {
        let minutes = (elapsed_time / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}m {:.2}s", minutes, seconds)
    } else {
        format!("{:.2}s", elapsed_time)
    }
}

fn format_altitude(altitude: f64) -> String {
    if altitude >= 1000.0 {
        format!("{:.2} km", altitude / 1000.0)
    } else {
        format!("{:.2} m", altitude)
    }
}

impl fmt::Display for MissionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.aborted {
            writeln!(f, "Mission aborted, statistics are truncated")?;
        }
        writeln!(f, "Max Altitude: {}", format_altitude(self.max_altitude))?;
        writeln!(f, "Impact Velocity: {:.2} m/s", self.impact_velocity)?;
        writeln!(f, "Flight Duration: {}", format_time(self.flight_duration))?;
        writeln!(f, "Max Speed: {:.2} m/s", self.max_speed)?;
        writeln!(f, "Max Acceleration: {:.2} m/s²", self.max_acceleration)?;
        write!(f, "Samples: {}", self.samples)
    }
}
