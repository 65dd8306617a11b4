use super::telemetry::TelemetrySample;

/// Pre-recorded flight fed back one sample per tick in place of the integrator.
#[derive(Debug, Clone)]
pub struct TelemetryReplay {
    samples: Vec<TelemetrySample>,
    cursor: usize,
}

impl TelemetryReplay {
    pub fn new(samples: Vec<TelemetrySample>) -> Self {
        TelemetryReplay { samples, cursor: 0 }
    }

    pub fn next_sample(&mut self) -> Option<TelemetrySample> {
        let sample = self.samples.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(sample)
    }

    pub fn remaining(&self) -> usize {
        self.samples.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
