use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::SimulationError;

use super::telemetry::TelemetrySample;

const HEADER: [&str; 9] = [
    "Time",
    "Mass",
    "Thrust",
    "Weight",
    "Drag",
    "Net Force",
    "Acceleration",
    "Velocity",
    "Altitude",
];

/// Write samples as a terminal-log CSV.
///
/// Columns: Time, Mass, Thrust, Weight, Drag, Net Force, Acceleration,
///          Velocity, Altitude
pub fn write_log<W: Write>(writer: &mut W, samples: &[TelemetrySample]) -> io::Result<()> {
    writeln!(writer, "{}", HEADER.join(","))?;

    for s in samples {
        writeln!(
            writer,
            "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            s.time,
            s.mass,
            s.thrust,
            s.weight,
            s.drag,
            s.net_force(),
            s.acceleration,
            s.velocity,
            s.altitude,
        )?;
    }

    Ok(())
}

pub fn write_log_file<P: AsRef<Path>>(path: P, samples: &[TelemetrySample]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_log(&mut writer, samples)?;
    writer.flush()
}

/// Parse a terminal-log CSV by header name.
///
/// `Time`, `Altitude` and `Velocity` are required. Missing optional columns
/// read as zero, except `Weight` which falls back to `mass * gravity`.
pub fn read_log<R: BufRead>(
    reader: R,
    gravity: f64,
) -> Result<Vec<TelemetrySample>, SimulationError> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(SimulationError::Replay("telemetry log is empty".to_string())),
    };
    let columns = Columns::from_header(&header)?;

    let mut samples = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // header is row 1
        samples.push(columns.parse_row(&line, index + 2, gravity)?);
    }

    Ok(samples)
}

pub fn read_log_file<P: AsRef<Path>>(
    path: P,
    gravity: f64,
) -> Result<Vec<TelemetrySample>, SimulationError> {
    let file = File::open(path)?;
    read_log(BufReader::new(file), gravity)
}

struct Columns {
    time: usize,
    altitude: usize,
    velocity: usize,
    acceleration: Option<usize>,
    mass: Option<usize>,
    thrust: Option<usize>,
    drag: Option<usize>,
    weight: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, SimulationError> {
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let find = |name: &str| names.iter().position(|column| column.eq_ignore_ascii_case(name));
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                SimulationError::Replay(format!("telemetry log is missing the {} column", name))
            })
        };

        Ok(Columns {
            time: require("Time")?,
            altitude: require("Altitude")?,
            velocity: require("Velocity")?,
            acceleration: find("Acceleration"),
            mass: find("Mass"),
            thrust: find("Thrust"),
            drag: find("Drag"),
            weight: find("Weight"),
        })
    }

    fn parse_row(
        &self,
        line: &str,
        row: usize,
        gravity: f64,
    ) -> Result<TelemetrySample, SimulationError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let field = |index: usize| -> Result<f64, SimulationError> {
            let raw = fields.get(index).ok_or_else(|| {
                SimulationError::Replay(format!("row {}: expected column {}", row, index + 1))
            })?;
            raw.parse::<f64>().map_err(|_| {
                SimulationError::Replay(format!("row {}: '{}' is not a number", row, raw))
            })
        };
        let optional = |index: Option<usize>| -> Result<Option<f64>, SimulationError> {
            index.map(|i| field(i)).transpose()
        };

        let mass = optional(self.mass)?.unwrap_or(0.0);
        Ok(TelemetrySample {
            time: field(self.time)?,
            altitude: field(self.altitude)?,
            velocity: field(self.velocity)?,
            acceleration: optional(self.acceleration)?.unwrap_or(0.0),
            mass,
            thrust: optional(self.thrust)?.unwrap_or(0.0),
            drag: optional(self.drag)?.unwrap_or(0.0),
            weight: optional(self.weight)?.unwrap_or(mass * gravity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    fn samples() -> Vec<TelemetrySample> {
        vec![
            TelemetrySample {
                time: 0.033,
                altitude: 0.08,
                velocity: 2.6,
                acceleration: 78.2,
                mass: 2.495,
                thrust: 220.0,
                drag: 0.0,
                weight: 24.476,
            },
            TelemetrySample {
                time: 0.066,
                altitude: 0.25,
                velocity: 5.2,
                acceleration: 78.0,
                mass: 2.490,
                thrust: 220.0,
                drag: 0.338,
                weight: 24.427,
            },
        ]
    }

    #[test]
    fn test_log_has_header_and_rows() {
        let mut buf = Vec::new();
        write_log(&mut buf, &samples()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "Time,Mass,Thrust,Weight,Drag,Net Force,Acceleration,Velocity,Altitude"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0.033000,2.495000,220.000000"));
    }

    #[test]
    fn test_read_back_written_log() {
        let original = samples();
        let mut buf = Vec::new();
        write_log(&mut buf, &original).unwrap();

        let parsed = read_log(Cursor::new(buf), 9.81).unwrap();
        assert_eq!(parsed.len(), original.len());
        for (read, written) in parsed.iter().zip(original.iter()) {
            assert_relative_eq!(read.time, written.time, epsilon = 1e-6);
            assert_relative_eq!(read.altitude, written.altitude, epsilon = 1e-6);
            assert_relative_eq!(read.velocity, written.velocity, epsilon = 1e-6);
            assert_relative_eq!(read.drag, written.drag, epsilon = 1e-6);
            assert_relative_eq!(read.weight, written.weight, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_minimal_columns_any_order() {
        let csv = "Velocity, Altitude, Time, Mass\n3.0, 1.5, 0.1, 2.0\n\n-4.0, -0.2, 0.2, 2.0\n";
        let parsed = read_log(Cursor::new(csv), 9.81).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].time, 0.1);
        assert_eq!(parsed[0].altitude, 1.5);
        assert_eq!(parsed[1].velocity, -4.0);
        assert_eq!(parsed[1].thrust, 0.0);
        assert_relative_eq!(parsed[1].weight, 19.62, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Time,Velocity\n0.1,2.0\n";
        let err = read_log(Cursor::new(csv), 9.81).unwrap_err();
        assert!(err.to_string().contains("Altitude"));
    }

    #[test]
    fn test_bad_number_reports_row() {
        let csv = "Time,Altitude,Velocity\n0.1,1.0,2.0\n0.2,oops,2.0\n";
        let err = read_log(Cursor::new(csv), 9.81).unwrap_err();
        assert!(matches!(err, SimulationError::Replay(_)));
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_empty_log() {
        assert!(read_log(Cursor::new(""), 9.81).is_err());
    }
}
