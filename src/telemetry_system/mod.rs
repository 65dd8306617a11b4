pub mod log;
pub mod replay;
pub mod telemetry;
