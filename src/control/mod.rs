pub mod environment;
pub mod launch_stages;
pub mod mission;
pub mod propulsion;
pub mod rocket;
