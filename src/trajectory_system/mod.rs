pub mod aerodynamics;
pub mod kinematics;
