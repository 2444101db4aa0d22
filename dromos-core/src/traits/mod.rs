//! Driver contracts
//!
//! These traits define the interface between application logic and the
//! concrete drivers in `dromos-drivers`.

pub mod motor;
pub mod rangefinder;

pub use motor::{MotorError, RampMotor};
pub use rangefinder::{RangeSensor, SonarMode};
