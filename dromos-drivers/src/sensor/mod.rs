//! Range sensor implementations

pub mod ultrasonic;

pub use ultrasonic::UltrasonicSensor;
