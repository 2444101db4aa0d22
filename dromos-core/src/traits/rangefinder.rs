//! Range sensor contract

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Measurement scheduling mode for a range sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SonarMode {
    /// A reading is taken only after an explicit [`RangeSensor::start_measurement`]
    #[default]
    Manual,
    /// A reading is taken on every update tick
    Automatic,
}

/// Trait for polled distance sensors
///
/// Like the motor contract, `update` is called from the main loop at high
/// frequency and never blocks on the trigger handshake; the underlying
/// echo measurement is a bounded wait owned by the hardware shim.
pub trait RangeSensor {
    /// Switch between manual and automatic measurement
    fn set_mode(&mut self, mode: SonarMode);

    /// The current measurement mode
    fn mode(&self) -> SonarMode;

    /// Request one measurement on the next update
    ///
    /// Only meaningful in [`SonarMode::Manual`]; ignored in automatic
    /// mode, which measures unconditionally.
    fn start_measurement(&mut self);

    /// Run the measurement cycle if one is due
    fn update(&mut self);

    /// Check if a requested measurement is still pending
    fn is_updating(&self) -> bool;

    /// The last measured distance in centimeters, clamped to sensor range
    fn distance_cm(&self) -> u16;
}
