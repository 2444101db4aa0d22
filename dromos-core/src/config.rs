//! Configuration type definitions

use crate::motion::ramp::{MAX_STEP_INTERVAL_US, MIN_STEP_INTERVAL_US};
use crate::traits::SonarMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor driver configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorConfig {
    /// PWM carrier frequency in Hz
    pub pwm_frequency_hz: u32,
    /// Ramp pacing interval at maximum acceleration (µs)
    pub min_step_interval_us: u32,
    /// Ramp pacing interval at minimum acceleration (µs)
    pub max_step_interval_us: u32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            // Above the audible range for small brushed motors
            pwm_frequency_hz: 33_000,
            min_step_interval_us: MIN_STEP_INTERVAL_US,
            max_step_interval_us: MAX_STEP_INTERVAL_US,
        }
    }
}

/// Ultrasonic sensor configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SonarConfig {
    /// Initial measurement mode
    pub mode: SonarMode,
    /// Minimum low settle time before raising the trigger (µs)
    pub settle_us: u32,
    /// Minimum width of the trigger pulse (µs)
    pub pulse_us: u32,
    /// Readings are clamped to this range (cm)
    pub max_range_cm: u16,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            mode: SonarMode::Manual,
            settle_us: 2,
            pulse_us: 10,
            max_range_cm: 400,
        }
    }
}
