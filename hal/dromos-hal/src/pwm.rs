//! PWM channel abstraction
//!
//! A channel drives one half of an H-bridge (or any other duty-cycle
//! controlled load). Channels are claimed by ownership; `enable` configures
//! the carrier and arms the output.

/// Errors that can occur when configuring a PWM channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// Requested carrier frequency is outside the hardware range
    InvalidFrequency,
    /// Channel is tied to a slice/timer already claimed for something else
    Unavailable,
    /// Operation requires the channel to be enabled first
    NotEnabled,
}

/// Duty-cycle output channel
///
/// Duty is expressed in whole percent (0-100). Implementations map this
/// onto whatever counter resolution the hardware has.
pub trait PwmChannel {
    /// Configure the carrier frequency and arm the output at 0% duty
    fn enable(&mut self, frequency_hz: u32) -> Result<(), PwmError>;

    /// Set the output duty cycle in percent
    ///
    /// Values above 100 are saturated to 100. Calling this on a disabled
    /// channel has no observable effect on the output.
    fn set_duty_percent(&mut self, percent: u8);

    /// Disarm the output (pin held low)
    fn disable(&mut self) -> Result<(), PwmError>;
}
