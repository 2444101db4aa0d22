//! Ramped motor contract
//!
//! A ramp motor accepts a signed speed setpoint (-100..=100, sign is
//! direction) and walks its commanded output toward it one unit per
//! pacing interval. Callers poll [`RampMotor::update`] from the main loop;
//! the driver decides internally whether this call advances the ramp.

/// Errors that can occur with motor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// A PWM channel could not be configured
    Config,
    /// Operation requires the driver to be enabled
    Disabled,
}

/// Trait for PWM motor drivers with ramped speed control
pub trait RampMotor {
    /// Initialize both output channels at 0% duty and mark the driver
    /// enabled
    ///
    /// Resets acceleration to maximum (fastest ramp).
    fn begin(&mut self) -> Result<(), MotorError>;

    /// Disable both output channels and mark the driver disabled
    fn end(&mut self) -> Result<(), MotorError>;

    /// Set the speed setpoint as a percentage (-100 backward to 100
    /// forward)
    ///
    /// Out-of-range values are clamped, not rejected. Takes effect on
    /// subsequent ticks; there is no immediate motion.
    fn set_speed(&mut self, percent: i8);

    /// Set the ramp acceleration (0 slowest to 100 instantaneous)
    ///
    /// Out-of-range values are clamped. Controls how often a one-unit
    /// speed step is applied, not the step size.
    fn set_acceleration(&mut self, percent: u8);

    /// Advance the ramp if the pacing interval has elapsed
    ///
    /// Non-blocking and safe to call on every loop iteration. When the
    /// interval has elapsed this steps the commanded speed by at most one
    /// unit toward the setpoint and rewrites both duty cycles.
    fn update(&mut self);

    /// Immediately zero both the commanded speed and the setpoint
    ///
    /// Not ramped. Resets acceleration to maximum and disables the
    /// driver. Returns the new enabled state (always `false`).
    fn stop(&mut self) -> bool;

    /// Check if the commanded speed is still moving toward the setpoint
    fn is_updating(&self) -> bool;

    /// The currently commanded speed percentage
    fn read(&self) -> i8;

    /// Check if the driver is enabled
    fn is_enabled(&self) -> bool;
}
