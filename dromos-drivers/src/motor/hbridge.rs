//! H-bridge DC motor driver with ramped PWM speed control
//!
//! This driver provides:
//! - Signed speed control (-100..=100, sign is direction) over two PWM
//!   channels, one per bridge half
//! - Time-gated ramping: the commanded speed steps by one unit per pacing
//!   interval derived from the acceleration setting
//! - Immediate stop, bypassing the ramp
//!
//! # Usage
//!
//! `update()` never blocks; call it on every main-loop iteration and it
//! decides internally whether this call advances the ramp.
//!
//! ```ignore
//! let mut motor = HBridgeMotor::new(forward_pwm, backward_pwm, clock);
//! motor.begin()?;
//! motor.set_acceleration(40);
//! motor.set_speed(-75); // three quarters speed, backward
//!
//! loop {
//!     motor.update();
//! }
//! ```

use dromos_core::config::MotorConfig;
use dromos_core::motion::ramp::{step_interval_in, SpeedRamp};
use dromos_core::traits::{MotorError, RampMotor};
use dromos_hal::pwm::PwmChannel;
use dromos_hal::time::{Clock, Instant};

/// DC motor on two PWM channels of an H-bridge
///
/// Owning the channels is the claim: two drivers cannot share a bridge.
pub struct HBridgeMotor<F, B, C> {
    forward: F,
    backward: B,
    clock: C,
    config: MotorConfig,
    ramp: SpeedRamp,
    /// Timestamp of the last ramp step
    last_step: Instant,
    enabled: bool,
}

impl<F, B, C> HBridgeMotor<F, B, C>
where
    F: PwmChannel,
    B: PwmChannel,
    C: Clock,
{
    /// Create a new driver with the default configuration
    pub fn new(forward: F, backward: B, clock: C) -> Self {
        Self::with_config(forward, backward, clock, MotorConfig::default())
    }

    /// Create a new driver with an explicit configuration
    pub fn with_config(forward: F, backward: B, clock: C, config: MotorConfig) -> Self {
        let last_step = clock.now();
        Self {
            forward,
            backward,
            clock,
            config,
            ramp: SpeedRamp::new(),
            last_step,
            enabled: false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    /// Get access to the forward channel
    pub fn forward(&self) -> &F {
        &self.forward
    }

    /// Get access to the backward channel
    pub fn backward(&self) -> &B {
        &self.backward
    }

    /// Consume the driver and return the owned hardware
    pub fn release(self) -> (F, B, C) {
        (self.forward, self.backward, self.clock)
    }

    /// Pacing interval for the current acceleration setting
    fn step_interval_us(&self) -> u32 {
        step_interval_in(
            self.ramp.acceleration(),
            self.config.min_step_interval_us,
            self.config.max_step_interval_us,
        )
    }

    /// Route the commanded speed onto the two bridge halves
    ///
    /// Exactly one half carries a non-zero duty at any time.
    fn apply_duty(&mut self) {
        let speed = self.ramp.current();
        if speed < 0 {
            self.forward.set_duty_percent(0);
            self.backward.set_duty_percent(speed.unsigned_abs());
        } else {
            self.forward.set_duty_percent(speed as u8);
            self.backward.set_duty_percent(0);
        }
    }
}

impl<F, B, C> RampMotor for HBridgeMotor<F, B, C>
where
    F: PwmChannel,
    B: PwmChannel,
    C: Clock,
{
    fn begin(&mut self) -> Result<(), MotorError> {
        self.forward
            .enable(self.config.pwm_frequency_hz)
            .map_err(|_| MotorError::Config)?;
        self.backward
            .enable(self.config.pwm_frequency_hz)
            .map_err(|_| MotorError::Config)?;
        self.ramp.set_acceleration(dromos_core::motion::MAX_ACCELERATION);
        self.enabled = true;
        Ok(())
    }

    fn end(&mut self) -> Result<(), MotorError> {
        self.forward.disable().map_err(|_| MotorError::Config)?;
        self.backward.disable().map_err(|_| MotorError::Config)?;
        self.enabled = false;
        Ok(())
    }

    fn set_speed(&mut self, percent: i8) {
        self.ramp.set_target(percent);
    }

    fn set_acceleration(&mut self, percent: u8) {
        self.ramp.set_acceleration(percent);
    }

    fn update(&mut self) {
        let now = self.clock.now();
        if now.duration_since(self.last_step) > self.step_interval_us() as u64 {
            self.last_step = now;
            // State first, hardware second: an observer reading state right
            // after update() sees an output consistent with it.
            self.ramp.step();
            self.apply_duty();
        }
    }

    fn stop(&mut self) -> bool {
        self.ramp.reset();
        self.enabled = false;
        self.enabled
    }

    fn is_updating(&self) -> bool {
        self.ramp.is_ramping()
    }

    fn read(&self) -> i8 {
        self.ramp.current()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[derive(Default)]
    struct MockPwm {
        enabled: bool,
        frequency_hz: u32,
        duty: u8,
        fail_enable: bool,
    }

    impl PwmChannel for MockPwm {
        fn enable(&mut self, frequency_hz: u32) -> Result<(), dromos_hal::PwmError> {
            if self.fail_enable {
                return Err(dromos_hal::PwmError::Unavailable);
            }
            self.enabled = true;
            self.frequency_hz = frequency_hz;
            self.duty = 0;
            Ok(())
        }

        fn set_duty_percent(&mut self, percent: u8) {
            self.duty = percent.min(100);
        }

        fn disable(&mut self) -> Result<(), dromos_hal::PwmError> {
            self.enabled = false;
            Ok(())
        }
    }

    struct MockClock<'a>(&'a Cell<u64>);

    impl Clock for MockClock<'_> {
        fn now(&self) -> Instant {
            Instant::from_micros(self.0.get())
        }
    }

    fn motor(time: &Cell<u64>) -> HBridgeMotor<MockPwm, MockPwm, MockClock<'_>> {
        HBridgeMotor::with_config(
            MockPwm::default(),
            MockPwm::default(),
            MockClock(time),
            MotorConfig::default(),
        )
    }

    #[test]
    fn begin_arms_both_channels() {
        let time = Cell::new(0);
        let mut motor = motor(&time);
        motor.begin().unwrap();
        assert!(motor.is_enabled());
        assert!(motor.forward().enabled);
        assert!(motor.backward().enabled);
        assert_eq!(motor.forward().frequency_hz, 33_000);
        assert_eq!(motor.forward().duty, 0);
    }

    #[test]
    fn begin_surfaces_config_error() {
        let time = Cell::new(0);
        let mut motor = HBridgeMotor::with_config(
            MockPwm {
                fail_enable: true,
                ..MockPwm::default()
            },
            MockPwm::default(),
            MockClock(&time),
            MotorConfig::default(),
        );
        assert_eq!(motor.begin(), Err(MotorError::Config));
        assert!(!motor.is_enabled());
    }

    #[test]
    fn update_is_time_gated() {
        let time = Cell::new(0);
        let mut motor = motor(&time);
        motor.begin().unwrap();
        motor.set_speed(5);

        // Interval (100us at max acceleration) has not elapsed
        motor.update();
        assert_eq!(motor.read(), 0);
        assert!(!motor.is_updating());

        time.set(150);
        motor.update();
        assert_eq!(motor.read(), 1);
        assert!(motor.is_updating());
        assert_eq!(motor.forward().duty, 1);

        // Same tick again: gate closed, no second step
        motor.update();
        assert_eq!(motor.read(), 1);
    }

    #[test]
    fn negative_speed_drives_backward_channel() {
        let time = Cell::new(0);
        let mut motor = motor(&time);
        motor.begin().unwrap();
        motor.set_speed(-3);

        for tick in 1..=3u64 {
            time.set(tick * 150);
            motor.update();
        }
        assert_eq!(motor.read(), -3);
        assert_eq!(motor.forward().duty, 0);
        assert_eq!(motor.backward().duty, 3);
    }

    #[test]
    fn acceleration_paces_the_ramp() {
        let time = Cell::new(0);
        let mut motor = motor(&time);
        motor.begin().unwrap();
        motor.set_acceleration(0); // slowest: 50ms interval
        motor.set_speed(10);

        time.set(10_000);
        motor.update();
        assert_eq!(motor.read(), 0);

        time.set(50_001);
        motor.update();
        assert_eq!(motor.read(), 1);
    }

    #[test]
    fn stop_is_immediate_and_disables() {
        let time = Cell::new(0);
        let mut motor = motor(&time);
        motor.begin().unwrap();
        motor.set_speed(40);
        for tick in 1..=5u64 {
            time.set(tick * 150);
            motor.update();
        }
        assert!(motor.read() > 0);

        assert!(!motor.stop());
        assert_eq!(motor.read(), 0);
        assert!(!motor.is_updating());
        assert!(!motor.is_enabled());

        // The zeroed speed reaches the bridge on the next qualifying tick
        time.set(time.get() + 150);
        motor.update();
        assert_eq!(motor.forward().duty, 0);
        assert_eq!(motor.backward().duty, 0);
    }

    #[test]
    fn end_disables_channels() {
        let time = Cell::new(0);
        let mut motor = motor(&time);
        motor.begin().unwrap();
        motor.end().unwrap();
        assert!(!motor.is_enabled());
        assert!(!motor.forward().enabled);
        assert!(!motor.backward().enabled);
    }

    #[test]
    fn release_returns_hardware() {
        let time = Cell::new(0);
        let mut motor = motor(&time);
        motor.begin().unwrap();
        let (forward, backward, _clock) = motor.release();
        assert!(forward.enabled);
        assert!(backward.enabled);
    }
}
