//! Ultrasonic trigger/echo range sensor
//!
//! Classic HC-SR04 style ranging: raise the trigger line for at least 10µs,
//! then time how long the echo line stays high. The trigger handshake here
//! is a non-blocking substitute for a busy-wait pulse generator: each
//! update drives the edges that are due by now and leaves the rest to the
//! following calls, so the function is safe to call on every iteration of a
//! tight loop. When called faster than the gate intervals, one full
//! handshake spans multiple updates.
//!
//! The echo measurement itself is the shim's bounded blocking primitive
//! ([`PulseMeter`]); a timed-out measurement reads as a distance of zero,
//! which is indistinguishable from a true zero-range reading.

use dromos_core::config::SonarConfig;
use dromos_core::traits::{RangeSensor, SonarMode};
use dromos_hal::gpio::OutputPin;
use dromos_hal::time::{Clock, Instant, PulseMeter};

/// Speed of sound in air, m/s
pub const SPEED_OF_SOUND_M_S: u32 = 343;

/// Convert an echo pulse duration to a one-way distance in centimeters
///
/// The pulse covers the round trip, so the result is halved:
/// `cm = µs * 343 / 10_000 / 2`.
pub const fn distance_from_pulse_cm(pulse_us: u32) -> u32 {
    (pulse_us as u64 * SPEED_OF_SOUND_M_S as u64 / 20_000) as u32
}

/// Ultrasonic range sensor on a trigger/echo pin pair
pub struct UltrasonicSensor<T, E, C> {
    trigger: T,
    echo: E,
    clock: C,
    config: SonarConfig,
    mode: SonarMode,
    /// Measurement requested and not yet taken (manual mode only)
    status: bool,
    /// Timestamp of the last trigger edge
    last_edge: Instant,
    distance_cm: u16,
}

impl<T, E, C> UltrasonicSensor<T, E, C>
where
    T: OutputPin,
    E: PulseMeter,
    C: Clock,
{
    /// Create a new sensor with the default configuration (manual mode)
    pub fn new(trigger: T, echo: E, clock: C) -> Self {
        Self::with_config(trigger, echo, clock, SonarConfig::default())
    }

    /// Create a new sensor with an explicit configuration
    pub fn with_config(trigger: T, echo: E, clock: C, config: SonarConfig) -> Self {
        let last_edge = clock.now();
        let mode = config.mode;
        Self {
            trigger,
            echo,
            clock,
            config,
            mode,
            status: false,
            last_edge,
            distance_cm: 0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SonarConfig {
        &self.config
    }

    /// Consume the driver and return the owned hardware
    pub fn release(self) -> (T, E, C) {
        (self.trigger, self.echo, self.clock)
    }

    /// One trigger/measure cycle
    ///
    /// Drives whichever trigger edges are due, then measures the echo and
    /// stores the clamped distance.
    fn run_cycle(&mut self) {
        self.trigger.set_low();
        let now = self.clock.now();
        if now.duration_since(self.last_edge) > self.config.settle_us as u64 {
            self.last_edge = now;
            self.trigger.set_high();
        }
        let now = self.clock.now();
        if now.duration_since(self.last_edge) > self.config.pulse_us as u64 {
            self.last_edge = now;
            self.trigger.set_low();
        }

        // Timeout reads as zero range
        let pulse_us = self.echo.measure_high_us().unwrap_or(0);
        self.distance_cm =
            distance_from_pulse_cm(pulse_us).min(self.config.max_range_cm as u32) as u16;
    }
}

impl<T, E, C> RangeSensor for UltrasonicSensor<T, E, C>
where
    T: OutputPin,
    E: PulseMeter,
    C: Clock,
{
    fn set_mode(&mut self, mode: SonarMode) {
        self.mode = mode;
    }

    fn mode(&self) -> SonarMode {
        self.mode
    }

    fn start_measurement(&mut self) {
        if self.mode == SonarMode::Manual {
            self.status = true;
        }
    }

    fn update(&mut self) {
        match self.mode {
            SonarMode::Automatic => self.run_cycle(),
            SonarMode::Manual => {
                if self.status {
                    self.run_cycle();
                    self.status = false;
                }
            }
        }
    }

    fn is_updating(&self) -> bool {
        self.status
    }

    fn distance_cm(&self) -> u16 {
        self.distance_cm
    }
}
