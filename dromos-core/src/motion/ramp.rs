//! Speed ramp for smooth acceleration toward a setpoint
//!
//! The ramp is a fixed-step, time-gated integrator rather than a control
//! loop: the commanded speed moves by exactly one unit per pacing interval,
//! and the acceleration parameter only controls how short that interval is.
//! This keeps the ramp monotonic and linear in time, with O(1) state and no
//! floating-point accumulation, and it can never overshoot the setpoint.
//!
//! The ramp itself is clock-free. A driver owns one `SpeedRamp` next to a
//! clock handle and calls [`SpeedRamp::step`] whenever
//! [`SpeedRamp::interval_us`] has elapsed.

/// Minimum commanded speed in percent (full backward)
pub const MIN_SPEED: i8 = -100;

/// Maximum commanded speed in percent (full forward)
pub const MAX_SPEED: i8 = 100;

/// Slowest ramp setting
pub const MIN_ACCELERATION: u8 = 0;

/// Fastest ramp setting (one step per minimum interval)
pub const MAX_ACCELERATION: u8 = 100;

/// Pacing interval at maximum acceleration, in microseconds
pub const MIN_STEP_INTERVAL_US: u32 = 100;

/// Pacing interval at minimum acceleration, in microseconds
pub const MAX_STEP_INTERVAL_US: u32 = 50_000;

/// Map an acceleration percentage onto a step pacing interval
///
/// Linear map from `[0, 100]` onto `[max_us, min_us]`: higher acceleration
/// means a shorter interval and therefore a faster ramp.
pub const fn step_interval_in(acceleration: u8, min_us: u32, max_us: u32) -> u32 {
    let accel = if acceleration > MAX_ACCELERATION {
        MAX_ACCELERATION
    } else {
        acceleration
    };
    let span = max_us.saturating_sub(min_us) as u64;
    max_us - (span * accel as u64 / MAX_ACCELERATION as u64) as u32
}

/// [`step_interval_in`] over the default interval bounds
pub const fn step_interval_us(acceleration: u8) -> u32 {
    step_interval_in(acceleration, MIN_STEP_INTERVAL_US, MAX_STEP_INTERVAL_US)
}

/// Ramp state for one motor
///
/// Holds the setpoint, the currently commanded speed and the acceleration
/// setting. `ramping` is recomputed on every step as a pure function of the
/// two speeds; it is never stored independently of them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedRamp {
    /// Desired speed, sign is direction
    setpoint: i8,
    /// Currently commanded speed, mutated only by [`SpeedRamp::step`]
    current: i8,
    /// Ramp rate setting (0-100)
    acceleration: u8,
    /// True exactly while `current` is still moving toward `setpoint`
    ramping: bool,
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeedRamp {
    /// Create a stopped ramp at maximum acceleration
    pub const fn new() -> Self {
        Self {
            setpoint: 0,
            current: 0,
            acceleration: MAX_ACCELERATION,
            ramping: false,
        }
    }

    /// Set the target speed, clamped to `[-100, 100]`
    pub fn set_target(&mut self, percent: i8) {
        self.setpoint = percent.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Set the acceleration, clamped to `[0, 100]`
    pub fn set_acceleration(&mut self, percent: u8) {
        self.acceleration = percent.min(MAX_ACCELERATION);
    }

    /// The target speed
    pub fn target(&self) -> i8 {
        self.setpoint
    }

    /// The currently commanded speed
    pub fn current(&self) -> i8 {
        self.current
    }

    /// The acceleration setting
    pub fn acceleration(&self) -> u8 {
        self.acceleration
    }

    /// Check if the ramp is still moving toward the setpoint
    pub fn is_ramping(&self) -> bool {
        self.ramping
    }

    /// The pacing interval for the current acceleration setting
    pub fn interval_us(&self) -> u32 {
        step_interval_us(self.acceleration)
    }

    /// Advance the commanded speed by at most one unit toward the setpoint
    ///
    /// Returns the commanded speed after the step. The ramping flag is
    /// derived from the speeds before the move, so it goes false on the
    /// first step *after* the setpoint has been reached - callers observe
    /// `is_ramping() == true` through the tick that lands on the target.
    pub fn step(&mut self) -> i8 {
        if self.setpoint != self.current {
            self.ramping = true;
            if self.setpoint > self.current {
                self.current += 1;
            } else {
                self.current -= 1;
            }
        } else {
            self.ramping = false;
        }
        self.current
    }

    /// Immediately zero both speeds and restore maximum acceleration
    pub fn reset(&mut self) {
        self.setpoint = 0;
        self.current = 0;
        self.acceleration = MAX_ACCELERATION;
        self.ramping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_endpoints() {
        assert_eq!(step_interval_us(MIN_ACCELERATION), MAX_STEP_INTERVAL_US);
        assert_eq!(step_interval_us(MAX_ACCELERATION), MIN_STEP_INTERVAL_US);
    }

    #[test]
    fn interval_monotonically_decreasing() {
        let mut last = step_interval_us(0);
        for accel in 1..=100 {
            let interval = step_interval_us(accel);
            assert!(interval <= last, "interval grew at accel {accel}");
            last = interval;
        }
    }

    #[test]
    fn interval_clamps_overrange_acceleration() {
        assert_eq!(step_interval_us(200), MIN_STEP_INTERVAL_US);
    }

    #[test]
    fn setters_clamp() {
        let mut ramp = SpeedRamp::new();
        ramp.set_target(i8::MIN);
        assert_eq!(ramp.target(), MIN_SPEED);
        ramp.set_target(i8::MAX);
        assert_eq!(ramp.target(), MAX_SPEED);
        ramp.set_acceleration(255);
        assert_eq!(ramp.acceleration(), MAX_ACCELERATION);
    }

    #[test]
    fn steps_by_one_toward_target() {
        let mut ramp = SpeedRamp::new();
        ramp.set_target(3);
        assert_eq!(ramp.step(), 1);
        assert_eq!(ramp.step(), 2);
        assert_eq!(ramp.step(), 3);
        assert!(ramp.is_ramping());
        // One more step to observe the target was reached
        assert_eq!(ramp.step(), 3);
        assert!(!ramp.is_ramping());
    }

    #[test]
    fn steps_down_through_zero() {
        let mut ramp = SpeedRamp::new();
        ramp.set_target(-2);
        assert_eq!(ramp.step(), -1);
        assert_eq!(ramp.step(), -2);
        ramp.set_target(0);
        assert_eq!(ramp.step(), -1);
        assert_eq!(ramp.step(), 0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut ramp = SpeedRamp::new();
        ramp.set_target(50);
        ramp.set_acceleration(10);
        ramp.step();
        ramp.reset();
        assert_eq!(ramp.target(), 0);
        assert_eq!(ramp.current(), 0);
        assert_eq!(ramp.acceleration(), MAX_ACCELERATION);
        assert!(!ramp.is_ramping());
    }

    #[test]
    fn retarget_mid_ramp_reverses() {
        let mut ramp = SpeedRamp::new();
        ramp.set_target(10);
        for _ in 0..5 {
            ramp.step();
        }
        assert_eq!(ramp.current(), 5);
        ramp.set_target(-10);
        assert_eq!(ramp.step(), 4);
        assert!(ramp.is_ramping());
    }
}
