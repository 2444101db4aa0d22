//! Dromos Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the Dromos drivers are written
//! against. Chip-specific implementations (RP2040, STM32, ...) live out of
//! tree; the drivers only ever see these interfaces.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (dromos-drivers)               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dromos-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Chip HAL (out of tree)                 │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pwm::PwmChannel`] - Duty-cycle output
//! - [`time::Clock`], [`time::PulseMeter`] - Monotonic time and pulse timing

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use pwm::{PwmChannel, PwmError};
pub use time::{Clock, Instant, PulseMeter};
