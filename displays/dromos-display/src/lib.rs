//! Display abstraction and telemetry formatting for Dromos
//!
//! This crate provides:
//! - `CharacterDisplay` trait for text-mode panels (character LCD, OLED
//!   in text mode, ...)
//! - Fixed-width numeric formatting for telemetry readouts
//! - `ValueCell`, a screen position that redraws only when its value
//!   changes
//!
//! The drivers do not depend on this crate; it sits next to them and
//! consumes their readings (speed, distance) for display.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod format;
pub mod panel;

// Re-export key types
pub use backend::{CharacterDisplay, DisplayError};
pub use format::{format_fixed, FORMATTED_LEN, MAX_DIGITS};
pub use panel::ValueCell;
