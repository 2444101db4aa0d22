//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dromos-core, written against the dromos-hal shim:
//!
//! - H-bridge DC motor with ramped speed control
//! - Ultrasonic trigger/echo range sensor

#![no_std]
#![deny(unsafe_code)]

pub mod motor;
pub mod sensor;
