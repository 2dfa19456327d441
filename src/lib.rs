//! Thermostrip firmware library.
//!
//! Exposes the control loop and its drivers for integration testing.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module; the host build runs against simulation stubs.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod colour;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
