//! Application core: mode selection, colour policies, and the control loop.
//!
//! Everything here talks to hardware only through the port traits in
//! [`ports`] plus an [`embedded_hal::delay::DelayNs`] for blocking holds,
//! so the whole loop runs on the host against recording mocks.

pub mod controller;
pub mod events;
pub mod mode;
pub mod output;
pub mod policies;
pub mod ports;
