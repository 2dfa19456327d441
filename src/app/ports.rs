//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (sensors, PWM outputs, event sinks) implement these
//! traits.  The [`Controller`](super::controller::Controller) consumes them
//! via generics, so the domain core never touches hardware directly.
//! Blocking sleeps go through [`embedded_hal::delay::DelayNs`] rather than
//! a port of our own.
//!
//! None of the ports return errors: the loop has no recovery path, so
//! adapters log faults and hand back a degraded value instead.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Raw pin levels of the three mode switches, switch 1 first.
/// `true` = pin reads HIGH.
pub type SwitchLevels = [bool; 3];

/// Read-side port: the domain calls this to obtain input data.
pub trait SensorPort {
    /// One blocking thermocouple conversion in °F.  A faulted sensor
    /// returns `f32::NAN`.
    fn read_fahrenheit(&mut self) -> f32;

    /// Raw brightness potentiometer reading (12-bit, `0..4096`).
    fn read_brightness_raw(&mut self) -> u16;

    /// Raw levels of switches 1, 2 and 3.
    fn read_switch_levels(&mut self) -> SwitchLevels;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the strip.
pub trait ActuatorPort {
    /// Largest duty value the PWM channels accept.
    fn max_duty(&self) -> u32;

    /// Write duty levels to the red, green and blue channels.
    /// Values are already clamped to `0..=max_duty()`.
    fn write_duty(&mut self, r: u32, g: u32, b: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
