//! ESP32 delay adapter.
//!
//! Implements [`DelayNs`] for the control loop and the MAX6675 bit-bang
//! driver.
//!
//! - **`target_os = "espidf"`**: sub-millisecond waits busy-spin in the
//!   ROM (`Ets`); anything longer yields to FreeRTOS so the idle task
//!   keeps feeding the task watchdog during multi-second holds.
//! - **`not(target_os = "espidf")`**: `std::thread::sleep`, for host
//!   simulation.

use embedded_hal::delay::DelayNs;

/// Delay provider for the ESP32 platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Esp32Delay;

impl Esp32Delay {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl DelayNs for Esp32Delay {
    fn delay_ns(&mut self, ns: u32) {
        esp_idf_hal::delay::Ets::delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        if us >= 1_000 {
            esp_idf_hal::delay::FreeRtos::delay_ms(us / 1_000);
            esp_idf_hal::delay::Ets::delay_us(us % 1_000);
        } else {
            esp_idf_hal::delay::Ets::delay_us(us);
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }
}

#[cfg(not(target_os = "espidf"))]
impl DelayNs for Esp32Delay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
