//! Thermostrip firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter        LogEventSink       Esp32Delay    │
//! │  (Sensor+Actuator)      (EventSink)        (DelayNs)     │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          Controller (pure logic)                   │  │
//! │  │  switches · history · colour policies · fades      │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use thermostrip::adapters::hardware::HardwareAdapter;
use thermostrip::adapters::log_sink::LogEventSink;
use thermostrip::adapters::time::Esp32Delay;
use thermostrip::app::controller::Controller;
use thermostrip::config::ControllerConfig;
use thermostrip::drivers::hw_init;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Thermostrip v{}                  ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = ControllerConfig::default();
    config.validate()?;
    match serde_json::to_string(&config) {
        Ok(json) => info!("config: {}", json),
        Err(e) => info!("config: {:?} (json: {})", config, e),
    }

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Nothing to drive without the LEDC and ADC units; halt here
        // and let the task watchdog reset the chip.
        error!("HAL init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let mut hw = HardwareAdapter::from_pins()?;
    info!("aux pot at boot: {}", hw.read_aux_raw());

    // ── 4. Control loop ───────────────────────────────────────
    let mut delay = Esp32Delay::new();
    let mut sink = LogEventSink::new();
    let mut controller = Controller::new(config);
    controller.start(&mut delay, &mut sink);
    controller.run(&mut hw, &mut delay, &mut sink)
}
