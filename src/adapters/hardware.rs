//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the thermocouple, both potentiometers, the switch bank and the
//! strip, exposing them through [`SensorPort`] and [`ActuatorPort`].  On
//! non-espidf targets the underlying drivers use cfg-gated simulation
//! stubs, so the adapter itself runs on the host.

use log::warn;

use crate::adapters::time::Esp32Delay;
use crate::app::ports::{ActuatorPort, SensorPort, SwitchLevels};
use crate::drivers::gpio::{GpioInput, GpioOutput};
use crate::drivers::max6675::Max6675;
use crate::drivers::rgb_strip::RgbStrip;
use crate::drivers::switches::ModeSwitches;
use crate::error::Result;
use crate::pins;
use crate::sensors::potentiometer::Potentiometer;

/// MAX6675 on bit-banged GPIOs: CLK, CS, DO.
pub type Thermocouple = Max6675<GpioOutput, GpioOutput, GpioInput, Esp32Delay>;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    thermocouple: Thermocouple,
    brightness: Potentiometer,
    aux: Potentiometer,
    switches: ModeSwitches<GpioInput>,
    strip: RgbStrip,
}

impl HardwareAdapter {
    pub fn new(
        thermocouple: Thermocouple,
        brightness: Potentiometer,
        aux: Potentiometer,
        switches: ModeSwitches<GpioInput>,
        strip: RgbStrip,
    ) -> Self {
        Self {
            thermocouple,
            brightness,
            aux,
            switches,
            strip,
        }
    }

    /// Build the adapter on the board's pin map.  Call after
    /// [`init_peripherals`](crate::drivers::hw_init::init_peripherals).
    pub fn from_pins() -> Result<Self> {
        let thermocouple = Max6675::new(
            GpioOutput::new(pins::THERMO_CLK_GPIO),
            GpioOutput::new(pins::THERMO_CS_GPIO),
            GpioInput::new(pins::THERMO_DO_GPIO),
            Esp32Delay::new(),
        )?;
        let switches = ModeSwitches::new([
            GpioInput::new(pins::SWITCH_1_GPIO),
            GpioInput::new(pins::SWITCH_2_GPIO),
            GpioInput::new(pins::SWITCH_3_GPIO),
        ]);
        Ok(Self::new(
            thermocouple,
            Potentiometer::new(pins::BRIGHTNESS_ADC_GPIO, pins::ADC1_CH_BRIGHTNESS),
            Potentiometer::new(pins::AUX_POT_ADC_GPIO, pins::ADC1_CH_AUX_POT),
            switches,
            RgbStrip::new(),
        ))
    }

    /// Second potentiometer.  Wired and sampled but not mapped to any
    /// behaviour yet.
    pub fn read_aux_raw(&self) -> u16 {
        self.aux.read_raw()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    /// A failed conversion (open thermocouple, bus fault) reads as NaN,
    /// which every policy treats as cold.
    fn read_fahrenheit(&mut self) -> f32 {
        match self.thermocouple.read_fahrenheit() {
            Ok(f) => f,
            Err(e) => {
                warn!("thermocouple: {}", e);
                f32::NAN
            }
        }
    }

    fn read_brightness_raw(&mut self) -> u16 {
        self.brightness.read_raw()
    }

    fn read_switch_levels(&mut self) -> SwitchLevels {
        self.switches.read_levels()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn max_duty(&self) -> u32 {
        self.strip.max_duty()
    }

    fn write_duty(&mut self, r: u32, g: u32, b: u32) {
        self.strip.set_duty(r, g, b);
    }
}
