//! GPIO / peripheral pin assignments for the Thermostrip controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// RGB strip (three MOSFET low-side switches, one per colour)
// ---------------------------------------------------------------------------

pub const STRIP_R_GPIO: i32 = 27;
pub const STRIP_G_GPIO: i32 = 13;
pub const STRIP_B_GPIO: i32 = 33;

// ---------------------------------------------------------------------------
// Potentiometers: analog (ADC1, input-only pins)
// ---------------------------------------------------------------------------

/// Brightness potentiometer wiper.  ADC1 channel 7 (GPIO 35 on ESP32).
pub const BRIGHTNESS_ADC_GPIO: i32 = 35;
/// Spare potentiometer, read but not bound to any colour policy.
/// ADC1 channel 6 (GPIO 34 on ESP32).
pub const AUX_POT_ADC_GPIO: i32 = 34;

// ---------------------------------------------------------------------------
// MAX6675 thermocouple amplifier (bit-banged SPI, read-only)
// ---------------------------------------------------------------------------

/// Serial data out from the MAX6675 (SO).
pub const THERMO_DO_GPIO: i32 = 23;
/// Chip select, active LOW.
pub const THERMO_CS_GPIO: i32 = 19;
/// Serial clock.
pub const THERMO_CLK_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Mode switches (internal pull-ups enabled)
// ---------------------------------------------------------------------------

pub const SWITCH_1_GPIO: i32 = 4;
/// Shares the UART2 RX pad (RX2).
pub const SWITCH_2_GPIO: i32 = 16;
/// Shares the UART2 TX pad (TX2).
pub const SWITCH_3_GPIO: i32 = 17;

/// When `true`, a closed switch pulls its input LOW.
pub const SWITCH_ACTIVE_LOW: bool = true;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// Highest duty value representable at [`PWM_RESOLUTION_BITS`].
pub const PWM_MAX_DUTY: u32 = (1 << PWM_RESOLUTION_BITS) - 1;
/// LEDC frequency for the strip channels (1 kHz).
pub const STRIP_PWM_FREQ_HZ: u32 = 1_000;

// ---------------------------------------------------------------------------
// ADC configuration
// ---------------------------------------------------------------------------

/// ADC1 channel wired to [`BRIGHTNESS_ADC_GPIO`].
pub const ADC1_CH_BRIGHTNESS: u32 = 7;
/// ADC1 channel wired to [`AUX_POT_ADC_GPIO`].
pub const ADC1_CH_AUX_POT: u32 = 6;
/// 12-bit oneshot conversions: raw readings fall in `0..4096`.
pub const ADC_FULL_SCALE: u16 = 4096;
