//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements         | Connects to                     |
//! |------------|--------------------|---------------------------------|
//! | `hardware` | SensorPort         | MAX6675, ADC1, switch GPIOs     |
//! |            | ActuatorPort       | LEDC channels driving the strip |
//! | `log_sink` | EventSink          | Serial log output               |
//! | `time`     | DelayNs            | FreeRTOS / ROM busy-wait delays |

pub mod hardware;
pub mod log_sink;
pub mod time;
