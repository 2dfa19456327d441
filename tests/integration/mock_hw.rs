//! Mock hardware adapter for integration tests.
//!
//! Records every strip write, thermocouple read and delay on one shared
//! timeline so tests can assert on ordering as well as content without
//! touching real GPIO/PWM registers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use thermostrip::app::events::AppEvent;
use thermostrip::app::ports::{ActuatorPort, EventSink, SensorPort, SwitchLevels};

// ── Timeline record ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ReadTemp(f32),
    Write { r: u32, g: u32, b: u32 },
    Delay(u32),
}

pub type Timeline = Rc<RefCell<Vec<Call>>>;

/// Switch levels for `mode` on active-low wiring (switch 3 = bit 2).
pub fn levels_for(mode: u8) -> SwitchLevels {
    [mode & 0b001 == 0, mode & 0b010 == 0, mode & 0b100 == 0]
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    timeline: Timeline,
    temps: VecDeque<f32>,
    brightness: VecDeque<u16>,
    /// Returned once the scripted readings run out.
    pub fallback_temp: f32,
    /// Returned once the scripted brightness readings run out.
    pub brightness_raw: u16,
    pub switches: SwitchLevels,
}

#[allow(dead_code)]
impl MockHardware {
    /// Full brightness (raw equals the default full scale), mode 0.
    pub fn new() -> Self {
        Self {
            timeline: Rc::new(RefCell::new(Vec::new())),
            temps: VecDeque::new(),
            brightness: VecDeque::new(),
            fallback_temp: 72.0,
            brightness_raw: 4096,
            switches: levels_for(0),
        }
    }

    pub fn with_mode(mut self, mode: u8) -> Self {
        self.switches = levels_for(mode);
        self
    }

    pub fn set_mode(&mut self, mode: u8) {
        self.switches = levels_for(mode);
    }

    /// Queue thermocouple readings, consumed in order.
    pub fn script_temps(&mut self, temps: &[f32]) {
        self.temps.extend(temps.iter().copied());
    }

    /// Queue brightness pot readings, one consumed per read.
    pub fn script_brightness(&mut self, raw: &[u16]) {
        self.brightness.extend(raw.iter().copied());
    }

    /// Delay provider writing onto the same timeline.
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            timeline: Rc::clone(&self.timeline),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.timeline.borrow().clone()
    }

    pub fn clear(&self) {
        self.timeline.borrow_mut().clear();
    }

    pub fn writes(&self) -> Vec<(u32, u32, u32)> {
        self.timeline
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Write { r, g, b } => Some((*r, *g, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.timeline
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn temp_reads(&self) -> usize {
        self.timeline
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::ReadTemp(_)))
            .count()
    }

    pub fn last_write(&self) -> Option<(u32, u32, u32)> {
        self.writes().last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_fahrenheit(&mut self) -> f32 {
        let t = self.temps.pop_front().unwrap_or(self.fallback_temp);
        self.timeline.borrow_mut().push(Call::ReadTemp(t));
        t
    }

    fn read_brightness_raw(&mut self) -> u16 {
        self.brightness.pop_front().unwrap_or(self.brightness_raw)
    }

    fn read_switch_levels(&mut self) -> SwitchLevels {
        self.switches
    }
}

impl ActuatorPort for MockHardware {
    fn max_duty(&self) -> u32 {
        255
    }

    fn write_duty(&mut self, r: u32, g: u32, b: u32) {
        self.timeline.borrow_mut().push(Call::Write { r, g, b });
    }
}

// ── MockDelay ─────────────────────────────────────────────────

pub struct MockDelay {
    timeline: Timeline,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.timeline.borrow_mut().push(Call::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timeline.borrow_mut().push(Call::Delay(ms));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ModeChanged { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
