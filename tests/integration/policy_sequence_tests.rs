//! Output sequences produced by each colour policy: exact strip writes
//! and holds, in order.

use thermostrip::app::controller::Controller;
use thermostrip::app::events::AppEvent;
use thermostrip::colour::PALETTE;
use thermostrip::config::ControllerConfig;

use crate::mock_hw::{Call, MockHardware, RecordingSink};

fn run_once(hw: &mut MockHardware, config: ControllerConfig) -> RecordingSink {
    let mut delay = hw.delay();
    let mut sink = RecordingSink::new();
    Controller::new(config).run_iteration(hw, &mut delay, &mut sink);
    sink
}

// ── Mode 0: bounded-range gradient with blink ─────────────────

#[test]
fn midpoint_blinks_mixed_colour() {
    let mut hw = MockHardware::new().with_mode(0);
    hw.script_temps(&[75.0, 75.0]);
    let sink = run_once(&mut hw, ControllerConfig::default());

    assert_eq!(
        hw.calls(),
        vec![
            Call::ReadTemp(75.0),
            Call::Delay(500),
            Call::ReadTemp(75.0),
            Call::Delay(500),
            Call::Write { r: 0, g: 0, b: 0 },
            Call::Delay(400),
            Call::Write { r: 128, g: 128, b: 0 },
            Call::Delay(400),
        ]
    );
    assert!(sink.events.contains(&AppEvent::Gradient {
        fahrenheit: 75.0,
        colour: (128, 128, 0),
        blink_ms: 400
    }));
}

#[test]
fn hot_reading_blinks_red_at_base_rate() {
    let mut hw = MockHardware::new().with_mode(0);
    hw.script_temps(&[90.0, 90.0]);
    run_once(&mut hw, ControllerConfig::default());

    assert_eq!(hw.writes(), vec![(0, 0, 0), (255, 0, 0)]);
    assert_eq!(hw.delays(), vec![500, 500, 200, 200]);
}

#[test]
fn cold_reading_is_steady_green() {
    let mut hw = MockHardware::new().with_mode(0);
    hw.script_temps(&[60.0, 60.0]);
    run_once(&mut hw, ControllerConfig::default());

    assert_eq!(hw.writes(), vec![(0, 255, 0)]);
    assert_eq!(hw.delays(), vec![500, 500]);
}

#[test]
fn colour_follows_fresh_sample_not_loop_sample() {
    let mut hw = MockHardware::new().with_mode(0);
    hw.script_temps(&[60.0, 90.0]);
    run_once(&mut hw, ControllerConfig::default());

    assert_eq!(hw.last_write(), Some((255, 0, 0)));
}

#[test]
fn just_above_cold_bound_hold_is_capped() {
    let mut hw = MockHardware::new().with_mode(0);
    hw.script_temps(&[70.0001, 70.0001]);
    let config = ControllerConfig::default();
    let cap = config.max_blink_ms();
    run_once(&mut hw, config);

    assert_eq!(hw.delays(), vec![500, 500, cap, cap]);
}

#[test]
fn failed_reading_shows_green() {
    let mut hw = MockHardware::new().with_mode(0);
    hw.script_temps(&[f32::NAN, f32::NAN]);
    run_once(&mut hw, ControllerConfig::default());

    assert_eq!(hw.writes(), vec![(0, 255, 0)]);
}

// ── Mode 2: palette cycle ─────────────────────────────────────

#[test]
fn palette_cycle_visits_every_entry_and_returns_to_first() {
    let mut hw = MockHardware::new().with_mode(2);
    run_once(&mut hw, ControllerConfig::default());

    let per_fade = Controller::new(ControllerConfig::default())
        .output()
        .writes_per_fade();
    assert_eq!(per_fade, 101);

    let writes = hw.writes();
    assert_eq!(writes.len(), PALETTE.len() * 101);
    assert_eq!(writes.first(), Some(&(255, 0, 0)));
    assert_eq!(writes.last(), Some(&(255, 0, 0)));

    // Each transition starts on one entry and lands exactly on the next.
    for (i, chunk) in writes.chunks(101).enumerate() {
        let to = PALETTE[(i + 1) % PALETTE.len()].colour;
        let from = PALETTE[i].colour;
        assert_eq!(chunk[0], (u32::from(from.0), u32::from(from.1), u32::from(from.2)));
        assert_eq!(chunk[100], (u32::from(to.0), u32::from(to.1), u32::from(to.2)));
    }
}

#[test]
fn palette_cycle_holds_each_step() {
    let mut hw = MockHardware::new().with_mode(2);
    run_once(&mut hw, ControllerConfig::default());

    let delays = hw.delays();
    assert_eq!(delays[0], 500);
    assert_eq!(delays.len(), 1 + PALETTE.len() * 101);
    assert!(delays[1..].iter().all(|&d| d == 10));
}

#[test]
fn shorter_fade_config_changes_step_count() {
    let config = ControllerConfig {
        fade_steps: 4,
        fade_time_ms: 40,
        ..ControllerConfig::default()
    };
    let mut hw = MockHardware::new().with_mode(2);
    run_once(&mut hw, config);

    assert_eq!(hw.writes().len(), PALETTE.len() * 5);
    assert!(hw.delays()[1..].iter().all(|&d| d == 10));
}

// ── Mode 3: fixed blink sequence ──────────────────────────────

#[test]
fn festive_blink_runs_ten_cycles() {
    let mut hw = MockHardware::new().with_mode(3);
    run_once(&mut hw, ControllerConfig::default());

    let writes = hw.writes();
    assert_eq!(writes.len(), 40);
    for cycle in writes.chunks(4) {
        assert_eq!(
            cycle,
            &[(255, 0, 0), (0, 255, 0), (255, 255, 255), (0, 0, 0)]
        );
    }

    // Settle, then three 400 ms holds per cycle; the zero off-time is skipped.
    let delays = hw.delays();
    assert_eq!(delays[0], 500);
    assert_eq!(&delays[1..], &[400; 30][..]);
    assert_eq!(hw.last_write(), Some((0, 0, 0)));
}

#[test]
fn festive_blink_respects_brightness() {
    let mut hw = MockHardware::new().with_mode(3);
    hw.brightness_raw = 2048;
    run_once(&mut hw, ControllerConfig::default());

    let writes = hw.writes();
    assert_eq!(writes[0], (127, 0, 0));
    assert_eq!(writes[2], (127, 127, 127));
}

#[test]
fn knob_turned_mid_sequence_changes_next_write() {
    let config = ControllerConfig {
        festive_cycles: 1,
        ..ControllerConfig::default()
    };
    let mut hw = MockHardware::new().with_mode(3);
    // Full, half, quarter, then back to the fallback (full).
    hw.script_brightness(&[4096, 2048, 1024]);
    run_once(&mut hw, config);

    assert_eq!(
        hw.writes(),
        vec![(255, 0, 0), (0, 127, 0), (63, 63, 63), (0, 0, 0)]
    );
}

#[test]
fn knob_turned_mid_fade_scales_each_step() {
    let config = ControllerConfig {
        fade_steps: 2,
        fade_time_ms: 20,
        ..ControllerConfig::default()
    };
    let mut hw = MockHardware::new().with_mode(2);
    // First transition is red → orange; brightness drops on every step.
    hw.script_brightness(&[4096, 2048, 0]);
    run_once(&mut hw, config);

    let writes = hw.writes();
    assert_eq!(writes[0], (255, 0, 0));
    // Step 1 of 2 is (255, 80, 8) at half brightness.
    assert_eq!(writes[1], (127, 40, 4));
    assert_eq!(writes[2], (0, 0, 0));
    // Script exhausted: the next transition starts at full orange again.
    assert_eq!(writes[3], (255, 160, 16));
}

#[test]
fn nonzero_off_time_is_held() {
    let config = ControllerConfig {
        festive_cycles: 1,
        festive_off_ms: 50,
        ..ControllerConfig::default()
    };
    let mut hw = MockHardware::new().with_mode(3);
    run_once(&mut hw, config);

    assert_eq!(hw.delays(), vec![500, 400, 400, 400, 50]);
}
