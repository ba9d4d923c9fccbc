//! Library interface for ledpanel.
//!
//! Holds the pure control logic (debouncing, edge detection, LED modes,
//! press classification) plus `embedded-hal` sink adapters. Everything
//! except the SSD1306 wrapper builds and tests on the host (no embedded
//! hardware required).
//!
//! Usage: `cargo test --lib`
//!
//! Note: The firmware binaries in `src/bin/` are `#![no_std]` /
//! `#![no_main]` and need the `embedded` feature and an ESP32 target.

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod app;
pub mod clock;
pub mod config;
pub mod control;
pub mod error;
pub mod input;
pub mod output;
pub mod ui;

pub use app::{ModeFrame, ModePanel, PressFrame, PressPanel};
pub use clock::Millis;
pub use error::Error;
pub use input::{Edge, Level};
pub use ui::Status;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - panel scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::control::{Mode, PressKind};
    use super::*;

    use Level::{High, Low};

    /// Tick `panel` every millisecond over `[from, to)` with `raw`,
    /// returning the last frame and every completed press.
    fn hold_press(
        panel: &mut PressPanel,
        raw: Level,
        from: u64,
        to: u64,
        presses: &mut Vec<(u64, PressKind)>,
    ) -> PressFrame {
        let mut last = panel.tick(from, raw);
        if let Some(kind) = last.press {
            presses.push((from, kind));
        }
        for t in from + 1..to {
            last = panel.tick(t, raw);
            if let Some(kind) = last.press {
                presses.push((t, kind));
            }
        }
        last
    }

    /// Debounced press of the cycle (or reset) button starting at `at`.
    /// Returns the time just after the release is confirmed.
    fn click(panel: &mut ModePanel, at: u64, reset: bool) -> u64 {
        let (cycle, reset) = if reset { (High, Low) } else { (Low, High) };
        for t in at..at + 40 {
            panel.tick(t, cycle, reset);
        }
        for t in at + 40..at + 80 {
            panel.tick(t, High, High);
        }
        at + 80
    }

    // ════════════════════════════════════════════════════════════════════════
    // Press Panel Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn press_panel_starts_ready_and_dark() {
        let mut panel = PressPanel::default();
        let frame = panel.tick(0, High);
        assert_eq!(frame.status, Status::Ready);
        assert_eq!(frame.led, 0);
        assert_eq!(frame.buzzer, Low);
        assert_eq!(frame.press, None);
    }

    #[test]
    fn press_panel_long_press_fires_buzzer_not_toggle() {
        let mut panel = PressPanel::default();
        let mut presses = Vec::new();

        hold_press(&mut panel, High, 0, 100, &mut presses);
        // Press confirmed at 130; held until 1700 (1570 ms confirmed).
        hold_press(&mut panel, Low, 100, 1_700, &mut presses);
        assert!(presses.is_empty());

        let frame = hold_press(&mut panel, High, 1_700, 1_731, &mut presses);
        assert_eq!(presses, [(1_730, PressKind::Long)]);
        assert_eq!(frame.status, Status::LongPress);
        assert_eq!(frame.buzzer, High);
        assert_eq!(frame.led, 0);
        assert!(!panel.led_on());
    }

    #[test]
    fn press_panel_buzzer_pulse_is_200ms() {
        let mut panel = PressPanel::default();
        let mut presses = Vec::new();
        hold_press(&mut panel, Low, 0, 1_600, &mut presses);
        hold_press(&mut panel, High, 1_600, 1_630, &mut presses);

        // Release confirmed at 1630 starts the pulse.
        assert_eq!(panel.tick(1_630, High).buzzer, High);
        assert_eq!(panel.tick(1_829, High).buzzer, High);
        assert_eq!(panel.tick(1_830, High).buzzer, Low);
        // Status stays on the last message.
        assert_eq!(panel.tick(5_000, High).status, Status::LongPress);
    }

    #[test]
    fn press_panel_short_press_toggles_led() {
        let mut panel = PressPanel::default();
        let mut presses = Vec::new();

        hold_press(&mut panel, Low, 0, 200, &mut presses);
        let frame = hold_press(&mut panel, High, 200, 300, &mut presses);
        assert_eq!(presses, [(230, PressKind::Short)]);
        assert_eq!(frame.led, 255);
        assert_eq!(frame.status, Status::LedOn);
        assert_eq!(frame.buzzer, Low);

        hold_press(&mut panel, Low, 300, 500, &mut presses);
        let frame = hold_press(&mut panel, High, 500, 600, &mut presses);
        assert_eq!(presses.len(), 2);
        assert_eq!(frame.led, 0);
        assert_eq!(frame.status, Status::LedOff);
    }

    #[test]
    fn press_panel_long_press_keeps_led_state() {
        let mut panel = PressPanel::default();
        let mut presses = Vec::new();
        hold_press(&mut panel, Low, 0, 100, &mut presses);
        hold_press(&mut panel, High, 100, 200, &mut presses);
        assert!(panel.led_on());

        hold_press(&mut panel, Low, 200, 2_000, &mut presses);
        let frame = hold_press(&mut panel, High, 2_000, 2_100, &mut presses);
        assert_eq!(frame.led, 255);
        assert_eq!(frame.status, Status::LongPress);
    }

    #[test]
    fn press_panel_second_long_press_restarts_pulse() {
        let mut panel = PressPanel::default();
        let mut presses = Vec::new();
        hold_press(&mut panel, Low, 0, 1_500, &mut presses);
        // Release confirmed at 1530, pulse until 1730.
        hold_press(&mut panel, High, 1_500, 1_540, &mut presses);
        // Bounce-free second long press starting right away.
        hold_press(&mut panel, Low, 1_540, 3_200, &mut presses);
        // Release confirmed at 3230, new pulse until 3430.
        let frame = hold_press(&mut panel, High, 3_200, 3_231, &mut presses);
        assert_eq!(presses.len(), 2);
        assert_eq!(frame.buzzer, High);
        assert_eq!(panel.tick(3_429, High).buzzer, High);
        assert_eq!(panel.tick(3_430, High).buzzer, Low);
    }

    #[test]
    fn press_panel_bounce_never_toggles() {
        let mut panel = PressPanel::default();
        for t in 0..1_000u64 {
            let raw = if (t / 10) % 2 == 0 { Low } else { High };
            let frame = panel.tick(t, raw);
            assert_eq!(frame.press, None);
            assert_eq!(frame.led, 0);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Mode Panel Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn mode_panel_starts_all_off() {
        let mut panel = ModePanel::default();
        let frame = panel.tick(0, High, High);
        assert_eq!(frame.mode, Mode::Off);
        assert_eq!(frame.channels, [0, 0, 0]);
        assert_eq!(frame.status(), Status::AllOff);
    }

    #[test]
    fn mode_panel_cycle_press_changes_mode_on_confirmation() {
        let mut panel = ModePanel::default();
        assert_eq!(panel.tick(100, Low, High).mode, Mode::Off);
        assert_eq!(panel.tick(129, Low, High).mode, Mode::Off);
        let frame = panel.tick(130, Low, High);
        assert_eq!(frame.cycle, Some(Edge::Pressed));
        assert!(frame.mode_changed());
        assert_eq!(frame.mode, Mode::AllOn);
        assert_eq!(frame.channels, [255, 255, 255]);
        // Holding does not cycle again.
        assert_eq!(panel.tick(2_000, Low, High).mode, Mode::AllOn);
    }

    #[test]
    fn mode_panel_cycles_through_all_modes() {
        let mut panel = ModePanel::default();
        let mut t = 0;
        let mut seen = Vec::new();
        for _ in 0..5 {
            t = click(&mut panel, t, false);
            seen.push(panel.mode());
        }
        assert_eq!(
            seen,
            [Mode::AllOn, Mode::Blink, Mode::Fade, Mode::Off, Mode::AllOn]
        );
    }

    #[test]
    fn mode_panel_reset_from_any_mode() {
        for presses in 0..4 {
            let mut panel = ModePanel::default();
            let mut t = 0;
            for _ in 0..presses {
                t = click(&mut panel, t, false);
            }
            t = click(&mut panel, t + 333, true);
            let frame = panel.tick(t, High, High);
            assert_eq!(frame.mode, Mode::Off);
            assert_eq!(frame.channels, [0, 0, 0]);
        }
    }

    #[test]
    fn mode_panel_both_buttons_same_tick_end_off() {
        let mut panel = ModePanel::default();
        panel.tick(0, Low, Low);
        let frame = panel.tick(30, Low, Low);
        assert_eq!(frame.cycle, Some(Edge::Pressed));
        assert_eq!(frame.reset, Some(Edge::Pressed));
        assert_eq!(frame.mode, Mode::Off);
    }

    #[test]
    fn mode_panel_button_held_at_boot_is_not_a_press() {
        let mut panel = ModePanel::new(control::BlinkPattern::ALTERNATE, Low, High);
        for t in 0..500 {
            assert_eq!(panel.tick(t, Low, High).mode, Mode::Off);
        }
    }

    #[test]
    fn mode_panel_blink_scenario() {
        let mut panel = ModePanel::default();
        click(&mut panel, 0, false);
        // Second press confirmed at 110: Blink starts there.
        panel.tick(80, Low, High);
        let frame = panel.tick(110, Low, High);
        assert_eq!(frame.mode, Mode::Blink);
        assert_eq!(frame.channels[0], 0);

        let base = 110;
        assert_eq!(panel.tick(base + 250, High, High).channels[0], 0);
        assert_eq!(panel.tick(base + 500, High, High).channels[0], 255);
        assert_eq!(panel.tick(base + 1_000, High, High).channels[0], 0);
    }

    #[test]
    fn mode_panel_fade_stays_in_bounds() {
        let mut panel = ModePanel::default();
        let mut t = 0;
        for _ in 0..3 {
            t = click(&mut panel, t, false);
        }
        assert_eq!(panel.mode(), Mode::Fade);

        let mut max_seen = 0;
        for now in t..t + 3_000 {
            let frame = panel.tick(now, High, High);
            let [a, b, c] = frame.channels;
            assert!(a == b && b == c);
            max_seen = max_seen.max(a);
        }
        assert_eq!(max_seen, 255);
    }
}
