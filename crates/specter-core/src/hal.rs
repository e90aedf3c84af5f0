//! Hardware access seams.
//!
//! Implementations:
//! - `EspBoard` in the firmware crate (real hardware)
//! - `MockBoard` for host tests

use crate::config::{ButtonLineCfg, Level, LineId};
use crate::touch::{ScreenPoint, TouchSample};

/// The thin hardware shim the engine drives. All operations are
/// synchronous and infallible; hardware problems degrade to safe
/// defaults behind this boundary rather than surfacing as errors.
pub trait Board {
    /// Raw electrical level of a line; `true` is high.
    fn read_line(&mut self, line: LineId) -> bool;

    /// Current touch contact in raw panel coordinates, if any.
    /// `None` is "no event this tick", never an error.
    fn read_touch(&mut self) -> Option<TouchSample>;

    /// 8-bit analog/PWM write (backlight duty).
    fn write_analog(&mut self, line: LineId, value: u8);

    /// Milliseconds since boot.
    fn now_ms(&mut self) -> u64;

    /// Blocking delay.
    fn delay_ms(&mut self, ms: u32);

    /// Arm `wake_line` at `wake_level` as the wake source and enter deep
    /// sleep. On hardware this call does not return; the mock records it
    /// and does, so tests can assert it fired exactly once.
    fn enter_deep_sleep(&mut self, wake_line: LineId, wake_level: Level);

    /// Draw `text` horizontally centered on `x` at row `y`.
    fn draw_centered_text(&mut self, text: &str, x: u16, y: u16);

    /// Fill the whole screen with the background color.
    fn clear_screen(&mut self);

    /// Fill a rectangle with the background color.
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16);
}

/// Idle/power-save tracker. Queried, never mutated structurally, by the
/// engine; the main loop applies whatever brightness transitions the
/// tracker decides on.
pub trait PowerSave {
    /// Called once per tick before input sampling.
    fn check_power_save_timer(&mut self, now_ms: u64);

    /// Ask whether the input occurrence that just happened is the wake
    /// trigger. `true` means it woke the display and must be consumed:
    /// no event flags are latched for it.
    fn try_wake_screen(&mut self) -> bool;
}

/// Telemetry collaborator for mapped touch points. Fire and forget.
pub trait TouchSink {
    fn record(&mut self, point: ScreenPoint);
}

/// Whether an optional button line currently reads active. Unassigned
/// lines always read inactive.
pub fn line_active<B: Board>(board: &mut B, cfg: Option<ButtonLineCfg>) -> bool {
    match cfg {
        Some(cfg) => {
            let high = board.read_line(cfg.line);
            match cfg.active_level {
                Level::High => high,
                Level::Low => !high,
            }
        }
        None => false,
    }
}
