//! Mock collaborators for host tests.
//!
//! The board mock runs a scripted timeline: line levels change at
//! scheduled instants, and the fake clock advances through `advance` and
//! through `delay_ms`, so even the blocking power-off release wait
//! terminates under test.

use std::collections::HashMap;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::config::{ButtonLineCfg, Level, LineId};
use crate::hal::{Board, PowerSave, TouchSink};
use crate::touch::{ScreenPoint, TouchSample};

pub struct MockBoard {
    now: u64,
    levels: HashMap<LineId, bool>,
    /// (at_ms, line, level) changes applied once `now` reaches `at_ms`.
    scheduled: Vec<(u64, LineId, bool)>,
    touch: Option<TouchSample>,
    pub analog_writes: Vec<(LineId, u8)>,
    pub drawn_text: Vec<(String, u16, u16)>,
    pub clear_count: u32,
    pub filled_rects: Vec<(u16, u16, u16, u16)>,
    pub deep_sleeps: Vec<(LineId, Level)>,
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            now: 0,
            levels: HashMap::new(),
            scheduled: Vec::new(),
            touch: None,
            analog_writes: Vec::new(),
            drawn_text: Vec::new(),
            clear_count: 0,
            filled_rects: Vec::new(),
            deep_sleeps: Vec::new(),
        }
    }

    /// Move the clock forward.
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    /// Jump the clock to an absolute instant (must not go backwards).
    pub fn advance_to(&mut self, at_ms: u64) {
        debug_assert!(at_ms >= self.now);
        self.now = at_ms;
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// Set a raw line level immediately. Unset lines read high, matching
    /// pull-up wiring.
    pub fn set_level(&mut self, line: LineId, high: bool) {
        self.levels.insert(line, high);
    }

    /// Press or release a configured button, honoring its polarity.
    pub fn set_active(&mut self, cfg: ButtonLineCfg, active: bool) {
        self.set_level(cfg.line, level_for(cfg, active));
    }

    /// Script a future press or release on the fake timeline.
    pub fn schedule_active(&mut self, cfg: ButtonLineCfg, at_ms: u64, active: bool) {
        self.scheduled.push((at_ms, cfg.line, level_for(cfg, active)));
    }

    /// Set or clear the current touch contact.
    pub fn set_touch(&mut self, sample: Option<TouchSample>) {
        self.touch = sample;
    }

    fn apply_due_changes(&mut self) {
        let now = self.now;
        let mut applied = Vec::new();
        self.scheduled.retain(|&(at, line, high)| {
            if at <= now {
                applied.push((line, high));
                false
            } else {
                true
            }
        });
        for (line, high) in applied {
            self.levels.insert(line, high);
        }
    }
}

fn level_for(cfg: ButtonLineCfg, active: bool) -> bool {
    match cfg.active_level {
        Level::High => active,
        Level::Low => !active,
    }
}

impl Board for MockBoard {
    fn read_line(&mut self, line: LineId) -> bool {
        self.apply_due_changes();
        self.levels.get(&line).copied().unwrap_or(true)
    }

    fn read_touch(&mut self) -> Option<TouchSample> {
        self.touch
    }

    fn write_analog(&mut self, line: LineId, value: u8) {
        self.analog_writes.push((line, value));
    }

    fn now_ms(&mut self) -> u64 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now += u64::from(ms);
    }

    fn enter_deep_sleep(&mut self, wake_line: LineId, wake_level: Level) {
        self.deep_sleeps.push((wake_line, wake_level));
    }

    fn draw_centered_text(&mut self, text: &str, x: u16, y: u16) {
        self.drawn_text.push((text.to_string(), x, y));
    }

    fn clear_screen(&mut self) {
        self.clear_count += 1;
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) {
        self.filled_rects.push((x, y, width, height));
    }
}

/// Scripted power-save collaborator: set `asleep` and the next input
/// occurrence is treated as the wake trigger.
#[derive(Default)]
pub struct MockPowerSave {
    pub asleep: bool,
    pub timer_checks: u32,
    pub wakes: u32,
}

impl PowerSave for MockPowerSave {
    fn check_power_save_timer(&mut self, _now_ms: u64) {
        self.timer_checks += 1;
    }

    fn try_wake_screen(&mut self) -> bool {
        if self.asleep {
            self.asleep = false;
            self.wakes += 1;
            true
        } else {
            false
        }
    }
}

/// Telemetry sink that just remembers every point it was handed.
#[derive(Default)]
pub struct RecordingTouchSink {
    pub points: Vec<ScreenPoint>,
}

impl TouchSink for RecordingTouchSink {
    fn record(&mut self, point: ScreenPoint) {
        self.points.push(point);
    }
}
