//! Per-tick input sampling: debounce gates, wake gating, and
//! edge-to-event mapping.
//!
//! A single last-accepted timestamp gates both input sources, so a burst
//! of contact bounce or switch chatter collapses into one event. Touch
//! runs on a shorter gate than the buttons to keep taps and drags
//! responsive. The long-press override removes both gates so a held key
//! keeps re-triggering while the UI tracks the hold.

use crate::config::BoardConfig;
use crate::events::InputEvents;
use crate::hal::{line_active, Board, PowerSave, TouchSink};
use crate::touch;

/// Minimum spacing between accepted button inputs.
pub const BUTTON_GATE_MS: u64 = 200;
/// Shorter spacing while touch is in play.
pub const TOUCH_GATE_MS: u64 = 150;

pub struct InputEngine {
    config: BoardConfig,
    /// Timestamp of the last accepted input, shared by both sources.
    last_input_ms: u64,
    long_press: bool,
    events: InputEvents,
}

impl InputEngine {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            last_input_ms: 0,
            long_press: false,
            events: InputEvents::default(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Latched flags; set here, cleared by the UI layer.
    pub fn events(&self) -> &InputEvents {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut InputEvents {
        &mut self.events
    }

    /// While set, the input gates are bypassed and a held line is
    /// serviced again on every call.
    pub fn set_long_press(&mut self, active: bool) {
        self.long_press = active;
    }

    pub fn long_press(&self) -> bool {
        self.long_press
    }

    /// One main-loop tick: power-save timer, touch path, button scan.
    pub fn poll<B, P, T>(&mut self, board: &mut B, power: &mut P, touch_sink: &mut T)
    where
        B: Board,
        P: PowerSave,
        T: TouchSink,
    {
        let now = board.now_ms();
        power.check_power_save_timer(now);

        if self.config.touch_enabled
            && (now.saturating_sub(self.last_input_ms) > TOUCH_GATE_MS || self.long_press)
        {
            if let Some(sample) = board.read_touch() {
                self.last_input_ms = now;
                if power.try_wake_screen() {
                    // The tap woke the display; it must not double as input.
                    log::debug!("touch consumed by screen wake");
                    return;
                }
                self.events.any_key = true;

                let point = touch::map_to_screen(
                    sample,
                    self.config.rotation,
                    self.config.display_width,
                    self.config.display_height,
                );
                touch_sink.record(point);
            }
        }

        if now.saturating_sub(self.last_input_ms) < BUTTON_GATE_MS && !self.long_press {
            return;
        }

        let buttons = &self.config.buttons;
        let up = line_active(board, buttons.up);
        let down = line_active(board, buttons.down);
        let left = line_active(board, buttons.left);
        let right = line_active(board, buttons.right);
        let select = line_active(board, buttons.select);
        let set = line_active(board, buttons.set);
        let escape = line_active(board, buttons.escape);

        if up || down || left || right || select || set || escape {
            self.last_input_ms = now;
            if power.try_wake_screen() {
                log::debug!("button consumed by screen wake");
                return;
            }
            self.events.any_key = true;
        }

        if left {
            self.events.prev = true;
        }
        if right {
            self.events.next = true;
        }
        if up {
            self.events.up = true;
            self.events.prev_page = true;
        }
        if down {
            self.events.down = true;
            self.events.next_page = true;
        }
        if select || set {
            self.events.select = true;
        }
        // A dedicated Escape line and the left+right chord are
        // independent triggers; both stay live on every board variant.
        if escape || (left && right) {
            self.events.latch_escape();
        }
    }
}
