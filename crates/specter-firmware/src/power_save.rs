//! Idle tracking and screen dim/restore decisions.
//!
//! The tracker only decides; the main loop applies the resulting
//! brightness transition. That keeps the engine's view of this
//! collaborator read-only, as the poll contract requires.

use specter_core::PowerSave;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightAction {
    Dim,
    Restore,
}

pub struct IdleTracker {
    timeout_ms: u64,
    last_activity_ms: u64,
    last_now_ms: u64,
    dimmed: bool,
    pending: Option<BacklightAction>,
}

impl IdleTracker {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_activity_ms: 0,
            last_now_ms: 0,
            dimmed: false,
            pending: None,
        }
    }

    /// Brightness transition decided since the last call, if any.
    pub fn take_pending(&mut self) -> Option<BacklightAction> {
        self.pending.take()
    }
}

impl PowerSave for IdleTracker {
    fn check_power_save_timer(&mut self, now_ms: u64) {
        self.last_now_ms = now_ms;
        if !self.dimmed && now_ms.saturating_sub(self.last_activity_ms) >= self.timeout_ms {
            log::info!("idle for {} ms, dimming screen", self.timeout_ms);
            self.dimmed = true;
            self.pending = Some(BacklightAction::Dim);
        }
    }

    fn try_wake_screen(&mut self) -> bool {
        // Called exactly on an input occurrence; the timer check that
        // ran earlier this tick left the current time here.
        self.last_activity_ms = self.last_now_ms;
        if self.dimmed {
            log::info!("input woke the screen");
            self.dimmed = false;
            self.pending = Some(BacklightAction::Restore);
            true
        } else {
            false
        }
    }
}
