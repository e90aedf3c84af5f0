//! Latched input flags polled and cleared by the UI layer.
//!
//! The engine only ever sets flags; consumers clear them through the
//! `take_*` accessors (or `clear`) once acted upon.

/// One flag per logical action, plus the catch-all `any_key`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEvents {
    pub up: bool,
    pub down: bool,
    pub prev: bool,
    pub next: bool,
    pub prev_page: bool,
    pub next_page: bool,
    pub select: bool,
    pub escape: bool,
    pub any_key: bool,
}

impl InputEvents {
    pub fn take_up(&mut self) -> bool {
        core::mem::take(&mut self.up)
    }

    pub fn take_down(&mut self) -> bool {
        core::mem::take(&mut self.down)
    }

    pub fn take_prev(&mut self) -> bool {
        core::mem::take(&mut self.prev)
    }

    pub fn take_next(&mut self) -> bool {
        core::mem::take(&mut self.next)
    }

    pub fn take_prev_page(&mut self) -> bool {
        core::mem::take(&mut self.prev_page)
    }

    pub fn take_next_page(&mut self) -> bool {
        core::mem::take(&mut self.next_page)
    }

    pub fn take_select(&mut self) -> bool {
        core::mem::take(&mut self.select)
    }

    pub fn take_escape(&mut self) -> bool {
        core::mem::take(&mut self.escape)
    }

    pub fn take_any_key(&mut self) -> bool {
        core::mem::take(&mut self.any_key)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Escape wins over the ambiguous simultaneous left+right case:
    /// latching it forcibly clears prev/next for the cycle.
    pub(crate) fn latch_escape(&mut self) {
        self.escape = true;
        self.prev = false;
        self.next = false;
    }
}
