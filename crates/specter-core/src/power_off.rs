//! Long-hold power-off countdown.
//!
//! Samples raw line levels directly, bypassing the input engine's
//! cooldown: sustained-hold detection must keep seeing the lines while
//! the debounce gate is closed. Runs once per main-loop tick alongside
//! the input engine.

use alloc::format;

use crate::config::{BoardConfig, ButtonLineCfg};
use crate::hal::{line_active, Board};

/// Hold the combination this long before the countdown becomes visible.
pub const HOLD_CONFIRM_MS: u64 = 500;
/// Digit advance interval once counting.
pub const COUNTDOWN_STEP_MS: u64 = 500;
/// Hold past this to commit the power-off.
pub const COMMIT_MS: u64 = 3500;
/// Highest digit shown; the banner reads "n/3".
const COUNTDOWN_LAST_DIGIT: u8 = 3;

/// Poll interval while blocking on button release during commit.
const RELEASE_POLL_MS: u32 = 10;
/// Settle before erasing the banner after an early release.
const ERASE_SETTLE_MS: u32 = 30;
/// Settle between release and the sleep primitive.
const SLEEP_SETTLE_MS: u32 = 200;

/// Banner row and the band erased when a hold is abandoned.
const COUNTDOWN_ROW: u16 = 12;
const COUNTDOWN_ERASE_X: u16 = 60;
const COUNTDOWN_BAND_H: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerOffState {
    Idle,
    /// Both combo lines held, countdown not yet visible.
    Holding { since: u64 },
    /// Countdown visible; `shown` is the digit currently on screen.
    CountingDown { since: u64, shown: u8 },
    /// A line released before the commit threshold; transient.
    Releasing,
    /// Commit threshold passed. Terminal: the machine never leaves this
    /// state (on hardware the sleep primitive does not return).
    Committing,
}

pub struct PowerOffMachine {
    state: PowerOffState,
}

impl Default for PowerOffMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerOffMachine {
    pub fn new() -> Self {
        Self {
            state: PowerOffState::Idle,
        }
    }

    pub fn state(&self) -> PowerOffState {
        self.state
    }

    /// One main-loop tick over raw line levels.
    pub fn tick<B: Board>(&mut self, config: &BoardConfig, board: &mut B) {
        let Some((first, second)) = combo_lines(config) else {
            return;
        };
        if self.state == PowerOffState::Committing {
            return;
        }

        let both_held = line_active(board, Some(first)) && line_active(board, Some(second));
        let now = board.now_ms();

        match self.state {
            PowerOffState::Idle => {
                if both_held {
                    log::debug!("power-off hold started");
                    self.state = PowerOffState::Holding { since: now };
                }
            }
            PowerOffState::Holding { since } => {
                if !both_held {
                    self.abandon(config, board);
                } else if now.saturating_sub(since) >= HOLD_CONFIRM_MS {
                    self.show_digit(config, board, 1);
                    self.state = PowerOffState::CountingDown { since, shown: 1 };
                }
            }
            PowerOffState::CountingDown { since, shown } => {
                if !both_held {
                    self.abandon(config, board);
                } else {
                    let elapsed = now.saturating_sub(since);
                    if elapsed >= COMMIT_MS {
                        self.commit(config, board, first, second);
                    } else {
                        let digit =
                            ((elapsed / COUNTDOWN_STEP_MS) as u8).min(COUNTDOWN_LAST_DIGIT);
                        if digit > shown {
                            self.show_digit(config, board, digit);
                            self.state = PowerOffState::CountingDown {
                                since,
                                shown: digit,
                            };
                        }
                    }
                }
            }
            // Releasing resolves within `abandon`; Committing is handled
            // above.
            PowerOffState::Releasing | PowerOffState::Committing => {}
        }
    }

    fn show_digit<B: Board>(&mut self, config: &BoardConfig, board: &mut B, digit: u8) {
        board.draw_centered_text(
            &format!("PWR OFF IN {}/3", digit),
            config.display_width / 2,
            COUNTDOWN_ROW,
        );
    }

    /// Erase the banner band and return to idle.
    fn abandon<B: Board>(&mut self, config: &BoardConfig, board: &mut B) {
        self.state = PowerOffState::Releasing;
        board.delay_ms(ERASE_SETTLE_MS);
        board.fill_rect(
            COUNTDOWN_ERASE_X,
            COUNTDOWN_ROW,
            config.display_width.saturating_sub(COUNTDOWN_ERASE_X),
            COUNTDOWN_BAND_H,
        );
        self.state = PowerOffState::Idle;
    }

    /// Clear the screen, block until both lines release, then power off.
    /// There is deliberately no way out of the release wait other than
    /// letting go of the buttons; committing further is irreversible.
    fn commit<B: Board>(
        &mut self,
        config: &BoardConfig,
        board: &mut B,
        first: ButtonLineCfg,
        second: ButtonLineCfg,
    ) {
        self.state = PowerOffState::Committing;
        log::warn!("power-off committed, waiting for release");
        board.clear_screen();

        while line_active(board, Some(first)) || line_active(board, Some(second)) {
            board.delay_ms(RELEASE_POLL_MS);
        }
        board.delay_ms(SLEEP_SETTLE_MS);

        if let Some(wake) = wake_line(config) {
            board.enter_deep_sleep(wake.line, wake.active_level);
        }
        // Only reachable when the sleep primitive is mocked out.
    }
}

/// The designated power-off pair: Escape+Select when the board has an
/// Escape line, otherwise Left+Right. A variant missing both pairs has
/// no power-off gesture.
fn combo_lines(config: &BoardConfig) -> Option<(ButtonLineCfg, ButtonLineCfg)> {
    let buttons = &config.buttons;
    match (buttons.escape, buttons.select) {
        (Some(escape), Some(select)) => Some((escape, select)),
        _ => match (buttons.left, buttons.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        },
    }
}

/// Wake source armed before deep sleep: the Escape line when assigned,
/// else Select, else Left.
fn wake_line(config: &BoardConfig) -> Option<ButtonLineCfg> {
    let buttons = &config.buttons;
    buttons.escape.or(buttons.select).or(buttons.left)
}
