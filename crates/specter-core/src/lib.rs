//! Input & power state engine for the Specter handheld.
//! Hardware-independent: runs against the `hal` traits on device, and
//! against the mock board on the host.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod brightness;
pub mod config;
pub mod events;
pub mod hal;
pub mod input;
pub mod power_off;
pub mod touch;

#[cfg(any(test, feature = "std"))]
pub mod mock_board;

pub use brightness::Backlight;
pub use config::{BoardConfig, ButtonLineCfg, ButtonMap, Level, LineId, LineRole, Rotation};
pub use events::InputEvents;
pub use hal::{Board, PowerSave, TouchSink};
pub use input::InputEngine;
pub use power_off::{PowerOffMachine, PowerOffState};
pub use touch::{map_to_screen, ScreenPoint, TouchSample};

#[cfg(any(test, feature = "std"))]
pub use mock_board::{MockBoard, MockPowerSave, RecordingTouchSink};
