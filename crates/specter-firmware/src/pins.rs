//! Pin assignment and fixed configuration for the Specter S3 board.
//!
//! One shared SPI bus carries the display, the touch controller, the SD
//! slot and both external radios; every device gets its own chip select
//! and all of them must idle high before the first transaction.

use specter_core::{BoardConfig, ButtonLineCfg, ButtonMap, LineId, Rotation};

use crate::xpt2046::Calibration;

// Shared SPI bus.
pub const SPI_SCK: u8 = 36;
pub const SPI_MOSI: u8 = 35;
pub const SPI_MISO: u8 = 37;

// ILI9341 240x320 TFT.
pub const TFT_CS: u8 = 7;
pub const TFT_DC: u8 = 15;
pub const TFT_RST: u8 = 16;
pub const TFT_BACKLIGHT: u8 = 17;
pub const TFT_SPI_HZ: u32 = 27_000_000;

// XPT2046 touch controller.
pub const TOUCH_CS: u8 = 5;
pub const TOUCH_IRQ: u8 = 4;
pub const TOUCH_SPI_HZ: u32 = 2_500_000;

// SD slot soldered to the TFT module.
pub const SDCARD_CS: u8 = 34;

// RF front-ends.
pub const CC1101_CS: u8 = 10;
pub const CC1101_GDO0: u8 = 33;
pub const NRF24_CS: u8 = 6;
pub const NRF24_CE: u8 = 21;

// I2C bus (NFC module default wiring).
pub const I2C_SDA: u8 = 8;
pub const I2C_SCL: u8 = 9;

// Infrared front panel header.
pub const IR_RX: u8 = 18;
pub const IR_TX: u8 = 47;

// Navigation buttons, all wired active-low with pull-ups.
pub const BTN_SELECT: u8 = 42;
pub const BTN_UP: u8 = 41;
pub const BTN_DOWN: u8 = 39;
pub const BTN_RIGHT: u8 = 38;
pub const BTN_LEFT: u8 = 40;
pub const BTN_SET: u8 = 1;
pub const BTN_ESCAPE: u8 = 2;

pub const DISPLAY_WIDTH: u16 = 240;
pub const DISPLAY_HEIGHT: u16 = 320;
pub const DISPLAY_ROTATION: u8 = 1;

/// Lowest PWM duty that still lights the panel.
pub const MIN_BRIGHTNESS: u8 = 1;

/// Screen dim timeout before the wake gate starts consuming input.
pub const DIM_TIMEOUT_MS: u64 = 30_000;

/// Factory calibration for this digitizer batch.
pub const TOUCH_CAL: Calibration = Calibration {
    x_min: 270,
    x_max: 3620,
    y_min: 320,
    y_max: 3640,
    swap_axes: true,
};

/// The full-variant button map: every role is populated on this board.
pub fn board_config() -> BoardConfig {
    BoardConfig {
        buttons: ButtonMap {
            up: Some(ButtonLineCfg::active_low(BTN_UP)),
            down: Some(ButtonLineCfg::active_low(BTN_DOWN)),
            left: Some(ButtonLineCfg::active_low(BTN_LEFT)),
            right: Some(ButtonLineCfg::active_low(BTN_RIGHT)),
            select: Some(ButtonLineCfg::active_low(BTN_SELECT)),
            set: Some(ButtonLineCfg::active_low(BTN_SET)),
            escape: Some(ButtonLineCfg::active_low(BTN_ESCAPE)),
        },
        display_width: DISPLAY_WIDTH,
        display_height: DISPLAY_HEIGHT,
        rotation: Rotation::from_index(DISPLAY_ROTATION),
        touch_enabled: true,
        backlight: Some(LineId(TFT_BACKLIGHT)),
        min_brightness: MIN_BRIGHTNESS,
    }
}
