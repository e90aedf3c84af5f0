//! `Board` implementation over the ESP-IDF HAL.
//!
//! Everything behind this shim is synchronous and degraded-safe: draw
//! failures are dropped, unknown lines read as idle, and the deep-sleep
//! call never comes back.

use std::collections::HashMap;

use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Text};
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver};
use esp_idf_svc::hal::ledc::LedcDriver;
use esp_idf_svc::hal::spi::{SpiDeviceDriver, SpiDriver};
use esp_idf_svc::sys;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;

use specter_core::{Board, Level, LineId, TouchSample};

use crate::xpt2046::Xpt2046;

pub type TftInterface<'d> = SpiInterface<
    'd,
    SpiDeviceDriver<'d, &'d SpiDriver<'d>>,
    PinDriver<'d, AnyOutputPin, Output>,
>;
pub type TftDisplay<'d> =
    mipidsi::Display<TftInterface<'d>, ILI9341Rgb565, PinDriver<'d, AnyOutputPin, Output>>;
pub type TouchController<'d> =
    Xpt2046<SpiDeviceDriver<'d, &'d SpiDriver<'d>>, PinDriver<'d, AnyIOPin, Input>>;

const BG: Rgb565 = Rgb565::BLACK;
const FG: Rgb565 = Rgb565::WHITE;

pub struct EspBoard<'d> {
    buttons: HashMap<u8, PinDriver<'d, AnyIOPin, Input>>,
    backlight: LedcDriver<'d>,
    backlight_line: u8,
    display: TftDisplay<'d>,
    touch: Option<TouchController<'d>>,
}

impl<'d> EspBoard<'d> {
    pub fn new(
        buttons: HashMap<u8, PinDriver<'d, AnyIOPin, Input>>,
        backlight: LedcDriver<'d>,
        backlight_line: u8,
        display: TftDisplay<'d>,
        touch: Option<TouchController<'d>>,
    ) -> Self {
        Self {
            buttons,
            backlight,
            backlight_line,
            display,
            touch,
        }
    }
}

impl Board for EspBoard<'_> {
    fn read_line(&mut self, line: LineId) -> bool {
        // Unknown lines read high, which is "not pressed" for the
        // pull-up wiring on this board.
        self.buttons
            .get(&line.0)
            .map(|pin| pin.is_high())
            .unwrap_or(true)
    }

    fn read_touch(&mut self) -> Option<TouchSample> {
        self.touch.as_mut().and_then(|touch| touch.read())
    }

    fn write_analog(&mut self, line: LineId, value: u8) {
        if line.0 != self.backlight_line {
            log::warn!("analog write to unmanaged line GPIO{}", line.0);
            return;
        }
        let max = self.backlight.get_max_duty();
        let duty = max * u32::from(value) / 255;
        if let Err(err) = self.backlight.set_duty(duty) {
            log::warn!("backlight duty update failed: {}", err);
        }
    }

    fn now_ms(&mut self) -> u64 {
        (unsafe { sys::esp_timer_get_time() } / 1_000) as u64
    }

    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }

    fn enter_deep_sleep(&mut self, wake_line: LineId, wake_level: Level) {
        log::warn!("deep sleep, wake on GPIO{}", wake_line.0);
        let level = match wake_level {
            Level::Low => 0,
            Level::High => 1,
        };
        unsafe {
            sys::esp_sleep_enable_ext0_wakeup(i32::from(wake_line.0), level);
            sys::esp_deep_sleep_start();
        }
    }

    fn draw_centered_text(&mut self, text: &str, x: u16, y: u16) {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_8X13)
            .text_color(FG)
            .background_color(BG)
            .build();
        Text::with_alignment(
            text,
            Point::new(i32::from(x), i32::from(y)),
            style,
            Alignment::Center,
        )
        .draw(&mut self.display)
        .ok();
    }

    fn clear_screen(&mut self) {
        self.display.clear(BG).ok();
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) {
        Rectangle::new(
            Point::new(i32::from(x), i32::from(y)),
            Size::new(u32::from(width), u32::from(height)),
        )
        .into_styled(PrimitiveStyle::with_fill(BG))
        .draw(&mut self.display)
        .ok();
    }
}
