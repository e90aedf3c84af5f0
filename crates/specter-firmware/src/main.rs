//! Firmware entry point: GPIO bring-up and the main poll loop.

mod board;
mod heatmap;
mod pins;
mod power_save;
mod xpt2046;

use std::collections::HashMap;

use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{AnyIOPin, IOPin, Input, OutputPin, PinDriver, Pull};
use esp_idf_svc::hal::i2c::{config::Config as I2cConfig, I2cDriver};
use esp_idf_svc::hal::ledc::{config::TimerConfig, LedcDriver, LedcTimerDriver};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::spi::{
    config::Config as SpiConfig, SpiDeviceDriver, SpiDriver, SpiDriverConfig,
};
use esp_idf_svc::hal::units::Hertz;

use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::{Orientation, Rotation as PanelRotation};

use specter_core::{Backlight, InputEngine, PowerOffMachine};

use board::EspBoard;
use heatmap::TouchHeatMap;
use power_save::{BacklightAction, IdleTracker};
use xpt2046::Xpt2046;

fn panel_rotation(index: u8) -> PanelRotation {
    match index {
        1 => PanelRotation::Deg90,
        2 => PanelRotation::Deg180,
        3 => PanelRotation::Deg270,
        _ => PanelRotation::Deg0,
    }
}

fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("Specter board support starting");

    let peripherals = Peripherals::take().unwrap();
    let p = peripherals.pins;

    // Shared SPI bus: display, touch, SD slot and both radios. Every
    // chip select idles high before the first transaction.
    let spi = SpiDriver::new(
        peripherals.spi2,
        p.gpio36,
        p.gpio35,
        Some(p.gpio37),
        &SpiDriverConfig::default(),
    )
    .unwrap();

    let mut sd_cs = PinDriver::output(p.gpio34).unwrap();
    sd_cs.set_high().unwrap();
    let mut cc1101_cs = PinDriver::output(p.gpio10).unwrap();
    cc1101_cs.set_high().unwrap();
    let mut nrf24_cs = PinDriver::output(p.gpio6).unwrap();
    nrf24_cs.set_high().unwrap();
    let mut nrf24_ce = PinDriver::output(p.gpio21).unwrap();
    nrf24_ce.set_low().unwrap();

    log::info!(
        "shared SPI: SCK GPIO{} MOSI GPIO{} MISO GPIO{}; TFT CS/DC/RST GPIO{}/{}/{}; touch CS GPIO{} IRQ GPIO{}; SD CS GPIO{}",
        pins::SPI_SCK,
        pins::SPI_MOSI,
        pins::SPI_MISO,
        pins::TFT_CS,
        pins::TFT_DC,
        pins::TFT_RST,
        pins::TOUCH_CS,
        pins::TOUCH_IRQ,
        pins::SDCARD_CS
    );
    log::info!(
        "radio routing: CC1101 CS GPIO{} GDO0 GPIO{}, NRF24 CS GPIO{} CE GPIO{}, IR rx GPIO{} tx GPIO{}",
        pins::CC1101_CS,
        pins::CC1101_GDO0,
        pins::NRF24_CS,
        pins::NRF24_CE,
        pins::IR_RX,
        pins::IR_TX
    );

    // I2C bus for the NFC module; brought up here so the module is
    // reachable as soon as any app wants it.
    let _i2c = I2cDriver::new(peripherals.i2c0, p.gpio8, p.gpio9, &I2cConfig::new()).unwrap();
    log::info!(
        "I2C ready on GPIO{}/GPIO{}",
        pins::I2C_SDA,
        pins::I2C_SCL
    );

    // No fuel gauge on this board revision; battery state reads unknown.
    log::info!("battery gauge: none fitted, reporting 0% / not charging");

    // Display on its own chip select. The interface needs a scratch
    // buffer for command batching.
    let mut display_buf = [0u8; 512];
    let tft_spi = SpiDeviceDriver::new(
        &spi,
        Some(p.gpio7),
        &SpiConfig::default().baudrate(Hertz(pins::TFT_SPI_HZ)),
    )
    .unwrap();
    let dc = PinDriver::output(p.gpio15.downgrade_output()).unwrap();
    let rst = PinDriver::output(p.gpio16.downgrade_output()).unwrap();

    let mut delay = FreeRtos;
    let display = mipidsi::Builder::new(
        ILI9341Rgb565,
        SpiInterface::new(tft_spi, dc, &mut display_buf),
    )
    .reset_pin(rst)
    .display_size(pins::DISPLAY_WIDTH, pins::DISPLAY_HEIGHT)
    .orientation(Orientation::new().rotate(panel_rotation(pins::DISPLAY_ROTATION)))
    .init(&mut delay)
    .unwrap();

    // Touch controller shares the bus at its own (much lower) clock.
    let touch_spi = SpiDeviceDriver::new(
        &spi,
        Some(p.gpio5),
        &SpiConfig::default().baudrate(Hertz(pins::TOUCH_SPI_HZ)),
    )
    .unwrap();
    let mut touch_irq = PinDriver::input(p.gpio4.downgrade()).unwrap();
    touch_irq.set_pull(Pull::Up).unwrap();
    let touch = Xpt2046::new(
        touch_spi,
        touch_irq,
        pins::TOUCH_CAL,
        pins::DISPLAY_WIDTH,
        pins::DISPLAY_HEIGHT,
    );

    // Navigation buttons, pull-up inputs.
    let mut buttons: HashMap<u8, PinDriver<AnyIOPin, Input>> = HashMap::new();
    for (line, pin) in [
        (pins::BTN_UP, p.gpio41.downgrade()),
        (pins::BTN_DOWN, p.gpio39.downgrade()),
        (pins::BTN_LEFT, p.gpio40.downgrade()),
        (pins::BTN_RIGHT, p.gpio38.downgrade()),
        (pins::BTN_SELECT, p.gpio42.downgrade()),
        (pins::BTN_SET, p.gpio1.downgrade()),
        (pins::BTN_ESCAPE, p.gpio2.downgrade()),
    ] {
        let mut driver = PinDriver::input(pin).unwrap();
        driver.set_pull(Pull::Up).unwrap();
        buttons.insert(line, driver);
    }

    // Backlight PWM, full on at boot.
    let ledc_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default().frequency(Hertz(5_000)),
    )
    .unwrap();
    let backlight_pwm = LedcDriver::new(peripherals.ledc.channel0, ledc_timer, p.gpio17).unwrap();

    let config = pins::board_config();
    let mut board = EspBoard::new(
        buttons,
        backlight_pwm,
        pins::TFT_BACKLIGHT,
        display,
        Some(touch),
    );

    let backlight = Backlight::from_config(&config);
    backlight.set(&mut board, 100);

    let mut idle = IdleTracker::new(pins::DIM_TIMEOUT_MS);
    let mut heatmap = TouchHeatMap::new(config.display_width, config.display_height);
    let mut engine = InputEngine::new(config);
    let mut power_off = PowerOffMachine::new();

    log::info!("entering input loop");

    loop {
        engine.poll(&mut board, &mut idle, &mut heatmap);
        power_off.tick(engine.config(), &mut board);

        match idle.take_pending() {
            Some(BacklightAction::Dim) => backlight.set(&mut board, 0),
            Some(BacklightAction::Restore) => backlight.set(&mut board, 100),
            None => {}
        }

        // Placeholder consumer until the UI layer lands; it drains the
        // latched flags the way any app screen would.
        let events = engine.events_mut();
        if events.take_select() {
            log::info!("input: select");
        }
        if events.take_escape() {
            log::info!("input: escape");
        }
        if events.take_prev() {
            log::info!("input: prev");
        }
        if events.take_next() {
            log::info!("input: next");
        }
        if events.take_up() {
            log::info!("input: up");
        }
        if events.take_down() {
            log::info!("input: down");
        }
        events.clear();

        FreeRtos::delay_ms(10);
    }
}
