//! XPT2046 resistive touch controller on the shared SPI bus.
//!
//! Generic over the embedded-hal SPI device and pen-IRQ pin. Raw 12-bit
//! ADC readings are remapped onto panel coordinates with the factory
//! affine calibration; anything fancier than that lives with the touch
//! vendor, not here.

use embedded_hal::digital::InputPin;
use embedded_hal::spi::SpiDevice;

use specter_core::TouchSample;

// Differential 12-bit conversions.
const CMD_READ_X: u8 = 0xD0;
const CMD_READ_Y: u8 = 0x90;

/// Five-word factory calibration: raw ADC window per axis plus the
/// axis-swap flag for how the digitizer is glued to this panel.
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    pub x_min: u16,
    pub x_max: u16,
    pub y_min: u16,
    pub y_max: u16,
    pub swap_axes: bool,
}

pub struct Xpt2046<SPI, IRQ> {
    spi: SPI,
    irq: IRQ,
    cal: Calibration,
    width: u16,
    height: u16,
}

impl<SPI, IRQ> Xpt2046<SPI, IRQ>
where
    SPI: SpiDevice,
    IRQ: InputPin,
{
    pub fn new(spi: SPI, irq: IRQ, cal: Calibration, width: u16, height: u16) -> Self {
        Self {
            spi,
            irq,
            cal,
            width,
            height,
        }
    }

    /// Current contact in panel coordinates, or `None` when the pen IRQ
    /// is idle or the conversion fails. Failures are "no event", never
    /// errors.
    pub fn read(&mut self) -> Option<TouchSample> {
        // Pen IRQ is pulled low while the panel is touched.
        if self.irq.is_high().unwrap_or(true) {
            return None;
        }

        let mut raw_x = self.convert(CMD_READ_X)?;
        let mut raw_y = self.convert(CMD_READ_Y)?;
        if self.cal.swap_axes {
            core::mem::swap(&mut raw_x, &mut raw_y);
        }

        Some(TouchSample {
            x: scale(raw_x, self.cal.x_min, self.cal.x_max, self.width),
            y: scale(raw_y, self.cal.y_min, self.cal.y_max, self.height),
        })
    }

    fn convert(&mut self, command: u8) -> Option<u16> {
        let tx = [command, 0, 0];
        let mut rx = [0u8; 3];
        if self.spi.transfer(&mut rx, &tx).is_err() {
            log::warn!("touch conversion failed");
            return None;
        }
        let raw = ((u16::from(rx[1]) << 8) | u16::from(rx[2])) >> 3;
        // Rail readings mean the pen lifted mid-conversion.
        if raw == 0 || raw >= 4095 {
            return None;
        }
        Some(raw)
    }
}

/// Remap one axis from its calibrated ADC window onto 0..=range.
fn scale(raw: u16, min: u16, max: u16, range: u16) -> u16 {
    let clamped = raw.clamp(min, max);
    let span = u32::from(max - min);
    let offset = u32::from(clamped - min);
    ((offset * u32::from(range)) / span) as u16
}
