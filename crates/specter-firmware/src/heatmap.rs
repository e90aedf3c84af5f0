//! Touch heat-map accumulation for diagnostics.
//!
//! Coarse grid of hit counters fed by every mapped touch point. Fire and
//! forget; nothing downstream depends on it.

use specter_core::touch::VIEWPORT_Y_OFFSET;
use specter_core::{ScreenPoint, TouchSink};

/// Cell edge in logical pixels.
const CELL_PX: u16 = 20;
/// Log a summary every this many recorded points.
const DUMP_EVERY: u32 = 64;

pub struct TouchHeatMap {
    cols: usize,
    rows: usize,
    cells: Vec<u32>,
    recorded: u32,
}

impl TouchHeatMap {
    pub fn new(width: u16, height: u16) -> Self {
        // The mapped frame extends past the panel by the viewport shift.
        let cols = usize::from(width / CELL_PX) + 1;
        let rows = usize::from((height + VIEWPORT_Y_OFFSET) / CELL_PX) + 1;
        Self {
            cols,
            rows,
            cells: vec![0; cols * rows],
            recorded: 0,
        }
    }

    /// Highest-traffic cell as (col, row, hits).
    pub fn hottest(&self) -> Option<(usize, usize, u32)> {
        self.cells
            .iter()
            .enumerate()
            .max_by_key(|(_, &hits)| hits)
            .filter(|(_, &hits)| hits > 0)
            .map(|(index, &hits)| (index % self.cols, index / self.cols, hits))
    }
}

impl TouchSink for TouchHeatMap {
    fn record(&mut self, point: ScreenPoint) {
        if !point.pressed {
            return;
        }
        let col = usize::from(point.x / CELL_PX).min(self.cols - 1);
        let row = usize::from(point.y / CELL_PX).min(self.rows - 1);
        self.cells[row * self.cols + col] += 1;
        self.recorded += 1;

        if self.recorded % DUMP_EVERY == 0 {
            if let Some((col, row, hits)) = self.hottest() {
                log::debug!(
                    "touch heat map: {} samples, hottest cell ({}, {}) with {}",
                    self.recorded,
                    col,
                    row,
                    hits
                );
            }
        }
    }
}
