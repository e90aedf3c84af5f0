//! Touch sample remapping into the rotated display frame.
//!
//! Pure logic (no hardware) so it can be unit-tested on the host.
//!
//! The digitizer is mounted offset from the panel's logical scan
//! direction, so each rotation needs its own axis remap; the mappings
//! below are per-orientation and deliberately asymmetric. Getting one
//! wrong silently breaks touch in that orientation only.

use crate::config::Rotation;

/// Vertical shift compensating the physical viewport/cable offset of
/// this panel.
pub const VIEWPORT_Y_OFFSET: u16 = 20;

/// Raw (x, y) from the touch panel. Produced at most once per poll cycle
/// while the panel reports contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchSample {
    pub x: u16,
    pub y: u16,
}

/// Logical (x, y) in the display's current rotation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: u16,
    pub y: u16,
    pub pressed: bool,
}

/// Map a raw sample into the rotated logical frame of a `width` x
/// `height` display. Out-of-domain raw values saturate at the frame edge
/// instead of wrapping.
pub fn map_to_screen(
    sample: TouchSample,
    rotation: Rotation,
    width: u16,
    height: u16,
) -> ScreenPoint {
    let TouchSample { x: raw_x, y: raw_y } = sample;
    let shifted_height = height + VIEWPORT_Y_OFFSET;

    let (x, y) = match rotation {
        Rotation::R0 => (
            width.saturating_sub(raw_y),
            shifted_height.saturating_sub(raw_x),
        ),
        Rotation::R90 => (raw_x, shifted_height.saturating_sub(raw_y)),
        Rotation::R180 => (raw_y, shifted_height.saturating_sub(raw_x)),
        Rotation::R270 => (width.saturating_sub(raw_x), raw_y),
    };

    ScreenPoint {
        x,
        y,
        pressed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::vec::Vec;

    const WIDTH: u16 = 240;
    const HEIGHT: u16 = 320;

    const ALL_ROTATIONS: [Rotation; 4] = [
        Rotation::R0,
        Rotation::R90,
        Rotation::R180,
        Rotation::R270,
    ];

    #[test]
    fn rotation_0_remaps_both_axes() {
        let point = map_to_screen(TouchSample { x: 10, y: 30 }, Rotation::R0, WIDTH, HEIGHT);
        assert_eq!(point.x, WIDTH - 30);
        assert_eq!(point.y, HEIGHT + VIEWPORT_Y_OFFSET - 10);
        assert!(point.pressed);
    }

    #[test]
    fn rotation_90_keeps_x() {
        let point = map_to_screen(TouchSample { x: 10, y: 30 }, Rotation::R90, WIDTH, HEIGHT);
        assert_eq!(point.x, 10);
        assert_eq!(point.y, HEIGHT + VIEWPORT_Y_OFFSET - 30);
    }

    #[test]
    fn rotation_180_swaps_axes() {
        let point = map_to_screen(TouchSample { x: 10, y: 30 }, Rotation::R180, WIDTH, HEIGHT);
        assert_eq!(point.x, 30);
        assert_eq!(point.y, HEIGHT + VIEWPORT_Y_OFFSET - 10);
    }

    #[test]
    fn rotation_270_mirrors_x_keeps_y() {
        let point = map_to_screen(TouchSample { x: 10, y: 30 }, Rotation::R270, WIDTH, HEIGHT);
        assert_eq!(point.x, WIDTH - 10);
        assert_eq!(point.y, 30);
    }

    #[test]
    fn mapping_stays_in_shifted_bounds_for_all_rotations() {
        for rotation in ALL_ROTATIONS {
            for raw_x in (0..WIDTH).step_by(7) {
                for raw_y in (0..WIDTH).step_by(7) {
                    let point = map_to_screen(
                        TouchSample { x: raw_x, y: raw_y },
                        rotation,
                        WIDTH,
                        HEIGHT,
                    );
                    assert!(point.x <= WIDTH, "{:?}: x {} out of frame", rotation, point.x);
                    assert!(
                        point.y <= HEIGHT + VIEWPORT_Y_OFFSET,
                        "{:?}: y {} out of frame",
                        rotation,
                        point.y
                    );
                }
            }
        }
    }

    #[test]
    fn mapping_is_injective_within_panel_domain() {
        for rotation in ALL_ROTATIONS {
            let mut seen = HashSet::new();
            let mut count = 0usize;
            for raw_x in (0..WIDTH).step_by(5) {
                for raw_y in (0..WIDTH).step_by(5) {
                    let point = map_to_screen(
                        TouchSample { x: raw_x, y: raw_y },
                        rotation,
                        WIDTH,
                        HEIGHT,
                    );
                    seen.insert((point.x, point.y));
                    count += 1;
                }
            }
            assert_eq!(seen.len(), count, "{:?}: collisions in remap", rotation);
        }
    }

    #[test]
    fn distinct_rotations_disagree_on_the_same_sample() {
        // A sanity check that the four remaps really are four different
        // mappings; a copy-paste mixup would collapse two of them.
        let sample = TouchSample { x: 17, y: 41 };
        let points: Vec<_> = ALL_ROTATIONS
            .iter()
            .map(|&r| {
                let p = map_to_screen(sample, r, WIDTH, HEIGHT);
                (p.x, p.y)
            })
            .collect();
        let unique: HashSet<_> = points.iter().collect();
        assert_eq!(unique.len(), points.len());
    }
}
