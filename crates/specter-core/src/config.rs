//! Static board description: line assignments, polarity, display geometry.
//!
//! Board variants differ in which buttons physically exist. Missing
//! buttons are `None` entries in the map, resolved once at startup from
//! the firmware pin table; nothing here branches at compile time.

/// A physical MCU line (GPIO number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u8);

/// Electrical level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Logical controls the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Up,
    Down,
    Left,
    Right,
    Select,
    Set,
    Escape,
}

impl LineRole {
    pub const ALL: [LineRole; 7] = [
        LineRole::Up,
        LineRole::Down,
        LineRole::Left,
        LineRole::Right,
        LineRole::Select,
        LineRole::Set,
        LineRole::Escape,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LineRole::Up => "Up",
            LineRole::Down => "Down",
            LineRole::Left => "Left",
            LineRole::Right => "Right",
            LineRole::Select => "Select",
            LineRole::Set => "Set",
            LineRole::Escape => "Escape",
        }
    }
}

impl core::fmt::Display for LineRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One assigned button line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLineCfg {
    pub line: LineId,
    pub active_level: Level,
}

impl ButtonLineCfg {
    /// Pull-up wiring: the line reads low while the button is held.
    pub const fn active_low(line: u8) -> Self {
        Self {
            line: LineId(line),
            active_level: Level::Low,
        }
    }
}

/// Role-to-line table. `None` means the board variant has no such button;
/// an unassigned role always reads inactive and never edge-triggers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMap {
    pub up: Option<ButtonLineCfg>,
    pub down: Option<ButtonLineCfg>,
    pub left: Option<ButtonLineCfg>,
    pub right: Option<ButtonLineCfg>,
    pub select: Option<ButtonLineCfg>,
    pub set: Option<ButtonLineCfg>,
    pub escape: Option<ButtonLineCfg>,
}

impl ButtonMap {
    pub fn get(&self, role: LineRole) -> Option<ButtonLineCfg> {
        match role {
            LineRole::Up => self.up,
            LineRole::Down => self.down,
            LineRole::Left => self.left,
            LineRole::Right => self.right,
            LineRole::Select => self.select,
            LineRole::Set => self.set,
            LineRole::Escape => self.escape,
        }
    }
}

/// Orientation of the display content relative to its physical mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Board configuration stores rotation as 0..=3; anything else falls
    /// back to the default mounting.
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Rotation::R90,
            2 => Rotation::R180,
            3 => Rotation::R270,
            _ => Rotation::R0,
        }
    }
}

/// Everything the engine needs to know about the board, resolved once at
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub buttons: ButtonMap,
    pub display_width: u16,
    pub display_height: u16,
    pub rotation: Rotation,
    pub touch_enabled: bool,
    /// PWM-capable backlight line, if the panel has one.
    pub backlight: Option<LineId>,
    /// Lowest duty that still produces visible output.
    pub min_brightness: u8,
}
