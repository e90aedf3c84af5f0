//! Host-side scenario harness for scripted input and power timing flows.

use specter_core::{
    BoardConfig, ButtonLineCfg, ButtonMap, InputEngine, InputEvents, LineRole, MockBoard,
    MockPowerSave, PowerOffMachine, PowerOffState, RecordingTouchSink, Rotation, TouchSample,
};

/// Couples the input engine, the power-off machine, and the mock
/// collaborators so tests read as scripted timelines.
pub struct ScenarioHarness {
    pub board: MockBoard,
    pub power: MockPowerSave,
    pub touches: RecordingTouchSink,
    engine: InputEngine,
    power_off: PowerOffMachine,
}

impl ScenarioHarness {
    /// Full board variant: all seven buttons, touch panel, backlight.
    pub fn new() -> Self {
        Self::with_config(full_board_config())
    }

    /// Variant without dedicated Set/Escape buttons; power-off falls
    /// back to the Left+Right chord.
    pub fn without_escape() -> Self {
        let mut config = full_board_config();
        config.buttons.set = None;
        config.buttons.escape = None;
        Self::with_config(config)
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            board: MockBoard::new(),
            power: MockPowerSave::default(),
            touches: RecordingTouchSink::default(),
            engine: InputEngine::new(config),
            power_off: PowerOffMachine::new(),
        }
    }

    /// Hold a button down (no-op for roles the variant lacks).
    pub fn press(&mut self, role: LineRole) {
        if let Some(cfg) = self.engine.config().buttons.get(role) {
            self.board.set_active(cfg, true);
        }
    }

    pub fn release(&mut self, role: LineRole) {
        if let Some(cfg) = self.engine.config().buttons.get(role) {
            self.board.set_active(cfg, false);
        }
    }

    /// Script a future release on the fake timeline, for flows that
    /// block until the buttons let go.
    pub fn schedule_release(&mut self, role: LineRole, at_ms: u64) {
        if let Some(cfg) = self.engine.config().buttons.get(role) {
            self.board.schedule_active(cfg, at_ms, false);
        }
    }

    pub fn touch(&mut self, x: u16, y: u16) {
        self.board.set_touch(Some(TouchSample { x, y }));
    }

    pub fn lift_touch(&mut self) {
        self.board.set_touch(None);
    }

    pub fn advance(&mut self, ms: u64) {
        self.board.advance(ms);
    }

    pub fn advance_to(&mut self, at_ms: u64) {
        self.board.advance_to(at_ms);
    }

    /// One main-loop iteration: input engine first, then the raw-level
    /// power-off path.
    pub fn tick(&mut self) {
        self.engine
            .poll(&mut self.board, &mut self.power, &mut self.touches);
        self.power_off
            .tick(self.engine.config(), &mut self.board);
    }

    pub fn events(&mut self) -> &mut InputEvents {
        self.engine.events_mut()
    }

    pub fn set_long_press(&mut self, active: bool) {
        self.engine.set_long_press(active);
    }

    pub fn power_off_state(&self) -> PowerOffState {
        self.power_off.state()
    }

    pub fn config(&self) -> &BoardConfig {
        self.engine.config()
    }
}

impl Default for ScenarioHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn full_board_config() -> BoardConfig {
    BoardConfig {
        buttons: ButtonMap {
            up: Some(ButtonLineCfg::active_low(41)),
            down: Some(ButtonLineCfg::active_low(39)),
            left: Some(ButtonLineCfg::active_low(40)),
            right: Some(ButtonLineCfg::active_low(38)),
            select: Some(ButtonLineCfg::active_low(42)),
            set: Some(ButtonLineCfg::active_low(1)),
            escape: Some(ButtonLineCfg::active_low(2)),
        },
        display_width: 240,
        display_height: 320,
        rotation: Rotation::R90,
        touch_enabled: true,
        backlight: Some(specter_core::LineId(17)),
        min_brightness: 1,
    }
}
