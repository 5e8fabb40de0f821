//! Application state, single-owner and main-thread only.
//!
//! Inputs live in per-panel state. Every mutation ends in [`AppState::recompute`],
//! which retargets the animated readouts of the visible panel.

use std::time::Instant;

use propcalc_core::animation::{DisplayBoard, FrameTime};
use propcalc_core::domain::{InstrumentPreset, PositionInputs, RiskInputs};
use propcalc_core::engine::{
    compute_position, compute_risk, Memo, PositionMetrics, RiskMetrics,
};
use propcalc_core::format::{self, Formatter};
use propcalc_core::{AnimationConfig, CalculatorConfig, InstrumentCatalog, InstrumentSelection};

use crate::form::{PositionField, RiskField};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Risk,
    Position,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Risk => 0,
            Panel::Position => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Risk),
            1 => Some(Panel::Position),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Risk => "Risk & Payout",
            Panel::Position => "Position Size",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Risk => Panel::Position,
            Panel::Position => Panel::Help,
            Panel::Help => Panel::Risk,
        }
    }

    pub fn prev(self) -> Panel {
        match self {
            Panel::Risk => Panel::Help,
            Panel::Position => Panel::Risk,
            Panel::Help => Panel::Position,
        }
    }

    /// Animated readouts shown while this panel is visible.
    pub fn readouts(self) -> &'static [Readout] {
        match self {
            Panel::Risk => &Readout::RISK,
            Panel::Position => &Readout::POSITION,
            Panel::Help => &[],
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One animated number on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Readout {
    DailyLossLimit,
    MaxLossLimit,
    HealthPct,
    TargetProfit,
    FirmCut,
    TraderPayout,
    RiskDollars,
    PositionSize,
}

impl Readout {
    pub const RISK: [Readout; 6] = [
        Readout::DailyLossLimit,
        Readout::MaxLossLimit,
        Readout::HealthPct,
        Readout::TargetProfit,
        Readout::FirmCut,
        Readout::TraderPayout,
    ];

    pub const POSITION: [Readout; 2] = [Readout::RiskDollars, Readout::PositionSize];

    pub fn formatter(self) -> Formatter {
        match self {
            Readout::HealthPct => format::percent_whole(),
            Readout::PositionSize => format::with_suffix(2, "lots"),
            _ => format::usd_whole(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RiskPanelState {
    pub inputs: RiskInputs,
    pub cursor: usize,
}

impl RiskPanelState {
    pub fn new(inputs: RiskInputs) -> Self {
        Self { inputs, cursor: 0 }
    }

    pub fn field(&self) -> RiskField {
        RiskField::ALL[self.cursor.min(RiskField::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone)]
pub struct PositionPanelState {
    pub inputs: PositionInputs,
    pub selection: InstrumentSelection,
    pub cursor: usize,
}

impl PositionPanelState {
    pub fn new(inputs: PositionInputs, selection: InstrumentSelection) -> Self {
        Self {
            inputs,
            selection,
            cursor: 0,
        }
    }

    pub fn field(&self) -> PositionField {
        PositionField::ALL[self.cursor.min(PositionField::ALL.len() - 1)]
    }
}

/// Complete application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,

    pub risk: RiskPanelState,
    pub position: PositionPanelState,
    pub catalog: InstrumentCatalog,

    /// Text typed into the focused field; `Some` while editing.
    pub edit_buffer: Option<String>,

    pub board: DisplayBoard<Readout>,
    pub animation: AnimationConfig,
    risk_memo: Memo<RiskInputs, RiskMetrics>,
    position_memo: Memo<(PositionInputs, InstrumentSelection), PositionMetrics>,

    pub status_message: Option<(String, StatusLevel)>,
    epoch: Instant,
}

impl AppState {
    pub fn new(config: &CalculatorConfig) -> Self {
        let catalog = config.catalog();
        let selection = InstrumentSelection::first_of(&catalog);
        let mut app = Self {
            active_panel: Panel::Risk,
            running: true,
            risk: RiskPanelState::new(config.risk),
            position: PositionPanelState::new(config.position, selection),
            catalog,
            edit_buffer: None,
            board: DisplayBoard::new(config.animation.duration()),
            animation: config.animation,
            risk_memo: Memo::new(),
            position_memo: Memo::new(),
            status_message: None,
            epoch: Instant::now(),
        };
        app.mount_readouts(Panel::Risk);
        app
    }

    /// Host timestamp for the animation clock.
    pub fn frame_time(&self) -> FrameTime {
        self.epoch.elapsed()
    }

    /// Deliver due animation frames. Returns the number of readouts advanced.
    pub fn tick(&mut self, now: FrameTime) -> usize {
        self.board.advance(now)
    }

    pub fn is_animating(&self) -> bool {
        self.board.is_animating()
    }

    pub fn risk_metrics(&mut self) -> RiskMetrics {
        *self.risk_memo.get_or_compute(&self.risk.inputs, compute_risk)
    }

    pub fn position_metrics(&mut self) -> PositionMetrics {
        let key = (self.position.inputs, self.position.selection);
        let catalog = &self.catalog;
        *self
            .position_memo
            .get_or_compute(&key, |(inputs, selection)| {
                compute_position(inputs, selection.active(catalog))
            })
    }

    pub fn active_instrument(&self) -> Option<&InstrumentPreset> {
        self.position.selection.active(&self.catalog)
    }

    /// Current target of a readout, straight from the engine.
    pub fn readout_target(&mut self, readout: Readout) -> f64 {
        match readout {
            Readout::DailyLossLimit => self.risk_metrics().daily_loss_limit,
            Readout::MaxLossLimit => self.risk_metrics().max_loss_limit,
            Readout::HealthPct => self.risk_metrics().health_pct,
            Readout::TargetProfit => self.risk_metrics().target_profit,
            Readout::FirmCut => self.risk_metrics().firm_cut,
            Readout::TraderPayout => self.risk_metrics().trader_payout,
            Readout::RiskDollars => self.position_metrics().risk_dollars,
            Readout::PositionSize => self.position_metrics().position_size,
        }
    }

    /// Retarget every mounted readout after an input change.
    pub fn recompute(&mut self) {
        for &readout in self.active_panel.readouts() {
            let target = self.readout_target(readout);
            self.board.set_target(&readout, target);
        }
    }

    /// Switch panels, unmounting the readouts that leave the screen.
    pub fn switch_panel(&mut self, panel: Panel) {
        if panel == self.active_panel {
            return;
        }
        self.edit_buffer = None;
        self.unmount_readouts(self.active_panel);
        self.active_panel = panel;
        self.mount_readouts(panel);
        tracing::debug!(panel = panel.label(), "panel switched");
    }

    fn mount_readouts(&mut self, panel: Panel) {
        for &readout in panel.readouts() {
            let initial = self.readout_target(readout);
            self.board.mount(readout, initial, readout.formatter());
        }
    }

    fn unmount_readouts(&mut self, panel: Panel) {
        for readout in panel.readouts() {
            self.board.unmount(readout);
        }
    }

    /// Unmount everything; called once on exit.
    pub fn teardown(&mut self) {
        let keys: Vec<Readout> = self.board.keys().copied().collect();
        for readout in keys {
            self.board.unmount(&readout);
        }
    }

    /// Formatted readout text, or the placeholder when not mounted.
    pub fn readout_text(&self, readout: Readout) -> String {
        self.board
            .text(&readout)
            .unwrap_or_else(|| format::PLACEHOLDER.to_string())
    }

    pub fn readout_displayed(&self, readout: Readout) -> f64 {
        self.board.displayed(&readout).unwrap_or(0.0)
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::warn!(%msg, "status warning");
        self.status_message = Some((msg, StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settle(app: &mut AppState) {
        let mut now = Duration::ZERO;
        for _ in 0..100 {
            app.tick(now);
            if !app.is_animating() {
                break;
            }
            now += Duration::from_millis(16);
        }
        app.tick(now + Duration::from_secs(1));
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Risk.next(), Panel::Position);
        assert_eq!(Panel::Help.next(), Panel::Risk);
        assert_eq!(Panel::Risk.prev(), Panel::Help);
        assert_eq!(Panel::Position.prev(), Panel::Risk);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..3 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(3).is_none());
    }

    #[test]
    fn starts_with_risk_readouts_at_rest() {
        let app = AppState::new(&CalculatorConfig::default());
        assert!(!app.is_animating());
        assert_eq!(app.readout_text(Readout::DailyLossLimit), "$5,000");
        assert_eq!(app.readout_text(Readout::MaxLossLimit), "$10,000");
        assert_eq!(app.readout_text(Readout::FirmCut), "$2,000");
        assert_eq!(app.readout_text(Readout::TraderPayout), "$8,000");
        assert_eq!(app.readout_text(Readout::HealthPct), "100%");
        assert!(!app.board.is_mounted(&Readout::PositionSize));
    }

    #[test]
    fn recompute_animates_to_new_target() {
        let mut app = AppState::new(&CalculatorConfig::default());
        app.risk.inputs.account_size = 200_000.0;
        app.recompute();
        assert!(app.is_animating());
        settle(&mut app);
        assert_eq!(app.readout_text(Readout::DailyLossLimit), "$10,000");
        assert_eq!(app.readout_displayed(Readout::TargetProfit), 20_000.0);
    }

    #[test]
    fn switching_panels_swaps_mounted_readouts() {
        let mut app = AppState::new(&CalculatorConfig::default());
        app.switch_panel(Panel::Position);
        assert!(!app.board.is_mounted(&Readout::DailyLossLimit));
        assert!(app.board.is_mounted(&Readout::PositionSize));
        assert_eq!(app.readout_text(Readout::RiskDollars), "$1,000");

        app.switch_panel(Panel::Help);
        assert_eq!(app.board.keys().count(), 0);
        assert_eq!(app.readout_text(Readout::RiskDollars), "—");
    }

    #[test]
    fn remount_starts_from_current_value() {
        let mut app = AppState::new(&CalculatorConfig::default());
        app.switch_panel(Panel::Position);
        app.risk.inputs.account_size = 50_000.0;
        app.switch_panel(Panel::Risk);
        assert!(!app.is_animating());
        assert_eq!(app.readout_text(Readout::DailyLossLimit), "$2,500");
    }

    #[test]
    fn position_metrics_follow_selection() {
        let mut app = AppState::new(&CalculatorConfig::default());
        let first = app.position_metrics();
        app.position.selection.next_instrument(&app.catalog);
        let tick = app.active_instrument().map(|p| p.tick_value).unwrap();
        assert_eq!(app.position_metrics().tick_value, tick);
        assert!(first.position_size.is_finite());
    }

    #[test]
    fn teardown_unmounts_everything() {
        let mut app = AppState::new(&CalculatorConfig::default());
        app.risk.inputs.account_size = 1.0;
        app.recompute();
        app.teardown();
        assert!(!app.is_animating());
        assert_eq!(app.board.keys().count(), 0);
    }

    #[test]
    fn warning_sets_level() {
        let mut app = AppState::new(&CalculatorConfig::default());
        app.set_warning("bad");
        assert_eq!(
            app.status_message,
            Some(("bad".to_string(), StatusLevel::Warning))
        );
    }
}
