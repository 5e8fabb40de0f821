//! Color tokens for the propcalc terminal UI.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, highlights)
//! - **Positive**: Neon green (payouts, healthy ratios)
//! - **Negative**: Hot pink (loss limits, failing ratios)
//! - **Warning**: Neon orange (parse errors, marginal ratios)
//! - **Neutral**: Cool purple (firm share, secondary values)
//! - **Muted**: Steel blue (labels, hints)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
}

impl Theme {
    /// Gauge color for the target/drawdown health ratio (0..=100).
    pub fn health_color(&self, pct: f64) -> Color {
        match pct {
            p if p >= 100.0 => self.positive,
            p if p >= 50.0 => self.accent,
            p if p >= 25.0 => self.warning,
            _ => self.negative,
        }
    }
}

const THEME: Theme = Theme {
    accent: Color::Rgb(0, 255, 255),
    positive: Color::Rgb(0, 255, 128),
    negative: Color::Rgb(255, 20, 147),
    warning: Color::Rgb(255, 140, 0),
    neutral: Color::Rgb(147, 112, 219),
    muted: Color::Rgb(100, 149, 237),
    text_primary: Color::White,
};

pub fn current() -> Theme {
    THEME
}

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

/// Large readout value, e.g. the dollar cards.
pub fn readout(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(THEME.accent)
    } else {
        Style::default().fg(THEME.muted)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Highlighted row under the form cursor.
pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}
