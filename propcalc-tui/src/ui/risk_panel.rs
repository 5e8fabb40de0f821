//! Panel 1, Risk & Payout: account inputs, loss limits, health gauge and
//! profit split.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Readout};
use crate::form::RiskField;
use crate::theme;

use super::{field_line, readout_card};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(RiskField::ALL.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(area);

    render_form(f, rows[0], app);
    render_limits(f, rows[1], app);
    render_health(f, rows[2], app);
    render_payout(f, rows[3], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![Line::from(Span::styled(
        "[j/k]field [h/l]adjust [Enter]type [s]split",
        theme::muted(),
    ))];
    for (i, field) in RiskField::ALL.iter().enumerate() {
        lines.push(field_line(
            field.label(),
            field.get(&app.risk.inputs),
            field.affix(),
            i == app.risk.cursor,
            app.edit_buffer.as_deref(),
        ));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_limits(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let style = theme::readout(theme::current().negative);
    readout_card(
        f,
        cols[0],
        "Daily Loss Limit",
        app.readout_text(Readout::DailyLossLimit),
        style,
    );
    readout_card(
        f,
        cols[1],
        "Max Overall Drawdown",
        app.readout_text(Readout::MaxLossLimit),
        style,
    );
}

fn render_health(f: &mut Frame, area: Rect, app: &AppState) {
    let displayed = app.readout_displayed(Readout::HealthPct);
    let ratio = if displayed.is_finite() {
        (displayed / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let color = theme::current().health_color(displayed);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::muted())
                .title(" Target / Drawdown Health ")
                .title_style(theme::muted()),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(app.readout_text(Readout::HealthPct));
    f.render_widget(gauge, area);
}

fn render_payout(f: &mut Frame, area: Rect, app: &AppState) {
    let split = app.risk.inputs.profit_split;
    let palette = theme::current();
    let row = |label: String, text: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{label:>28}  "), theme::muted()),
            Span::styled(text, style),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("  Payout  ", theme::accent_bold()),
            Span::styled(format!("[s] {}", split.label()), theme::neutral()),
        ]),
        row(
            format!(
                "Profit Target ({}%)",
                crate::form::display_value(app.risk.inputs.profit_target_pct)
            ),
            app.readout_text(Readout::TargetProfit),
            theme::readout(palette.accent),
        ),
        row(
            format!("Firm Commission ({:.0}%)", split.firm_pct()),
            app.readout_text(Readout::FirmCut),
            theme::readout(palette.neutral),
        ),
        row(
            "Your Take-Home Pay".to_string(),
            app.readout_text(Readout::TraderPayout),
            theme::readout(palette.positive),
        ),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted());
    f.render_widget(Paragraph::new(lines).block(block), area);
}
