//! Panel 2, Position Size: risk inputs, instrument picker and recommended
//! lot size.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use propcalc_core::domain::Category;

use crate::app::{AppState, Readout};
use crate::form::{display_value, PositionField};
use crate::theme;

use super::{field_line, readout_card};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PositionField::ALL.len() as u16 + 3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(cols[0]);

    render_form(f, left[0], app);
    let palette = theme::current();
    readout_card(
        f,
        left[1],
        "Risk Amount",
        app.readout_text(Readout::RiskDollars),
        theme::readout(palette.warning),
    );
    readout_card(
        f,
        left[2],
        "Recommended Size",
        app.readout_text(Readout::PositionSize),
        theme::readout(palette.positive),
    );
    render_picker(f, cols[1], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &AppState) {
    let inputs = &app.position.inputs;
    let preset = app.active_instrument();
    let preset_tick = preset.map_or(0.0, |p| p.tick_value);
    let unit = preset.map_or("unit", |p| p.unit.as_str());

    let mut lines = vec![Line::from(Span::styled(
        "[j/k]field [h/l]adjust [Enter]type [o]use preset",
        theme::muted(),
    ))];
    for (i, field) in PositionField::ALL.iter().enumerate() {
        let mut line = field_line(
            field.label(),
            field.get(inputs, preset_tick),
            field.affix(),
            i == app.position.cursor,
            app.edit_buffer.as_deref(),
        );
        match field {
            PositionField::StopLoss => {
                line.push_span(Span::styled(format!(" {unit}s"), theme::muted()));
            }
            PositionField::TickValue => {
                let source = if inputs.tick_value_override.is_some() {
                    " (manual)"
                } else {
                    " (preset)"
                };
                line.push_span(Span::styled(source, theme::muted()));
            }
            _ => {}
        }
        lines.push(line);
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_picker(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::muted())
        .title(" Instrument [c]category [ / ]pick ")
        .title_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let selection = app.position.selection;
    let tabs = Tabs::new(Category::ALL.iter().map(|c| c.label()))
        .select(selection.category().index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold().add_modifier(Modifier::UNDERLINED));
    f.render_widget(tabs, rows[0]);

    let presets = app.catalog.filtered(selection.category());
    let mut lines: Vec<Line> = Vec::with_capacity(presets.len());
    if presets.is_empty() {
        lines.push(Line::from(Span::styled("  no presets", theme::muted())));
    }
    for (i, preset) in presets.iter().enumerate() {
        let active = i == selection.index();
        let (marker, style) = if active {
            ("▸ ", theme::accent_bold())
        } else {
            ("  ", theme::text())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<10}", preset.name), style),
            Span::styled(
                format!(
                    " {} / ${} per {}",
                    display_value(preset.tick_size),
                    display_value(preset.tick_value),
                    preset.unit
                ),
                theme::muted(),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(lines), rows[1]);
}
