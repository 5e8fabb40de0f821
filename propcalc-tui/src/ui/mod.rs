//! Top-level UI layout: one panel at a time above a status bar.

pub mod help_panel;
pub mod position_panel;
pub mod risk_panel;
pub mod status_bar;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::form::Affix;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_panel(f, chunks[0], app);
    status_bar::render(f, chunks[1], app);
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Risk => risk_panel::render(f, inner, app),
        Panel::Position => position_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// One labelled form row. `editing` replaces the value with the live buffer.
pub(crate) fn field_line<'a>(
    label: &str,
    value: f64,
    affix: Affix,
    active: bool,
    editing: Option<&str>,
) -> Line<'a> {
    let label_style = if active { theme::selected() } else { theme::muted() };
    let value_span = match editing {
        Some(buffer) if active => Span::styled(format!("{buffer}▏"), theme::warning()),
        _ => Span::styled(
            affix.wrap(&crate::form::display_value(value)),
            if active { theme::accent_bold() } else { theme::text() },
        ),
    };
    Line::from(vec![
        Span::styled(format!("{label:>22}: "), label_style),
        value_span,
    ])
}

/// Bordered card with a single centered readout.
pub(crate) fn readout_card(f: &mut Frame, area: Rect, title: &str, text: String, style: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {title} "))
        .title_style(theme::muted());
    let para = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(para, area);
}
