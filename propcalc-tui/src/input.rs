//! Keyboard input dispatch: field editor, then global keys, then panel keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel};
use crate::form::{self, PositionField, RiskField};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. An open field editor consumes input first.
    if app.edit_buffer.is_some() {
        handle_edit_key(app, key);
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            if let Some(panel) = Panel::from_index(index) {
                app.switch_panel(panel);
            }
            return;
        }
        KeyCode::Tab => {
            let panel = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel.prev()
            } else {
                app.active_panel.next()
            };
            app.switch_panel(panel);
            return;
        }
        KeyCode::BackTab => {
            app.switch_panel(app.active_panel.prev());
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Risk => handle_risk_key(app, key),
        Panel::Position => handle_position_key(app, key),
        Panel::Help => {}
    }
}

fn handle_edit_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.edit_buffer = None;
        }
        KeyCode::Enter => commit_edit(app),
        KeyCode::Backspace => {
            if let Some(buffer) = app.edit_buffer.as_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(c) if form::is_number_char(c) => {
            if let Some(buffer) = app.edit_buffer.as_mut() {
                buffer.push(c);
            }
        }
        _ => {}
    }
}

fn begin_edit(app: &mut AppState) {
    app.edit_buffer = Some(form::edit_text(focused_value(app)));
}

fn commit_edit(app: &mut AppState) {
    let Some(text) = app.edit_buffer.clone() else {
        return;
    };
    match form::parse_number(&text) {
        Some(value) => {
            app.edit_buffer = None;
            set_focused_value(app, value);
            app.set_status(format!("{} set to {}", focused_label(app), form::display_value(value)));
        }
        // Editor stays open so the text can be fixed.
        None => app.set_warning(format!("Not a number: '{text}'")),
    }
}

fn handle_risk_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.risk.cursor + 1 < RiskField::ALL.len() {
                app.risk.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.risk.cursor = app.risk.cursor.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => adjust_field(app, -1.0),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            adjust_field(app, 1.0)
        }
        KeyCode::Enter => begin_edit(app),
        KeyCode::Char('s') => {
            let split = app.risk.inputs.profit_split.toggle();
            app.risk.inputs.profit_split = split;
            app.recompute();
            app.set_status(format!("Profit split: {}", split.label()));
        }
        _ => {}
    }
}

fn handle_position_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.position.cursor + 1 < PositionField::ALL.len() {
                app.position.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.position.cursor = app.position.cursor.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => adjust_field(app, -1.0),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            adjust_field(app, 1.0)
        }
        KeyCode::Enter => begin_edit(app),
        KeyCode::Char('c') => {
            app.position.selection.next_category(&app.catalog);
            instrument_changed(app);
        }
        KeyCode::Char('C') => {
            app.position.selection.prev_category(&app.catalog);
            instrument_changed(app);
        }
        KeyCode::Char(']') => {
            app.position.selection.next_instrument(&app.catalog);
            instrument_changed(app);
        }
        KeyCode::Char('[') => {
            app.position.selection.prev_instrument(&app.catalog);
            instrument_changed(app);
        }
        KeyCode::Char('o') => {
            if app.position.inputs.tick_value_override.take().is_some() {
                app.recompute();
                app.set_status("Value per unit reset to instrument preset");
            }
        }
        _ => {}
    }
}

fn instrument_changed(app: &mut AppState) {
    app.recompute();
    if let Some(preset) = app.active_instrument() {
        let msg = format!(
            "{} · ${} per {}",
            preset.name,
            form::display_value(preset.tick_value),
            preset.unit
        );
        app.set_status(msg);
    }
}

fn preset_tick_value(app: &AppState) -> f64 {
    app.active_instrument().map_or(0.0, |p| p.tick_value)
}

fn focused_value(app: &AppState) -> f64 {
    match app.active_panel {
        Panel::Risk => app.risk.field().get(&app.risk.inputs),
        Panel::Position => app
            .position
            .field()
            .get(&app.position.inputs, preset_tick_value(app)),
        Panel::Help => 0.0,
    }
}

fn focused_label(app: &AppState) -> &'static str {
    match app.active_panel {
        Panel::Risk => app.risk.field().label(),
        Panel::Position => app.position.field().label(),
        Panel::Help => "",
    }
}

fn set_focused_value(app: &mut AppState, value: f64) {
    match app.active_panel {
        Panel::Risk => {
            let field = app.risk.field();
            field.set(&mut app.risk.inputs, value);
        }
        Panel::Position => {
            let field = app.position.field();
            field.set(&mut app.position.inputs, value);
        }
        Panel::Help => return,
    }
    app.recompute();
}

fn adjust_field(app: &mut AppState, direction: f64) {
    let step = match app.active_panel {
        Panel::Risk => app.risk.field().step(),
        Panel::Position => app.position.field().step(),
        Panel::Help => return,
    };
    let value = focused_value(app) + step * direction;
    set_focused_value(app, value);
}
