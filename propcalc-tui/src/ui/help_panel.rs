//! Panel 3, Help: keyboard shortcuts and the formulas behind the readouts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Editing Fields");
    key(&mut lines, "j / k", "Move between fields");
    key(&mut lines, "h / l  - / +", "Step the focused value down / up");
    key(&mut lines, "Enter", "Type a value; Enter applies, Esc cancels");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1: Risk & Payout");
    key(&mut lines, "s", "Toggle 80/20 and 90/10 profit split");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2: Position Size");
    key(&mut lines, "c / C", "Next / previous instrument category");
    key(&mut lines, "] / [", "Next / previous instrument");
    key(&mut lines, "o", "Drop the manual value per unit, use the preset");
    lines.push(Line::from(""));

    section(&mut lines, "Formulas");
    key(&mut lines, "Loss limits", "account × drawdown %");
    key(&mut lines, "Health", "profit target % ÷ max drawdown %, capped at 100%");
    key(&mut lines, "Payout", "target profit split between trader and firm");
    key(&mut lines, "Position size", "risk $ ÷ (stop units × value per unit)");

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
