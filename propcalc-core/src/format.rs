//! Presentation formatters handed to animated readouts.
//!
//! Readouts never format on their own; the caller picks one of these (or
//! supplies any closure) per value.

use std::sync::Arc;

/// Number-to-text callback owned by a readout.
pub type Formatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Shown in place of a value that is not a finite number.
pub const PLACEHOLDER: &str = "—";

/// US-dollar currency with no fraction digits: `$100,000`, `-$2,500`.
pub fn usd_whole() -> Formatter {
    Arc::new(format_usd_whole)
}

/// Fixed number of decimals: `fixed(2)` renders `2.00`.
pub fn fixed(decimals: usize) -> Formatter {
    Arc::new(move |v| format_fixed(v, decimals))
}

/// Whole percentage: `87%`.
pub fn percent_whole() -> Formatter {
    Arc::new(|v| format!("{}%", format_fixed(v, 0)))
}

/// Fixed decimals followed by a unit: `with_suffix(2, "lots")` renders `2.00 lots`.
pub fn with_suffix(decimals: usize, suffix: impl Into<String>) -> Formatter {
    let suffix = suffix.into();
    Arc::new(move |v| format!("{} {suffix}", format_fixed(v, decimals)))
}

pub fn format_usd_whole(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let rounded = value.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    // -0.4 rounds to -0.0, which is not below zero
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let text = format!("{value:.decimals$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
