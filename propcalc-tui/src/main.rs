//! propcalc: prop-firm risk and position-size calculator for the terminal.
//!
//! Panels:
//! 1. Risk & Payout: drawdown limits, target health, profit split
//! 2. Position Size: lot size from risk, stop distance and instrument
//! 3. Help: keyboard shortcuts

mod app;
mod form;
mod input;
mod logging;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use propcalc_core::CalculatorConfig;

use crate::app::AppState;

#[derive(Parser, Debug)]
#[command(name = "propcalc", version, about = "Prop-firm risk and position-size calculator")]
struct Args {
    /// Config file (defaults to <config_dir>/propcalc/config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Override the readout animation length in milliseconds (0 disables it)
    #[arg(long)]
    duration_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init(&log_dir)?;

    let mut config = load_config(args.config.as_ref())?;
    if let Some(ms) = args.duration_ms {
        config.animation.duration_ms = ms;
    }
    tracing::info!(
        duration_ms = config.animation.duration_ms,
        log_dir = %log_dir.display(),
        "starting propcalc"
    );

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(&config);

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!("propcalc exited");
    result
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&PathBuf>) -> Result<CalculatorConfig> {
    if let Some(path) = explicit {
        return CalculatorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()));
    }
    let Some(path) = dirs::config_dir().map(|dir| dir.join("propcalc").join("config.toml"))
    else {
        return Ok(CalculatorConfig::default());
    };
    if path.exists() {
        CalculatorConfig::load(&path).with_context(|| format!("loading config {}", path.display()))
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(CalculatorConfig::default())
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Deliver due animation frames
        let now = app.frame_time();
        app.tick(now);

        // 2. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 3. Poll for input; short timeout only while something is moving
        let timeout = if app.is_animating() {
            app.animation.frame_interval()
        } else {
            app.animation.idle_poll()
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
