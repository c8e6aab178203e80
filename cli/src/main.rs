//! Marquee CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`marquee_engine`] (carousel state) and [`marquee_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> Showcase + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`marquee_tui::InputPump`])
//! 3. Advance carousel clocks by the measured frame delta
//! 4. Render frame and keep its layout for the next round of hit-testing

mod assets;

use std::fs::{self, File, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::time::{self, MissedTickBehavior};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use marquee_config::MarqueeConfig;
use marquee_engine::Showcase;
use marquee_tui::{Card, FrameLayout, InputPump, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than writing over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.marquee/logs/marquee.log
    if let Some(config_dir) = dirs::home_dir().map(|home| home.join(".marquee")) {
        candidates.push(config_dir.join("logs").join("marquee.log"));
    }

    // Fallback: ./.marquee/logs/marquee.log
    candidates.push(PathBuf::from(".marquee").join("logs").join("marquee.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode, the alternate screen, mouse capture (hover, drag and
/// clicks) and focus reporting. On drop, all terminal state is restored so the
/// terminal stays usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        ) {
            let _ = disable_raw_mode();
            let _ = execute!(
                out,
                DisableFocusChange,
                DisableMouseCapture,
                LeaveAlternateScreen
            );
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(
                    stdout(),
                    DisableFocusChange,
                    DisableMouseCapture,
                    LeaveAlternateScreen
                );
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Load errors are logged by the loader; fall back to defaults.
    let config = MarqueeConfig::load().ok().flatten().unwrap_or_default();

    let mut showcase = Showcase::new(
        assets::demo_cards()?,
        config.slide_config(),
        config.continuous_config(),
        config.display_mode(),
        config.ui_options(),
    );

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut showcase).await
    };

    if let Err(err) = &result {
        tracing::warn!("Exiting after error: {err:?}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app<B>(terminal: &mut Terminal<B>, showcase: &mut Showcase<Card>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut layout = FrameLayout::default();
    let mut last_frame = Instant::now();

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(showcase, &mut input, &layout) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        let now = Instant::now();
        showcase.tick(now.duration_since(last_frame));
        last_frame = now;

        if let Err(e) = terminal.draw(|frame| layout = draw(frame, showcase)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
