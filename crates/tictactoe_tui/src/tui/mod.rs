//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::config::TuiConfig;
use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    // Log to file so output doesn't interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let mouse = *config.mouse();
    let mut terminal = match setup_terminal(mouse) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = restore_terminal(None, mouse);
            return Err(err);
        }
    };

    let mut app = App::new(*config.show_hints());
    let res = run_loop(&mut terminal, &mut app);

    let restored = restore_terminal(Some(&mut terminal), mouse);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    // A loop error outranks a restore error.
    res.and(restored)
}

fn setup_terminal(mouse: bool) -> Result<Term> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Undoes [`setup_terminal`], attempting every step even if one fails.
///
/// Returns the first failure. Without a terminal (setup failed part-way)
/// the escape sequences go straight to stdout.
fn restore_terminal(terminal: Option<&mut Term>, mouse: bool) -> Result<()> {
    let mut steps = RestoreSteps::default();

    steps.note("disable raw mode", disable_raw_mode());
    match terminal {
        Some(terminal) => {
            if mouse {
                steps.note(
                    "disable mouse capture",
                    execute!(terminal.backend_mut(), DisableMouseCapture),
                );
            }
            steps.note(
                "leave alternate screen",
                execute!(terminal.backend_mut(), LeaveAlternateScreen),
            );
            steps.note("show cursor", terminal.show_cursor());
        }
        None => {
            let mut stdout = io::stdout();
            if mouse {
                steps.note("disable mouse capture", execute!(stdout, DisableMouseCapture));
            }
            steps.note("leave alternate screen", execute!(stdout, LeaveAlternateScreen));
        }
    }

    steps.finish()
}

/// Collects the outcome of best-effort cleanup steps, keeping the first error.
#[derive(Debug, Default)]
struct RestoreSteps {
    first_err: Option<anyhow::Error>,
}

impl RestoreSteps {
    fn note(&mut self, step: &str, result: io::Result<()>) {
        if let Err(err) = result {
            warn!(step, error = %err, "Terminal restore step failed");
            if self.first_err.is_none() {
                self.first_err = Some(anyhow::Error::new(err).context(format!("Failed to {}", step)));
            }
        }
    }

    fn finish(self) -> Result<()> {
        match self.first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Draw, wait for one event, handle it, repeat.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut areas = Default::default();
        terminal.draw(|frame| areas = ui::draw(frame, app))?;
        app.set_cell_areas(areas);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
    Ok(())
}
