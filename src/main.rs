//! Agency Intake - terminal front end for the agency's enquiry wizards
//!
//! A Ratatui-based TUI that walks visitors through the service request,
//! job application and internship application forms, plus a quick contact form.

mod app;
mod config;
mod error;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::AppState;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use submission::SimulatedSink;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agency_intake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config: {err}");
        TuiConfig::default()
    });
    let sink = SimulatedSink::from_settings(config.submission_delay_ms, config.simulate_failure());
    tracing::info!(delay_ms = sink.delay().as_millis() as u64, "Using simulated intake service");

    let state = AppState::new(config.identity.clone());
    let mut app = App::new(state, Arc::new(sink), !config.skip_loading_screen());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Update splash animation if active
        let in_splash = app.in_splash();
        if in_splash {
            app.update_splash();
        }

        // Pick up sink answers from background submissions
        app.poll_submissions();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling during animation or while a submission is pending (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if in_splash || app.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Blocking poll is fine: submissions run on tokio worker threads
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
