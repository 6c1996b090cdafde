//! PORTFOLIOTERM terminal entry point.
//!
//! Runs the portfolio terminal full-screen in the current tty. Type `help`
//! for commands; Ctrl-C quits.

mod app_state;
mod backend;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use app_state::{AppState, InputResult};
use backend::TermBackend;
use portfolioterm_content::load_portfolio;
use portfolioterm_terminal::{Clock, SystemClock};
use portfolioterm_types::config::load_config;

/// Input poll interval; also the timer resolution of the main loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(15);

/// Log to stderr, or to the file named by PORTFOLIOTERM_LOG so output does
/// not land on the full-screen display.
fn init_logging() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Ok(path) = std::env::var("PORTFOLIOTERM_LOG") {
        let file = std::fs::File::create(&path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    // Resolve config from CLI arg or PORTFOLIOTERM_CONFIG.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PORTFOLIOTERM_CONFIG").ok())
        .map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    let content_path = std::env::var("PORTFOLIOTERM_CONTENT").ok().map(PathBuf::from);
    let portfolio = load_portfolio(content_path.as_deref())?;
    log::info!(
        "Starting PORTFOLIOTERM for {} ({} projects, {} skills)",
        config.owner_name,
        portfolio.projects.len(),
        portfolio.skills.len(),
    );

    let mut state = AppState::new(
        config,
        portfolio,
        Box::new(|| Box::new(SystemClock::new()) as Box<dyn Clock>),
    );

    let mut backend = TermBackend::new();
    backend.init()?;

    'running: loop {
        for event in backend.poll_events(FRAME_INTERVAL)? {
            if state.handle_input(&event) == InputResult::Quit {
                break 'running;
            }
        }
        state.tick();

        let (cols, rows) = backend.size()?;
        backend.draw(&state.frame(usize::from(cols), usize::from(rows)))?;
    }

    backend.shutdown()?;
    log::info!("PORTFOLIOTERM shut down cleanly");
    Ok(())
}
