use std::cell::RefCell;
use std::rc::Rc;

use portfolioterm_content::{PanelBoard, Portfolio};
use portfolioterm_terminal::{Clock, SessionEvent, TerminalSession};
use portfolioterm_types::config::TerminalConfig;
use portfolioterm_types::input::InputEvent;

use crate::render;

/// Produces the clock for each new session.
pub type ClockFactory = Box<dyn Fn() -> Box<dyn Clock>>;

/// Whether the main loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// The running session plus what is needed to start a fresh one.
pub struct AppState {
    config: TerminalConfig,
    portfolio: Portfolio,
    make_clock: ClockFactory,
    pub session: TerminalSession,
    pub board: Rc<RefCell<PanelBoard>>,
    pub reloads: u32,
}

impl AppState {
    pub fn new(config: TerminalConfig, portfolio: Portfolio, make_clock: ClockFactory) -> Self {
        let (session, board) = start_session(&config, &portfolio, &make_clock);
        Self {
            config,
            portfolio,
            make_clock,
            session,
            board,
            reloads: 0,
        }
    }

    /// Discard the session and panels and start over, as a page reload would.
    pub fn reload(&mut self) {
        self.session.cancel_typing();
        let (session, board) = start_session(&self.config, &self.portfolio, &self.make_clock);
        self.session = session;
        self.board = board;
        self.reloads += 1;
        log::info!("Session reloaded ({} so far)", self.reloads);
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> InputResult {
        if *event == InputEvent::Quit {
            return InputResult::Quit;
        }
        self.session.handle_input(event);
        InputResult::Continue
    }

    /// Fire session timers and act on what they report.
    pub fn tick(&mut self) {
        for event in self.session.tick() {
            match event {
                SessionEvent::IdleExpired => log::debug!("Panel hidden after idle timeout"),
                SessionEvent::Reload => self.reload(),
            }
        }
    }

    pub fn frame(&self, width: usize, height: usize) -> Vec<String> {
        render::compose(&self.session, &self.board.borrow(), width, height)
    }
}

fn start_session(
    config: &TerminalConfig,
    portfolio: &Portfolio,
    make_clock: &ClockFactory,
) -> (TerminalSession, Rc<RefCell<PanelBoard>>) {
    let board = Rc::new(RefCell::new(PanelBoard::new(portfolio)));
    let mut session = TerminalSession::new(config.clone(), make_clock());
    session.subscribe(Box::new(Rc::clone(&board)));
    (session, board)
}
