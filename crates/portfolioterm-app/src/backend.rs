//! Crossterm terminal backend: raw-mode setup, key polling, frame output.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use portfolioterm_types::error::{PortfolioError, Result};
use portfolioterm_types::input::{InputEvent, Key};

pub struct TermBackend {
    out: Stdout,
    active: bool,
}

impl TermBackend {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            active: false,
        }
    }

    /// Enter raw mode on the alternate screen.
    pub fn init(&mut self) -> Result<()> {
        terminal::enable_raw_mode()
            .map_err(|e| PortfolioError::Backend(format!("enable raw mode: {e}")))?;
        execute!(self.out, EnterAlternateScreen, Hide)?;
        self.active = true;
        log::debug!("Terminal backend initialized");
        Ok(())
    }

    /// Terminal size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size().map_err(|e| PortfolioError::Backend(format!("terminal size: {e}")))
    }

    /// Wait up to `timeout` for input, then drain whatever else is queued.
    pub fn poll_events(&mut self, timeout: Duration) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let mut wait = timeout;
        while event::poll(wait)? {
            if let Some(e) = map_event(event::read()?) {
                events.push(e);
            }
            wait = Duration::ZERO;
        }
        Ok(events)
    }

    /// Replace the screen contents with `lines`.
    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, row), Print(line))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn shutdown(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermBackend {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::warn!("Could not restore terminal: {e}");
        }
    }
}

/// Map a crossterm event to a PORTFOLIOTERM input event.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(InputEvent::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => Some(InputEvent::TextInput(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::KeyPress(Key::Enter)),
        KeyCode::Tab => Some(InputEvent::KeyPress(Key::Tab)),
        KeyCode::Esc => Some(InputEvent::KeyPress(Key::Escape)),
        KeyCode::Up => Some(InputEvent::KeyPress(Key::Up)),
        KeyCode::Down => Some(InputEvent::KeyPress(Key::Down)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn printable_keys_become_text() {
        assert_eq!(
            map_event(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(InputEvent::TextInput('a'))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(InputEvent::TextInput('A'))
        );
    }

    #[test]
    fn editing_and_navigation_keys() {
        let cases = [
            (KeyCode::Backspace, InputEvent::Backspace),
            (KeyCode::Enter, InputEvent::KeyPress(Key::Enter)),
            (KeyCode::Tab, InputEvent::KeyPress(Key::Tab)),
            (KeyCode::Esc, InputEvent::KeyPress(Key::Escape)),
            (KeyCode::Up, InputEvent::KeyPress(Key::Up)),
            (KeyCode::Down, InputEvent::KeyPress(Key::Down)),
        ];
        for (code, expected) in cases {
            assert_eq!(map_event(press(code, KeyModifiers::NONE)), Some(expected));
        }
    }

    #[test]
    fn ctrl_c_and_ctrl_d_quit() {
        assert_eq!(
            map_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_event(press(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn unmapped_events_are_dropped() {
        assert_eq!(map_event(press(KeyCode::Left, KeyModifiers::NONE)), None);
        assert_eq!(map_event(press(KeyCode::F(1), KeyModifiers::NONE)), None);
        assert_eq!(map_event(Event::FocusGained), None);
        assert_eq!(map_event(Event::Resize(80, 24)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(key)), None);
    }
}
