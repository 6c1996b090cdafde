//! Typewriter animation for the welcome banner.
//!
//! Lines are revealed one character at a time. Each line waits a short
//! lead-in before its first character; a finished line is handed back to
//! the caller for the transcript and the next line begins.

use portfolioterm_types::config::TerminalConfig;

/// Lead-in before the first banner line.
const FIRST_LINE_DELAY_MS: u64 = 500;
/// Lead-in before the third line (after the name and title).
const THIRD_LINE_DELAY_MS: u64 = 300;
/// Lead-in before every other line.
const LINE_DELAY_MS: u64 = 100;

/// The welcome banner for `config`'s owner.
pub fn welcome_lines(config: &TerminalConfig) -> Vec<String> {
    [
        config.owner_name.as_str(),
        config.owner_title.as_str(),
        "",
        "Welcome. You know what to do.",
        "",
        "Available commands:",
        "  about     - Who I am and what I do",
        "  projects  - Things I've built",
        "  skills    - Tech stack and tools",
        "  contact   - Let's connect",
        "",
        "Type \"help\" for more options, or just start exploring.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn line_delay(index: usize) -> u64 {
    match index {
        0 => FIRST_LINE_DELAY_MS,
        2 => THIRD_LINE_DELAY_MS,
        _ => LINE_DELAY_MS,
    }
}

/// Character-by-character reveal of a fixed list of lines.
#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<String>,
    line: usize,
    // Characters of `lines[line]` revealed so far.
    typed: usize,
    next_due: Option<u64>,
    char_ms: u64,
}

impl Typewriter {
    /// Start typing `lines` at time `now`.
    pub fn new(lines: Vec<String>, char_ms: u64, now: u64) -> Self {
        let next_due = (!lines.is_empty()).then(|| now.saturating_add(line_delay(0)));
        Self {
            lines,
            line: 0,
            typed: 0,
            next_due,
            char_ms,
        }
    }

    /// Advance to `now` and return the lines completed along the way.
    pub fn poll(&mut self, now: u64) -> Vec<String> {
        let mut done = Vec::new();
        while let Some(due) = self.next_due
            && due <= now
        {
            let len = self.lines[self.line].chars().count();
            if self.typed < len {
                self.typed += 1;
                self.next_due = Some(due.saturating_add(self.char_ms));
            } else {
                done.push(self.lines[self.line].clone());
                self.line += 1;
                self.typed = 0;
                self.next_due = (self.line < self.lines.len())
                    .then(|| due.saturating_add(line_delay(self.line)));
            }
        }
        done
    }

    /// Complete immediately, returning every line not yet handed out.
    pub fn finish(&mut self) -> Vec<String> {
        let rest = self.lines.get(self.line..).unwrap_or_default().to_vec();
        self.cancel();
        rest
    }

    /// Stop without producing further lines.
    pub fn cancel(&mut self) {
        self.line = self.lines.len();
        self.typed = 0;
        self.next_due = None;
    }

    pub fn is_done(&self) -> bool {
        self.next_due.is_none()
    }

    /// The partially typed current line.
    pub fn partial(&self) -> String {
        match self.lines.get(self.line) {
            Some(line) if !self.is_done() => line.chars().take(self.typed).collect(),
            _ => String::new(),
        }
    }
}
