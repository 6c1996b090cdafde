//! Bounded command history with an arrow-key cursor.

use std::collections::VecDeque;

use portfolioterm_types::input::HistoryDirection;

/// Submitted commands, oldest first, capped at a fixed length.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    limit: usize,
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Create an empty history holding at most `limit` commands.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
            cursor: None,
        }
    }

    /// Record a submitted command, dropping the oldest beyond the limit.
    ///
    /// Consecutive repeats are kept; the history mirrors every submission.
    pub fn push(&mut self, command: &str) {
        self.entries.push_back(command.to_string());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.cursor = None;
    }

    /// Move the cursor one step and return the new input line.
    ///
    /// `None` means the step was a no-op and the input line is unchanged.
    /// Stepping down past the newest entry returns an empty line.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Option<String> {
        match direction {
            HistoryDirection::Up => {
                let newest = self.entries.len().checked_sub(1)?;
                let idx = match self.cursor {
                    None => newest,
                    Some(i) => i.saturating_sub(1),
                };
                self.cursor = Some(idx);
                self.entries.get(idx).cloned()
            },
            HistoryDirection::Down => {
                let next = self.cursor? + 1;
                if next >= self.entries.len() {
                    self.cursor = None;
                    Some(String::new())
                } else {
                    self.cursor = Some(next);
                    self.entries.get(next).cloned()
                }
            },
        }
    }

    /// Forget the cursor position (the input line was edited).
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
