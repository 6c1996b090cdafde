//! The terminal transcript: an append-only log of displayed lines.

use serde::Serialize;

/// How many trailing entries the duplicate guard inspects.
const DEDUP_WINDOW: usize = 3;

/// Texts this long or longer are never treated as duplicates.
const DEDUP_MAX_CHARS: usize = 50;

/// Origin of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Echo of what the user submitted.
    User,
    /// Banner and hints from the terminal itself.
    System,
    /// Output of a command.
    Response,
    /// Failure report.
    Error,
}

impl EntryKind {
    /// Gutter glyph shown before the line.
    pub fn prompt(self) -> &'static str {
        match self {
            EntryKind::User => "$",
            EntryKind::System => ">",
            EntryKind::Error => "!",
            EntryKind::Response => "→",
        }
    }
}

/// One displayed line (possibly multi-line text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
    /// Session clock time at which the entry was appended.
    pub timestamp: u64,
}

/// Ordered transcript of the current session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless it repeats a recent short one.
    ///
    /// Returns `false` when the entry was dropped as a duplicate.
    pub fn push(&mut self, kind: EntryKind, text: &str, timestamp: u64) -> bool {
        if self.is_recent_duplicate(kind, text) {
            log::trace!("Dropping duplicate {kind:?} entry: {text}");
            return false;
        }
        self.push_unchecked(kind, text, timestamp);
        true
    }

    /// Append without the duplicate guard (banner lines).
    pub fn push_unchecked(&mut self, kind: EntryKind, text: &str, timestamp: u64) {
        self.entries.push(TranscriptEntry {
            kind,
            text: text.to_string(),
            timestamp,
        });
    }

    /// Replace the whole transcript with one entry.
    pub fn reset_to(&mut self, kind: EntryKind, text: &str, timestamp: u64) {
        self.entries.clear();
        self.push_unchecked(kind, text, timestamp);
    }

    fn is_recent_duplicate(&self, kind: EntryKind, text: &str) -> bool {
        if text.chars().count() >= DEDUP_MAX_CHARS {
            return false;
        }
        let start = self.entries.len().saturating_sub(DEDUP_WINDOW);
        self.entries[start..]
            .iter()
            .any(|e| e.kind == kind && e.text == text)
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}
