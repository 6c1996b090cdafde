//! Command interpreter and terminal session.
//!
//! The interpreter maps free text to an [`Intent`] naming a content panel.
//! The session wraps it with built-in commands (registered by name, the
//! same registry-based dispatch as a shell), the transcript, command
//! history, tab completion, and the timers that drive panel visibility.

pub mod clock;
mod commands;
pub mod history;
pub mod intent;
mod interpreter;
pub mod session;
pub mod transcript;
pub mod typing;

/// Monotonic millisecond clocks (system and manual).
pub use clock::{Clock, ManualClock, SystemClock};
/// A single built-in command trait and the context it runs with.
pub use commands::{Command, Environment};
/// Output produced by a built-in command.
pub use commands::CommandOutput;
/// Registry of built-in commands with dispatch and completion.
pub use commands::CommandRegistry;
/// Words offered by tab completion.
pub use commands::COMPLETION_WORDS;
/// Register the built-in session commands (help, clear, whoami, ls, exit).
pub use commands::register_builtins;
/// Intent types produced by the interpreter.
pub use intent::{Intent, IntentKind, IntentListener, IntentPayload, SkillCategory};
/// Map raw input to a content intent.
pub use interpreter::interpret;
/// The terminal session state machine.
pub use session::{Completion, SessionEvent, Submission, TerminalSession};
/// Transcript entries.
pub use transcript::{EntryKind, Transcript, TranscriptEntry};
