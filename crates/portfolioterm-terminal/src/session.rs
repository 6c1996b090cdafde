//! The terminal session: transcript, history, active panel, and timers.
//!
//! A session is driven entirely by discrete calls (a keystroke, a submit, a
//! timer poll) and each call runs to completion. Timers are deadlines on the
//! injected [`Clock`]; every call first fires whatever has come due, so
//! transcript order always matches event order.

use std::collections::HashMap;

use portfolioterm_types::config::TerminalConfig;
use portfolioterm_types::input::{HistoryDirection, InputEvent, Key};

use crate::clock::{Clock, Timer};
use crate::commands::{CommandOutput, CommandRegistry, Environment, register_builtins};
use crate::history::CommandHistory;
use crate::intent::{Intent, IntentKind, IntentListener};
use crate::interpreter::interpret;
use crate::transcript::{EntryKind, Transcript};
use crate::typing::{Typewriter, welcome_lines};

const CLEARED_TEXT: &str = "Terminal cleared. Type \"help\" for available commands.";
const HELP_HINT: &str = "Type \"help\" to see all available commands.";

/// What a call to [`TerminalSession::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Empty or whitespace-only input; nothing happened.
    Blank,
    /// The same command is still in flight; dropped.
    Debounced,
    /// A built-in command ran.
    Builtin,
    /// A content intent was dispatched.
    Dispatched(IntentKind),
    /// Nothing matched; an error was reported.
    Unrecognized,
}

/// Result of a tab-completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// One candidate; the input line now holds it.
    Single(&'static str),
    /// Several candidates; they were listed in the transcript.
    Multiple(Vec<&'static str>),
    /// No candidate; nothing changed.
    NoMatch,
}

/// Timer-driven happenings reported by [`TerminalSession::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The idle timer expired and the active panel was hidden.
    IdleExpired,
    /// The exit delay elapsed; the front end should start a fresh session.
    Reload,
}

/// One isolated terminal session.
pub struct TerminalSession {
    config: TerminalConfig,
    clock: Box<dyn Clock>,
    registry: CommandRegistry,
    transcript: Transcript,
    history: CommandHistory,
    input: String,
    active: Option<IntentKind>,
    last_intent: Option<Intent>,
    idle_timer: Timer,
    exit_timer: Timer,
    // Trimmed command -> marker that expires when it may be submitted again.
    in_flight: HashMap<String, Timer>,
    typewriter: Option<Typewriter>,
    listeners: Vec<Box<dyn IntentListener>>,
    pending_events: Vec<SessionEvent>,
}

impl TerminalSession {
    /// Start a session. The welcome banner is typed out, or printed at once
    /// when the animation is disabled.
    pub fn new(config: TerminalConfig, clock: Box<dyn Clock>) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);

        let now = clock.now_ms();
        let banner = welcome_lines(&config);
        let mut transcript = Transcript::new();
        let typewriter = if config.welcome_animation {
            Some(Typewriter::new(banner, config.typing_char_ms, now))
        } else {
            for line in &banner {
                transcript.push_unchecked(EntryKind::System, line, now);
            }
            None
        };

        log::info!("Terminal session started for {}", config.owner_name);
        Self {
            history: CommandHistory::new(config.history_limit),
            config,
            clock,
            registry,
            transcript,
            input: String::new(),
            active: None,
            last_intent: None,
            idle_timer: Timer::new(),
            exit_timer: Timer::new(),
            in_flight: HashMap::new(),
            typewriter,
            listeners: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Register a panel to receive every dispatched intent.
    pub fn subscribe(&mut self, listener: Box<dyn IntentListener>) {
        self.listeners.push(listener);
    }

    // -- Event entry points --

    /// Fire due timers and return what they did.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        self.fire_due_timers();
        std::mem::take(&mut self.pending_events)
    }

    /// Submit a command line.
    pub fn submit(&mut self, text: &str) -> Submission {
        self.fire_due_timers();

        let command = text.trim();
        if command.is_empty() {
            return Submission::Blank;
        }
        if self.in_flight.contains_key(command) {
            log::debug!("Dropping repeated submission: {command}");
            return Submission::Debounced;
        }

        self.finish_typing();
        let now = self.clock.now_ms();
        self.history.push(command);
        let mut marker = Timer::new();
        marker.start(now, self.config.debounce_ms);
        self.in_flight.insert(command.to_string(), marker);

        self.transcript.push(EntryKind::User, command, now);

        let env = Environment {
            config: &self.config,
            registry: &self.registry,
        };
        if let Some(output) = self.registry.execute(command, &env) {
            self.apply_builtin(output);
            return Submission::Builtin;
        }

        match interpret(command) {
            Some(intent) => {
                let kind = intent.kind;
                self.dispatch(intent);
                Submission::Dispatched(kind)
            },
            None => {
                log::debug!("Unrecognized command: {command}");
                self.transcript
                    .push(EntryKind::Error, &format!("command not found: {command}"), now);
                self.transcript.push(EntryKind::System, HELP_HINT, now);
                Submission::Unrecognized
            },
        }
    }

    /// Submit the current input line. The line is cleared unless the
    /// submission was blank or dropped.
    pub fn submit_input(&mut self) -> Submission {
        let line = self.input.clone();
        let result = self.submit(&line);
        if !matches!(result, Submission::Blank | Submission::Debounced) {
            self.input.clear();
        }
        result
    }

    /// Step through history, replacing the input line. Returns `false` when
    /// the step was a no-op.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> bool {
        self.fire_due_timers();
        match self.history.navigate(direction) {
            Some(line) => {
                self.input = line;
                true
            },
            None => false,
        }
    }

    /// Complete `partial` against the command vocabulary.
    pub fn complete_tab(&mut self, partial: &str) -> Completion {
        self.fire_due_timers();
        let mut matches = self.registry.completions(partial);
        match matches.len() {
            0 => Completion::NoMatch,
            1 => {
                let word = matches.remove(0);
                self.input = format!("{word} ");
                self.history.reset_cursor();
                Completion::Single(word)
            },
            _ => {
                let now = self.clock.now_ms();
                self.transcript.push(
                    EntryKind::Response,
                    &format!("Possible completions: {}", matches.join(", ")),
                    now,
                );
                Completion::Multiple(matches)
            },
        }
    }

    /// Feed one input event. Keystrokes are ignored while the banner types.
    pub fn handle_input(&mut self, event: &InputEvent) {
        self.fire_due_timers();
        if self.is_typing() {
            return;
        }
        match event {
            InputEvent::TextInput(ch) => {
                self.input.push(*ch);
                self.history.reset_cursor();
            },
            InputEvent::Backspace => {
                self.input.pop();
                self.history.reset_cursor();
            },
            InputEvent::KeyPress(Key::Enter) => {
                self.submit_input();
            },
            InputEvent::KeyPress(Key::Tab) => {
                let partial = self.input.clone();
                self.complete_tab(&partial);
            },
            InputEvent::KeyPress(Key::Escape) => {
                self.input.clear();
                self.history.reset_cursor();
            },
            InputEvent::KeyPress(key) => {
                if let Some(direction) = key.history_direction() {
                    self.navigate_history(direction);
                }
            },
            InputEvent::Quit => {},
        }
    }

    /// Stop the banner animation without printing the rest of it.
    pub fn cancel_typing(&mut self) {
        if let Some(mut tw) = self.typewriter.take() {
            tw.cancel();
        }
    }

    // -- Read access --

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The panel currently shown, if the idle timer has not expired.
    pub fn active_intent(&self) -> Option<IntentKind> {
        let now = self.clock.now_ms();
        match self.idle_timer.deadline() {
            Some(deadline) if now < deadline => self.active,
            _ => None,
        }
    }

    /// The most recently dispatched intent, for polling panels.
    pub fn last_intent(&self) -> Option<&Intent> {
        self.last_intent.as_ref()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_typing(&self) -> bool {
        self.typewriter.as_ref().is_some_and(|tw| !tw.is_done())
    }

    /// The banner line currently being typed.
    pub fn typing_line(&self) -> String {
        self.typewriter
            .as_ref()
            .map(Typewriter::partial)
            .unwrap_or_default()
    }

    /// Whether an `exit` is waiting for its reload.
    pub fn is_closing(&self) -> bool {
        self.exit_timer.is_armed()
    }

    // -- Internals --

    fn fire_due_timers(&mut self) {
        let now = self.clock.now_ms();

        if let Some(tw) = self.typewriter.as_mut() {
            for line in tw.poll(now) {
                self.transcript.push_unchecked(EntryKind::System, &line, now);
            }
            if tw.is_done() {
                self.typewriter = None;
            }
        }

        self.in_flight.retain(|_, marker| !marker.fire_if_due(now));

        if self.idle_timer.fire_if_due(now) {
            log::debug!("Idle timeout, hiding {:?}", self.active);
            self.active = None;
            self.pending_events.push(SessionEvent::IdleExpired);
        }

        if self.exit_timer.fire_if_due(now) {
            log::info!("Exit delay elapsed, requesting reload");
            self.pending_events.push(SessionEvent::Reload);
        }
    }

    fn finish_typing(&mut self) {
        if let Some(mut tw) = self.typewriter.take() {
            let now = self.clock.now_ms();
            for line in tw.finish() {
                self.transcript.push_unchecked(EntryKind::System, &line, now);
            }
        }
    }

    fn apply_builtin(&mut self, output: CommandOutput) {
        let now = self.clock.now_ms();
        match output {
            CommandOutput::Text(text) => {
                self.transcript.push(EntryKind::Response, &text, now);
            },
            CommandOutput::Clear => {
                self.transcript.reset_to(EntryKind::System, CLEARED_TEXT, now);
                self.active = None;
                self.idle_timer.cancel();
            },
            CommandOutput::Exit(farewell) => {
                self.transcript.push(EntryKind::Response, &farewell, now);
                self.exit_timer.start(now, self.config.exit_delay_ms);
            },
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        let now = self.clock.now_ms();
        self.active = Some(intent.kind);
        self.transcript
            .push(EntryKind::Response, &intent.response_text(), now);
        self.idle_timer.start(now, self.config.idle_timeout_ms);

        match intent.to_json() {
            Ok(json) => log::debug!("Dispatching intent {json}"),
            Err(e) => log::warn!("Could not serialize intent: {e}"),
        }
        for listener in &mut self.listeners {
            listener.on_intent(&intent);
        }
        self.last_intent = Some(intent);
    }
}
