//! Built-in session commands and their registry.
//!
//! Built-ins control the terminal itself (help, clear, whoami, ls, exit).
//! They are matched on the whole trimmed input, case-insensitively, before
//! the content interpreter sees it.

use std::collections::HashMap;

use portfolioterm_types::config::TerminalConfig;

/// Words offered by tab completion, in display order.
pub const COMPLETION_WORDS: &[&str] = &[
    "help", "clear", "cls", "whoami", "ls", "list", "dir", "about", "projects", "skills",
    "contact", "exit", "quit",
];

/// Output produced by a built-in command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text for a response entry.
    Text(String),
    /// Signal to wipe the transcript and hide the active panel.
    Clear,
    /// Signal to close the terminal after showing the given farewell.
    Exit(String),
}

/// Read-only context passed to every built-in.
pub struct Environment<'a> {
    pub config: &'a TerminalConfig,
    /// The registry running the command (for `help`).
    pub registry: &'a CommandRegistry,
}

/// A single built-in command.
pub trait Command {
    /// The primary name (what the user types).
    fn name(&self) -> &str;

    /// Alternative spellings that run the same command.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description, shown by `help`.
    fn description(&self) -> &str;

    /// Execute the command.
    fn execute(&self, env: &Environment<'_>) -> CommandOutput;
}

/// Registry of built-in commands with dispatch.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    // Lowercase name or alias -> index into `commands`.
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_ascii_lowercase();
        let slot = match self.index.get(&name) {
            Some(&i) => {
                self.index.retain(|_, v| *v != i);
                self.commands[i] = cmd;
                i
            },
            None => {
                self.commands.push(cmd);
                self.commands.len() - 1
            },
        };
        let cmd = &self.commands[slot];
        self.index.insert(name, slot);
        for alias in cmd.aliases() {
            self.index.insert(alias.to_ascii_lowercase(), slot);
        }
    }

    /// Look up the command whose name or alias equals the whole input.
    pub fn resolve(&self, input: &str) -> Option<&dyn Command> {
        let key = input.trim().to_ascii_lowercase();
        self.index.get(&key).map(|&i| self.commands[i].as_ref())
    }

    /// Run the built-in matching `input`, or `None` if it is not one.
    pub fn execute(&self, input: &str, env: &Environment<'_>) -> Option<CommandOutput> {
        let cmd = self.resolve(input)?;
        log::debug!("Running built-in `{}`", cmd.name());
        Some(cmd.execute(env))
    }

    /// `(names, description)` pairs in registration order, where `names` is
    /// the primary name followed by its aliases.
    pub fn list_commands(&self) -> Vec<(String, &str)> {
        self.commands
            .iter()
            .map(|c| {
                let names: Vec<&str> = std::iter::once(c.name())
                    .chain(c.aliases().iter().copied())
                    .collect();
                (names.join(", "), c.description())
            })
            .collect()
    }

    /// Completion candidates for a partial input line.
    pub fn completions(&self, partial: &str) -> Vec<&'static str> {
        let lower = partial.trim().to_lowercase();
        COMPLETION_WORDS
            .iter()
            .copied()
            .filter(|word| word.starts_with(&lower))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the built-in session commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(ExitCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

/// Content commands handled by the interpreter rather than the registry.
const CONTENT_COMMANDS: &[(&str, &str)] = &[
    ("about", "Show about me and background information"),
    ("projects", "Display all portfolio projects"),
    ("skills", "Show technical skills and expertise"),
    ("contact", "Display contact information and links"),
];

const HELP_EXAMPLES: &str = "
Examples:
  $ about      → Show about information
  $ projects   → List all projects
  $ skills     → Display technical skills
  $ contact    → Show contact details";

fn help_text(registry: &CommandRegistry) -> String {
    let mut text = String::from("Available Commands:\n");
    let builtins = registry.list_commands();
    let content = CONTENT_COMMANDS
        .iter()
        .map(|&(name, description)| (name.to_string(), description));
    for (names, description) in builtins.into_iter().chain(content) {
        text.push_str(&format!("\n  {names}\n    {description}\n"));
    }
    text.push_str(HELP_EXAMPLES);
    text
}

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn aliases(&self) -> &[&str] {
        &["--help", "-h"]
    }
    fn description(&self) -> &str {
        "Show this help message"
    }
    fn execute(&self, env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Text(help_text(env.registry))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn aliases(&self) -> &[&str] {
        &["cls"]
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn execute(&self, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Clear
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Show portfolio owner information"
    }
    fn execute(&self, env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Text(env.config.owner_line())
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

const SECTIONS_TEXT: &str = "Available sections:

  about     - About me and background
  projects  - Portfolio projects
  skills    - Technical skills
  contact   - Contact information";

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn aliases(&self) -> &[&str] {
        &["list", "dir"]
    }
    fn description(&self) -> &str {
        "List all available portfolio sections"
    }
    fn execute(&self, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Text(SECTIONS_TEXT.to_string())
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn aliases(&self) -> &[&str] {
        &["quit"]
    }
    fn description(&self) -> &str {
        "Close terminal and reload page"
    }
    fn execute(&self, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Exit("Closing terminal...".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CommandRegistry, TerminalConfig) {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        (reg, TerminalConfig::default())
    }

    fn exec(reg: &CommandRegistry, config: &TerminalConfig, input: &str) -> Option<CommandOutput> {
        let env = Environment {
            config,
            registry: reg,
        };
        reg.execute(input, &env)
    }

    #[test]
    fn list_commands_in_registration_order() {
        let (reg, _) = setup();
        let names: Vec<String> = reg.list_commands().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["help, --help, -h", "clear, cls", "whoami", "ls, list, dir", "exit, quit"]
        );
        assert_eq!(reg.list_commands()[1].1, "Clear the terminal screen");
    }

    #[test]
    fn help_lists_registry_descriptions() {
        let (reg, config) = setup();
        let Some(CommandOutput::Text(text)) = exec(&reg, &config, "help") else {
            panic!("expected help text");
        };
        for (names, description) in reg.list_commands() {
            assert!(text.contains(&format!("  {names}\n    {description}\n")), "{names}");
        }
        assert!(text.contains("  contact\n    Display contact information and links\n"));
        assert!(text.ends_with("$ contact    → Show contact details"));
    }

    #[test]
    fn help_follows_registered_commands() {
        struct PingCmd;
        impl Command for PingCmd {
            fn name(&self) -> &str {
                "ping"
            }
            fn description(&self) -> &str {
                "Answer with pong"
            }
            fn execute(&self, _env: &Environment<'_>) -> CommandOutput {
                CommandOutput::Text("pong".to_string())
            }
        }
        let (mut reg, config) = setup();
        reg.register(Box::new(PingCmd));
        match exec(&reg, &config, "help") {
            Some(CommandOutput::Text(text)) => assert!(text.contains("  ping\n    Answer with pong")),
            other => panic!("expected help text, got {other:?}"),
        }
    }

    #[test]
    fn help_and_aliases() {
        let (reg, config) = setup();
        for input in ["help", "--help", "-h", "HELP"] {
            match exec(&reg, &config, input) {
                Some(CommandOutput::Text(text)) => {
                    assert!(text.starts_with("Available Commands:"));
                    assert!(text.contains("exit, quit"));
                },
                other => panic!("{input}: expected help text, got {other:?}"),
            }
        }
    }

    #[test]
    fn clear_and_cls() {
        let (reg, config) = setup();
        assert_eq!(exec(&reg, &config, "clear"), Some(CommandOutput::Clear));
        assert_eq!(exec(&reg, &config, "CLS"), Some(CommandOutput::Clear));
    }

    #[test]
    fn whoami_uses_config() {
        let (reg, mut config) = setup();
        config.owner_name = "Grace Hopper".to_string();
        config.owner_title = "Rear Admiral".to_string();
        assert_eq!(
            exec(&reg, &config, "whoami"),
            Some(CommandOutput::Text("Grace Hopper - Rear Admiral".to_string()))
        );
    }

    #[test]
    fn ls_aliases_list_sections() {
        let (reg, config) = setup();
        for input in ["ls", "list", "dir"] {
            match exec(&reg, &config, input) {
                Some(CommandOutput::Text(text)) => {
                    assert!(text.starts_with("Available sections:"));
                    for section in ["about", "projects", "skills", "contact"] {
                        assert!(text.contains(section));
                    }
                },
                other => panic!("{input}: expected sections, got {other:?}"),
            }
        }
    }

    #[test]
    fn exit_and_quit() {
        let (reg, config) = setup();
        let expected = Some(CommandOutput::Exit("Closing terminal...".to_string()));
        assert_eq!(exec(&reg, &config, "exit"), expected);
        assert_eq!(exec(&reg, &config, "quit"), expected);
    }

    #[test]
    fn whole_input_must_match() {
        let (reg, config) = setup();
        assert!(exec(&reg, &config, "help me").is_none());
        assert!(exec(&reg, &config, "ls projects").is_none());
        assert!(exec(&reg, &config, "about").is_none());
        assert!(exec(&reg, &config, "").is_none());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let (reg, config) = setup();
        assert_eq!(exec(&reg, &config, "  clear \t"), Some(CommandOutput::Clear));
    }

    #[test]
    fn register_replaces_same_name() {
        struct LoudExit;
        impl Command for LoudExit {
            fn name(&self) -> &str {
                "exit"
            }
            fn description(&self) -> &str {
                "Leave loudly"
            }
            fn execute(&self, _env: &Environment<'_>) -> CommandOutput {
                CommandOutput::Exit("BYE".to_string())
            }
        }
        let (mut reg, config) = setup();
        reg.register(Box::new(LoudExit));
        assert_eq!(reg.list_commands().len(), 5);
        assert_eq!(
            exec(&reg, &config, "exit"),
            Some(CommandOutput::Exit("BYE".to_string()))
        );
        // The replaced command's alias is gone with it.
        assert!(reg.resolve("quit").is_none());
    }

    #[test]
    fn completions_prefix() {
        let (reg, _) = setup();
        assert_eq!(reg.completions("wh"), vec!["whoami"]);
        assert_eq!(reg.completions("c"), vec!["clear", "cls", "contact"]);
        assert_eq!(reg.completions("  PRO "), vec!["projects"]);
    }

    #[test]
    fn completions_empty_offers_everything() {
        let (reg, _) = setup();
        assert_eq!(reg.completions(""), COMPLETION_WORDS.to_vec());
    }

    #[test]
    fn completions_no_match() {
        let (reg, _) = setup();
        assert!(reg.completions("xyz").is_empty());
    }
}
