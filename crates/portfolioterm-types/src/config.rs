//! Terminal configuration.
//!
//! Loaded from an optional TOML file. Every key has a default, so an empty
//! file (or no file at all) yields the stock terminal.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PortfolioError, Result};

/// Timing, history, and identity settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalConfig {
    /// Idle period after which the active panel is hidden.
    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,
    /// Window in which a repeated identical submission is dropped.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Maximum number of remembered commands.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Delay between `exit` and the session reload.
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
    /// Per-character delay of the welcome typing animation.
    #[serde(default = "default_typing_char_ms")]
    pub typing_char_ms: u64,
    /// Type the welcome banner out instead of printing it at once.
    #[serde(default = "default_welcome_animation")]
    pub welcome_animation: bool,
    /// Portfolio owner, shown by the banner and `whoami`.
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    /// Owner's title line.
    #[serde(default = "default_owner_title")]
    pub owner_title: String,
}

fn default_idle_timeout_ms() -> u64 {
    300_000
}

fn default_debounce_ms() -> u64 {
    1_000
}

fn default_history_limit() -> usize {
    50
}

fn default_exit_delay_ms() -> u64 {
    1_000
}

fn default_typing_char_ms() -> u64 {
    30
}

fn default_welcome_animation() -> bool {
    true
}

fn default_owner_name() -> String {
    "Bharath Vadlamannati".to_string()
}

fn default_owner_title() -> String {
    "Software Development Engineering Leader".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: default_idle_timeout_ms(),
            debounce_ms: default_debounce_ms(),
            history_limit: default_history_limit(),
            exit_delay_ms: default_exit_delay_ms(),
            typing_char_ms: default_typing_char_ms(),
            welcome_animation: default_welcome_animation(),
            owner_name: default_owner_name(),
            owner_title: default_owner_title(),
        }
    }
}

impl TerminalConfig {
    /// The `whoami` line.
    pub fn owner_line(&self) -> String {
        format!("{} - {}", self.owner_name, self.owner_title)
    }
}

/// Parse a terminal config from TOML text.
pub fn parse_config(toml_str: &str) -> Result<TerminalConfig> {
    let config: TerminalConfig = toml::from_str(toml_str)
        .map_err(|e| PortfolioError::Config(format!("terminal config: {e}")))?;
    if config.history_limit == 0 {
        return Err(PortfolioError::Config(
            "terminal config: history_limit must be at least 1".to_string(),
        ));
    }
    Ok(config)
}

/// Load a terminal config from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<TerminalConfig> {
    let Some(path) = path else {
        log::debug!("No terminal config given, using defaults");
        return Ok(TerminalConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    log::info!("Loaded terminal config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_match_stock_terminal() {
        let c = TerminalConfig::default();
        assert_eq!(c.idle_timeout_ms, 300_000);
        assert_eq!(c.debounce_ms, 1_000);
        assert_eq!(c.history_limit, 50);
        assert_eq!(c.exit_delay_ms, 1_000);
        assert_eq!(c.typing_char_ms, 30);
        assert!(c.welcome_animation);
    }

    #[test]
    fn parse_empty_is_default() {
        let c = parse_config("").unwrap();
        assert_eq!(c, TerminalConfig::default());
    }

    #[test]
    fn parse_partial_keeps_other_defaults() {
        let c = parse_config(
            r#"
idle_timeout_ms = 60000
owner_name = "Ada Lovelace"
"#,
        )
        .unwrap();
        assert_eq!(c.idle_timeout_ms, 60_000);
        assert_eq!(c.owner_name, "Ada Lovelace");
        assert_eq!(c.history_limit, 50);
        assert_eq!(c.owner_title, "Software Development Engineering Leader");
    }

    #[test]
    fn owner_line_joins_name_and_title() {
        let c = TerminalConfig::default();
        assert_eq!(
            c.owner_line(),
            "Bharath Vadlamannati - Software Development Engineering Leader"
        );
    }

    #[test]
    fn parse_rejects_zero_history() {
        let err = parse_config("history_limit = 0").unwrap_err();
        assert!(format!("{err}").contains("history_limit"));
    }

    #[test]
    fn parse_rejects_wrong_type() {
        let err = parse_config("debounce_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn load_without_path_is_default() {
        assert_eq!(load_config(None).unwrap(), TerminalConfig::default());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/portfolioterm.toml"))).unwrap_err();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    proptest! {
        #[test]
        fn timeouts_survive_parsing(idle in 0u64..=u32::MAX as u64, debounce in 0u64..=u32::MAX as u64) {
            let text = format!("idle_timeout_ms = {idle}\ndebounce_ms = {debounce}\n");
            let c = parse_config(&text).unwrap();
            prop_assert_eq!(c.idle_timeout_ms, idle);
            prop_assert_eq!(c.debounce_ms, debounce);
        }
    }
}
