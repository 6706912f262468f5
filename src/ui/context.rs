use is_terminal::IsTerminal;

use crate::cli::ColorWhen;
use treelens::config::{ColorMode, Config};

/// Environment variables set by common CI runners
const CI_MARKERS: [&str; 6] = ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "CIRCLECI", "JENKINS_HOME"];

/// What stdout's terminal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    pub ci: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    fn from_env(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let color = is_tty && !dumb && get_env("NO_COLOR").is_none();

        // First locale variable that is set decides; unset means UTF-8
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .find_map(|key| get_env(key).filter(|value| !value.is_empty()));
        let utf8 = locale.map_or(true, |value| {
            let value = value.to_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        });

        Self {
            is_tty,
            color,
            unicode: utf8 && !dumb,
            ci: CI_MARKERS.iter().any(|key| get_env(key).is_some()),
        }
    }
}

/// Whether stdin is interactive (prompts are allowed)
pub fn stdin_is_tty() -> bool {
    std::io::stdin().is_terminal()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub terminal: Terminal,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::for_terminal(json, verbose, cli_color, config, Terminal::detect())
    }

    pub(crate) fn for_terminal(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        terminal: Terminal,
    ) -> Self {
        let unicode = config.output.unicode && terminal.unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => terminal.color && !terminal.ci && !json,
            },
        };

        Self {
            json,
            verbose,
            terminal,
            color,
            unicode,
        }
    }
}
