//! Logger setup for the binary.
//!
//! The interactive view owns the terminal, so it logs to a file under the
//! state directory. Every other command logs to stderr.

use std::fs::File;
use std::path::PathBuf;

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use treelens::config::Verbosity;

pub const LOG_FILE: &str = "treelens.log";

/// `-v` count wins over the configured verbosity
pub fn level_for(verbose: u8, configured: Verbosity) -> LevelFilter {
    match verbose {
        0 => match configured {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
        },
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Where the interactive view writes its log
pub fn log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("treelens")
        .join(LOG_FILE)
}

pub fn init(level: LevelFilter, interactive: bool) {
    let config = ConfigBuilder::new()
        .add_filter_allow_str("treelens")
        .build();

    if interactive {
        let path = log_path();
        let file = path
            .parent()
            .map(std::fs::create_dir_all)
            .transpose()
            .and_then(|_| File::create(&path));
        if let Ok(file) = file {
            let _ = WriteLogger::init(level, config, file);
        }
        return;
    }

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_overrides_config() {
        assert_eq!(level_for(0, Verbosity::Normal), LevelFilter::Warn);
        assert_eq!(level_for(0, Verbosity::Debug), LevelFilter::Debug);
        assert_eq!(level_for(1, Verbosity::Quiet), LevelFilter::Info);
        assert_eq!(level_for(2, Verbosity::Normal), LevelFilter::Debug);
        assert_eq!(level_for(5, Verbosity::Normal), LevelFilter::Trace);
    }

    #[test]
    fn log_file_lives_under_treelens_dir() {
        let path = log_path();
        assert!(path.ends_with("treelens/treelens.log"));
    }
}
