//! log4rs initialisation.

use crate::error::{Result, SupernetError};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Console-only config writing to stderr so stdout carries just the results.
pub fn default_log_config(level: LevelFilter) -> Result<LogConfig> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| SupernetError::Logging(e.to_string()))
}

/// Initialise logging from `path` when it exists, else from [`default_log_config`].
pub fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| SupernetError::Logging(e.to_string()))?;
        log::info!("Logging configured from {}", path.display());
    } else {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        log4rs::init_config(default_log_config(level)?)
            .map_err(|e| SupernetError::Logging(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_config_builds() {
        let config = default_log_config(LevelFilter::Warn).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.appenders().len(), 1);
    }
}
