//! Logger setup for the binary.
//!
//! Uses the log4rs file named by [`LOG_CONFIG_ENV`] when set, otherwise a
//! stderr console appender at the level named by [`LOG_LEVEL_ENV`]. The
//! built-in setup never writes to stdout, which carries only result lines.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Environment variable holding the log level (`off`..`trace`).
pub const LOG_LEVEL_ENV: &str = "CIDR_OPTIMIZER_LOG";

/// Environment variable naming an optional log4rs config file.
pub const LOG_CONFIG_ENV: &str = "CIDR_OPTIMIZER_LOG_CONFIG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a level name, falling back to `warn` for missing or unknown values.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {M} - {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger. Call once, after `.env` has been loaded.
///
/// A failure here leaves logging disabled; callers should report it and
/// carry on.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if let Some(path) = std::env::var_os(LOG_CONFIG_ENV).filter(|p| !p.is_empty()) {
        log4rs::init_file(&path, Default::default())
            .map_err(|e| format!("log config {}: {e}", path.to_string_lossy()))?;
        log::debug!("logging configured from {}", path.to_string_lossy());
        return Ok(());
    }

    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    log4rs::init_config(stderr_config(level)?)?;
    log::debug!("logging to stderr at level {level}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(parse_level(Some(" off ")), LevelFilter::Off);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn test_stderr_config_builds() {
        let config = stderr_config(LevelFilter::Info).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }
}
