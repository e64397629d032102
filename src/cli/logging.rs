//! Module implementing logging for the application.
//!
//! Log records from the library (which uses the `log` facade)
//! are forwarded to a global `slog` logger writing to standard error.

use std::env;
use std::sync::Mutex;

use log::SetLoggerError;
use slog::{o, Drain, FilterLevel, Level, Logger};
use slog_envlogger::LogBuilder;
use slog_scope::GlobalLoggerGuard;


/// Environment variable with `env_logger`-style filters
/// that take precedence over the verbosity flags.
const FILTER_ENV_VAR: &str = "RUST_LOG";


/// Initialize logging with given verbosity.
/// The verbosity value has the same meaning as in args::Options::verbosity.
///
/// The returned guard must be kept alive for as long as logging is needed.
pub fn init(verbosity: isize) -> Result<GlobalLoggerGuard, SetLoggerError> {
    let level = level_for(verbosity);

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();

    let mut builder = LogBuilder::new(drain).filter(None, filter_level(level));
    if let Ok(filters) = env::var(FILTER_ENV_VAR) {
        builder = builder.parse(&filters);
    }
    let drain = Mutex::new(builder.build()).fuse();

    let logger = Logger::root(drain, o!());
    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init_with_level(log_level(level))?;
    Ok(guard)
}


/// Logging level corresponding to the verbosity of command line flags.
fn level_for(verbosity: isize) -> Level {
    match verbosity {
        v if v <= -2 => Level::Critical,
        -1 => Level::Error,
        0 => Level::Warning,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

fn filter_level(level: Level) -> FilterLevel {
    match level {
        Level::Critical => FilterLevel::Critical,
        Level::Error => FilterLevel::Error,
        Level::Warning => FilterLevel::Warning,
        Level::Info => FilterLevel::Info,
        Level::Debug => FilterLevel::Debug,
        Level::Trace => FilterLevel::Trace,
    }
}

/// Level of the `log` crate that lets through every record of given slog level.
fn log_level(level: Level) -> log::Level {
    match level {
        // `log` has no critical level, its errors map to it instead.
        Level::Critical | Level::Error => log::Level::Error,
        Level::Warning => log::Level::Warn,
        Level::Info => log::Level::Info,
        Level::Debug => log::Level::Debug,
        Level::Trace => log::Level::Trace,
    }
}


#[cfg(test)]
mod tests {
    use slog::Level;
    use super::level_for;

    #[test]
    fn verbosity_levels() {
        assert_eq!(Level::Critical, level_for(-5));
        assert_eq!(Level::Critical, level_for(-2));
        assert_eq!(Level::Error, level_for(-1));
        assert_eq!(Level::Warning, level_for(0));
        assert_eq!(Level::Info, level_for(1));
        assert_eq!(Level::Debug, level_for(2));
        assert_eq!(Level::Trace, level_for(3));
        assert_eq!(Level::Trace, level_for(10));
    }
}
