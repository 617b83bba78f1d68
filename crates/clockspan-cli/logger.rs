/*!
A simple stderr logger.

The level is read from the `CLOCKSPAN_LOG` environment variable and
defaults to `warn`. Setting it to `trace` shows how the library computed a
period or why it parsed a segment as zero.
*/

use log::{LevelFilter, Log};

const ENV_VAR: &str = "CLOCKSPAN_LOG";

#[derive(Debug)]
pub struct Logger(());

const LOGGER: &'static Logger = &Logger(());

impl Logger {
    /// Create a new logger that logs to stderr and initialize it as the
    /// global logger. If there was a problem setting the logger, then an
    /// error is returned.
    pub fn init() -> Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)?;
        log::set_max_level(level_from_env());
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        // We set the log level via log::set_max_level, so we don't need to
        // implement filtering here.
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                eprintln!(
                    "{}|{}|{}:{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    line,
                    record.args()
                );
            }
            (Some(file), None) => {
                eprintln!(
                    "{}|{}|{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    record.args()
                );
            }
            _ => {
                eprintln!(
                    "{}|{}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        // We use eprintln! which is flushed on every call.
    }
}

fn level_from_env() -> LevelFilter {
    let Ok(value) = std::env::var(ENV_VAR) else { return LevelFilter::Warn };
    match value.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!(
                "WARN|clockspan: unrecognized {ENV_VAR}={value:?}, \
                 using 'warn'",
            );
            LevelFilter::Warn
        }
    }
}
