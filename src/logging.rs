// Some feature combinations result in some of these macros never being used.
// Which is fine. Just squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(log::error!($($tt)*)) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}

/// A simple logger that writes everything to stderr.
///
/// Tests call `Logger::init()` first so that, when the `logging` feature
/// is enabled, the trace output of a failing test shows up next to it.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct Logger(());

#[cfg(test)]
const LOGGER: &'static Logger = &Logger(());

#[cfg(test)]
impl Logger {
    /// Installs this logger as the global logger.
    ///
    /// This is a no-op unless the `logging` feature is enabled. Calling this
    /// more than once returns an error, which tests generally ignore.
    pub(crate) fn init() -> Result<(), log::SetLoggerError> {
        #[cfg(feature = "logging")]
        {
            log::set_logger(LOGGER)?;
            log::set_max_level(log::LevelFilter::Trace);
        }
        Ok(())
    }
}

#[cfg(test)]
impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                std::eprintln!(
                    "{}|{}|{}:{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    line,
                    record.args()
                );
            }
            (Some(file), None) => {
                std::eprintln!(
                    "{}|{}|{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    record.args()
                );
            }
            _ => {
                std::eprintln!(
                    "{}|{}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}
