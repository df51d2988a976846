use core::fmt;

use log::{Level, LevelFilter, Log, Record};

const TARGET: &str = "pms5003";

/// Log sink plus the verbosity chosen for one driver instance.
pub struct Diagnostics {
    logger: &'static dyn Log,
    level: LevelFilter,
}

impl Diagnostics {
    /// Forwards to whatever logger the process installed through `log`.
    pub fn new(level: LevelFilter) -> Self {
        Self::with_logger(log::logger(), level)
    }

    pub fn with_logger(logger: &'static dyn Log, level: LevelFilter) -> Self {
        Self { logger, level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
    }

    pub(crate) fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if level <= self.level {
            self.logger.log(
                &Record::builder()
                    .args(args)
                    .level(level)
                    .target(TARGET)
                    .module_path_static(Some(module_path!()))
                    .build(),
            );
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("level", &self.level)
            .finish()
    }
}

macro_rules! diag {
    ($diagnostics:expr, $level:expr, $($arg:tt)+) => {
        $diagnostics.emit($level, format_args!($($arg)+))
    };
}
