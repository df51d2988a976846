use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyUSB0";
pub const DEFAULT_BAUD_RATE: u32 = 9600;
pub const DEFAULT_SERIAL_TIMEOUT: Duration = Duration::from_secs(2);
/// How long a read keeps scanning for the sync marker.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Settings fixed for the lifetime of a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorConfig {
    pub baud_rate: u32,
    /// Per-byte timeout applied by the serial port itself.
    pub serial_timeout: Duration,
    pub read_timeout: Duration,
    /// Initial verbosity; `Pms5003::set_log_level` changes it later.
    pub log_level: LevelFilter,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            serial_timeout: DEFAULT_SERIAL_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SensorConfig {
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_serial_timeout(mut self, timeout: Duration) -> Self {
        self.serial_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}
