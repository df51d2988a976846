//! Driver for Plantower PMS5003 (and compatible PMS x003) particulate matter
//! sensors over a serial link.
//!
//! The sensor either streams 32-byte data frames continuously (active mode)
//! or answers explicit requests (passive mode). [`Pms5003::read`] locks onto
//! the `0x42 0x4D` sync marker, checks the additive checksum and decodes the
//! frame into a [`Reading`].

use embedded_hal::serial::{Read, Write};
use log::{Level, LevelFilter, Log};

#[macro_use]
mod diag;

pub mod clock;
pub mod command;
pub mod config;
mod error;
pub mod frame;
mod mode;
mod read_fsm;
mod reading;
pub mod transport;

pub use clock::{Clock, StdClock};
pub use config::SensorConfig;
pub use diag::Diagnostics;
pub use error::Error;
pub use frame::ChecksumMismatch;
pub use mode::{PowerState, SamplingMode, MODE_SETTLE_MS, PASSIVE_READ_SETTLE_MS, POWER_SETTLE_MS};
pub use reading::Reading;
pub use transport::{ResetInput, Wrapper};

pub struct Pms5003<Serial, C = StdClock> {
    serial: Serial,
    clock: C,
    config: SensorConfig,
    diagnostics: Diagnostics,
}

impl<Serial> Pms5003<Serial, StdClock> {
    ///
    /// Creates a new sensor instance using a single object implementing embedded hal serial traits
    ///
    pub fn new(serial: Serial, config: SensorConfig) -> Self {
        Self::with_clock(serial, StdClock, config)
    }
}

impl<Serial, C> Pms5003<Serial, C> {
    pub fn with_clock(serial: Serial, clock: C, config: SensorConfig) -> Self {
        let diagnostics = Diagnostics::new(config.log_level);
        diag!(
            diagnostics,
            Level::Info,
            "baud rate {}, serial timeout {:?}, read timeout {:?}",
            config.baud_rate,
            config.serial_timeout,
            config.read_timeout
        );

        Self {
            serial,
            clock,
            config,
            diagnostics,
        }
    }

    /// Sends diagnostics to `logger` instead of the process-wide logger.
    pub fn with_logger(mut self, logger: &'static dyn Log) -> Self {
        self.diagnostics = Diagnostics::with_logger(logger, self.diagnostics.level());
        self
    }

    pub fn set_log_level(&mut self, level: LevelFilter) {
        self.diagnostics.set_level(level);
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Gives the serial transport back.
    pub fn release(self) -> Serial {
        self.serial
    }
}

impl<Serial, C, E> Pms5003<Serial, C>
where
    Serial: ResetInput + Read<u8, Error = E>,
    C: Clock,
{
    ///
    /// Reads the next frame the sensor sends, giving up after the configured read timeout.
    /// With `flush` set, stale input is dropped first so the reading is fresh.
    ///
    pub fn read(&mut self, flush: bool) -> Result<Reading, Error<E>> {
        read_fsm::read(
            &mut self.serial,
            &self.clock,
            &self.diagnostics,
            &self.config,
            flush,
        )
    }
}

impl<TX, RX, E> Pms5003<Wrapper<TX, RX>, StdClock>
where
    TX: Write<u8, Error = E>,
    RX: Read<u8, Error = E>,
{
    ///
    /// Creates a new sensor instance using separate Read and Write embedded hal trait objects
    ///
    pub fn new_tx_rx(tx: TX, rx: RX, config: SensorConfig) -> Self {
        Self::new(Wrapper(tx, rx), config)
    }
}

#[cfg(feature = "linux")]
impl Pms5003<linux_embedded_hal::Serial, StdClock> {
    ///
    /// Opens `port` (e.g. [`config::DEFAULT_SERIAL_PORT`]) with the configured baud rate and timeout
    ///
    pub fn open(port: &str, config: SensorConfig) -> Result<Self, Error<std::io::ErrorKind>> {
        match transport::open(port, &config) {
            Ok(serial) => {
                let sensor = Self::new(serial, config);
                diag!(sensor.diagnostics, Level::Debug, "opened {}", port);
                Ok(sensor)
            }
            Err(e) => {
                diag!(Diagnostics::new(config.log_level), Level::Error, "{}", e);
                Err(e)
            }
        }
    }
}
