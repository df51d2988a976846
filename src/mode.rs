use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::{Read, Write};
use log::Level;
use nb::block;

use crate::clock::Clock;
use crate::command::{self, Command};
use crate::error::Error;
use crate::reading::Reading;
use crate::transport::ResetInput;
use crate::{read_fsm, Pms5003};

/// Wait after a mode change; reading earlier yields zeroed frames.
pub const MODE_SETTLE_MS: u32 = 200;
/// Wait after answering a passive read request.
pub const PASSIVE_READ_SETTLE_MS: u32 = 500;
/// Wait after sleep or wake; the sensor ignores input for about two seconds.
pub const POWER_SETTLE_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Sensor streams frames continuously
    Active,
    /// Sensor reports only on request
    Passive,
}

impl SamplingMode {
    pub fn command(self) -> &'static Command {
        match self {
            SamplingMode::Active => command::active_mode(),
            SamplingMode::Passive => command::passive_mode(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Awake,
    /// Fan and laser off
    Asleep,
}

impl PowerState {
    pub fn command(self) -> &'static Command {
        match self {
            PowerState::Awake => command::wake(),
            PowerState::Asleep => command::sleep(),
        }
    }
}

/// Mode and power transitions. None of them is tracked by the driver: each
/// call is a single command write followed by its settle delay.
impl<Serial, C, E> Pms5003<Serial, C>
where
    Serial: ResetInput + Read<u8, Error = E> + Write<u8, Error = E>,
    C: Clock,
{
    pub fn set_mode(&mut self, mode: SamplingMode) -> Result<(), Error<E>> {
        diag!(self.diagnostics, Level::Info, "switching to {:?} mode", mode);
        self.send_cmd(mode.command())?;
        self.clock.delay_ms(MODE_SETTLE_MS);
        Ok(())
    }

    ///
    /// Requests one frame from a sensor in passive mode and waits for the reply.
    /// Input is flushed, if at all, before the request so the reply is kept.
    ///
    pub fn read_in_passive(&mut self, flush: bool) -> Result<Reading, Error<E>> {
        if flush {
            self.serial.reset_input_buffer().map_err(Error::Transport)?;
            diag!(self.diagnostics, Level::Debug, "input buffer reset");
        }
        self.send_cmd(command::passive_read())?;

        let reading = read_fsm::read(
            &mut self.serial,
            &self.clock,
            &self.diagnostics,
            &self.config,
            false,
        )?;

        self.clock.delay_ms(PASSIVE_READ_SETTLE_MS);
        Ok(reading)
    }

    pub fn set_power(&mut self, state: PowerState) -> Result<(), Error<E>> {
        diag!(self.diagnostics, Level::Info, "setting power state to {:?}", state);
        self.send_cmd(state.command())?;
        self.clock.delay_ms(POWER_SETTLE_MS);
        Ok(())
    }

    pub fn sleep(&mut self) -> Result<(), Error<E>> {
        self.set_power(PowerState::Asleep)
    }

    pub fn wake(&mut self) -> Result<(), Error<E>> {
        self.set_power(PowerState::Awake)
    }

    fn send_cmd(&mut self, cmd: &Command) -> Result<(), Error<E>> {
        diag!(self.diagnostics, Level::Trace, "sending {:02X?}", cmd);
        for byte in cmd {
            block!(self.serial.write(*byte)).map_err(Error::Transport)?;
        }
        block!(self.serial.flush()).map_err(Error::Transport)
    }
}
