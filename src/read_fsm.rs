use std::time::{Duration, Instant};

use embedded_hal::serial::Read;
use log::Level;

use crate::clock::Clock;
use crate::config::SensorConfig;
use crate::diag::Diagnostics;
use crate::error::Error;
use crate::frame::{self, Frame, OUTPUT_FRAME_SIZE, SYNC};
use crate::reading::Reading;
use crate::transport::ResetInput;

#[derive(PartialEq, Debug)]
enum ReadStatus {
    InProgress,
    Finished,
}

#[derive(PartialEq, Debug)]
enum State {
    WaitingForFirstSyncByte,
    WaitingForSecondSyncByte,
    Reading,
    Finished,
}

///
/// Assembles one frame from a byte stream. A byte that breaks the sync
/// marker is re-tested as a first sync byte, so `42 42 4D` still locks on.
///
struct ReadStateMachine {
    buffer: Frame,
    index: usize,
    state: State,
}

impl ReadStateMachine {
    fn new() -> Self {
        Self {
            buffer: [0u8; OUTPUT_FRAME_SIZE],
            index: 0,
            state: State::WaitingForFirstSyncByte,
        }
    }

    fn sync_read(&mut self) {
        self.buffer[..2].copy_from_slice(&SYNC);
        self.index = 2;
        self.state = State::Reading;
    }

    fn byte_read(&mut self, byte: u8) {
        self.buffer[self.index] = byte;
        self.index += 1;
        if self.index == self.buffer.len() {
            self.state = State::Finished;
        }
    }

    fn update(&mut self, byte: u8) -> ReadStatus {
        match self.state {
            State::WaitingForFirstSyncByte => {
                if byte == SYNC[0] {
                    self.state = State::WaitingForSecondSyncByte;
                }
            }
            State::WaitingForSecondSyncByte => match byte {
                b if b == SYNC[1] => self.sync_read(),
                b if b == SYNC[0] => {}
                _ => self.state = State::WaitingForFirstSyncByte,
            },
            State::Reading => self.byte_read(byte),
            State::Finished => {}
        };

        match self.state {
            State::Finished => ReadStatus::Finished,
            _ => ReadStatus::InProgress,
        }
    }

    fn is_scanning(&self) -> bool {
        matches!(
            self.state,
            State::WaitingForFirstSyncByte | State::WaitingForSecondSyncByte
        )
    }
}

///
/// Scans the stream for a frame until the read timeout elapses, then validates and decodes it.
/// With `flush` set, input already waiting is dropped once before scanning starts.
/// Once the sync marker is found the rest of the frame is read regardless of the
/// read timeout, giving up only when no byte arrives for `serial_timeout`.
///
pub(crate) fn read<RX, C>(
    serial: &mut RX,
    clock: &C,
    diagnostics: &Diagnostics,
    config: &SensorConfig,
    flush: bool,
) -> Result<Reading, Error<RX::Error>>
where
    RX: ResetInput,
    C: Clock,
{
    let deadline = clock.now() + config.read_timeout;
    if flush {
        serial.reset_input_buffer().map_err(Error::Transport)?;
        diag!(diagnostics, Level::Debug, "input buffer reset");
    }

    let frame = capture(serial, clock, diagnostics, deadline, config.serial_timeout)?;
    diag!(diagnostics, Level::Trace, "frame: {:02X?}", frame);

    if let Err(mismatch) = frame::verify(&frame) {
        diag!(
            diagnostics,
            Level::Error,
            "checksum failure {} != {}",
            mismatch.expected,
            mismatch.actual
        );
        return Err(mismatch.into());
    }

    Ok(Reading::decode(&frame, clock.utc_now()))
}

fn capture<RX, C>(
    serial: &mut RX,
    clock: &C,
    diagnostics: &Diagnostics,
    deadline: Instant,
    byte_timeout: Duration,
) -> Result<Frame, Error<RX::Error>>
where
    RX: Read<u8>,
    C: Clock,
{
    let mut fsm = ReadStateMachine::new();

    while fsm.is_scanning() {
        if clock.now() >= deadline {
            diag!(diagnostics, Level::Warn, "no sync marker before read deadline");
            return Err(Error::NoMessageReceived);
        }
        if let Some(byte) = next_byte(serial)? {
            fsm.update(byte);
        }
    }

    let mut last_byte = clock.now();
    loop {
        match next_byte(serial)? {
            Some(byte) => {
                if fsm.update(byte) == ReadStatus::Finished {
                    return Ok(fsm.buffer);
                }
                last_byte = clock.now();
            }
            None if clock.now() - last_byte >= byte_timeout => {
                diag!(
                    diagnostics,
                    Level::Warn,
                    "frame incomplete: {} of {} bytes",
                    fsm.index,
                    OUTPUT_FRAME_SIZE
                );
                return Err(Error::NoMessageReceived);
            }
            None => {}
        }
    }
}

fn next_byte<RX>(serial: &mut RX) -> Result<Option<u8>, Error<RX::Error>>
where
    RX: Read<u8>,
{
    match serial.read() {
        Ok(byte) => Ok(Some(byte)),
        Err(nb::Error::WouldBlock) => Ok(None),
        Err(nb::Error::Other(e)) => Err(Error::Transport(e)),
    }
}
