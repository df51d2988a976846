#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::ErrorKind;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{DateTime, TimeZone, Utc};
use embedded_hal::blocking::delay::DelayMs;
use pms5003::{Clock, Pms5003, ResetInput, SensorConfig};

/// Frame captured from a real sensor: PM 5/7/7 (CF=1), 5/7/7 (atmospheric), no counts.
pub const CAPTURED: [u8; 32] = [
    0x42, 0x4d, 0x0, 0x1c, 0x0, 0x5, 0x0, 0x7, 0x0, 0x7, 0x0, 0x5, 0x0, 0x7, 0x0, 0x7, 0x0, 0x0,
    0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x97, 0x0, 0x1, 0x68,
];

/// Builds a valid frame carrying `values` in wire order.
pub fn frame(values: [u16; 12]) -> Vec<u8> {
    let mut bytes = vec![0x42, 0x4D, 0x00, 0x1C];
    for value in values.iter() {
        bytes.extend_from_slice(&value.to_be_bytes());
    }
    bytes.extend_from_slice(&[0x97, 0x00]);
    let sum: u16 = bytes.iter().map(|b| u16::from(*b)).sum();
    bytes.extend_from_slice(&sum.to_be_bytes());
    bytes
}

/// Serial port fed from a queue; `None` entries read as `WouldBlock`.
#[derive(Default)]
pub struct FakeSerial {
    pub input: VecDeque<Option<u8>>,
    pub written: Vec<u8>,
    pub flushes: usize,
    /// Bytes queued as soon as the written stream ends with the trigger.
    pub replies: Vec<(Vec<u8>, Vec<u8>)>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl FakeSerial {
    pub fn with_input(bytes: &[u8]) -> Self {
        let mut serial = Self::default();
        serial.push(bytes);
        serial
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().map(|b| Some(*b)));
    }

    pub fn gap(&mut self) {
        self.input.push_back(None);
    }

    pub fn reply_to(&mut self, trigger: &[u8], reply: &[u8]) {
        self.replies.push((trigger.to_vec(), reply.to_vec()));
    }
}

impl embedded_hal::serial::Read<u8> for FakeSerial {
    type Error = ErrorKind;

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        if self.fail_reads {
            return Err(nb::Error::Other(ErrorKind::BrokenPipe));
        }
        match self.input.pop_front() {
            Some(Some(byte)) => Ok(byte),
            _ => Err(nb::Error::WouldBlock),
        }
    }
}

/// Bytes before the first gap count as already received.
impl ResetInput for FakeSerial {
    fn reset_input_buffer(&mut self) -> Result<(), ErrorKind> {
        if self.fail_reads {
            return Err(ErrorKind::BrokenPipe);
        }
        while let Some(Some(_)) = self.input.pop_front() {}
        Ok(())
    }
}

impl embedded_hal::serial::Write<u8> for FakeSerial {
    type Error = ErrorKind;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(nb::Error::Other(ErrorKind::BrokenPipe));
        }
        self.written.push(word);

        let written = &self.written;
        let replies: Vec<Vec<u8>> = self
            .replies
            .iter()
            .filter(|(trigger, _)| written.ends_with(trigger))
            .map(|(_, reply)| reply.clone())
            .collect();
        for reply in replies {
            self.push(&reply);
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(nb::Error::Other(ErrorKind::BrokenPipe));
        }
        self.flushes += 1;
        Ok(())
    }
}

/// Advances one millisecond per `now()` call and by the full amount on each delay.
#[derive(Clone)]
pub struct FakeClock {
    start: Instant,
    elapsed: Rc<Cell<Duration>>,
    pub delays: Rc<RefCell<Vec<u32>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
            delays: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }
}

pub fn capture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        let elapsed = self.elapsed.get();
        self.elapsed.set(elapsed + Duration::from_millis(1));
        self.start + elapsed
    }

    fn utc_now(&self) -> DateTime<Utc> {
        capture_time()
    }
}

impl DelayMs<u32> for FakeClock {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.borrow_mut().push(ms);
        self.elapsed
            .set(self.elapsed.get() + Duration::from_millis(u64::from(ms)));
    }
}

pub fn sensor(serial: FakeSerial) -> (Pms5003<FakeSerial, FakeClock>, FakeClock) {
    let clock = FakeClock::new();
    let sensor = Pms5003::with_clock(serial, clock.clone(), SensorConfig::default());
    (sensor, clock)
}
