mod common;

use std::sync::Mutex;

use common::{FakeClock, FakeSerial, CAPTURED};
use log::{Level, LevelFilter, Log, Metadata, Record};
use pms5003::{Pms5003, SensorConfig};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

#[test]
fn verbosity_is_per_driver_and_adjustable() {
    let mut bad = CAPTURED;
    bad[31] = 0x00;
    let mut serial = FakeSerial::with_input(&bad);
    serial.push(&bad);
    serial.push(&CAPTURED);

    let config = SensorConfig::default().with_log_level(LevelFilter::Error);
    let mut pms = Pms5003::with_clock(serial, FakeClock::new(), config).with_logger(&CAPTURE);

    assert!(pms.read(false).is_err());
    assert_eq!(
        vec![(Level::Error, "checksum failure 256 != 360".to_string())],
        *CAPTURE.records.lock().unwrap()
    );

    pms.set_log_level(LevelFilter::Off);
    assert!(pms.read(false).is_err());
    assert_eq!(1, CAPTURE.records.lock().unwrap().len());

    pms.set_log_level(LevelFilter::Trace);
    pms.read(false).unwrap();
    let records = CAPTURE.records.lock().unwrap();
    assert_eq!(Level::Trace, records[1].0);
    assert!(records[1].1.starts_with("frame: [42, 4D"));
}
