use pms5003::*;
use std::time::Duration;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Missing path to device");

    println!("Connecting to: {}", path);

    let mut sensor = Pms5003::open(&path, SensorConfig::default()).unwrap();

    sensor.set_mode(SamplingMode::Passive).unwrap();
    std::thread::sleep(Duration::from_secs(5));

    println!("{}", sensor.read_in_passive(true).unwrap());
}
