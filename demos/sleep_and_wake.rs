use pms5003::*;
use std::time::Duration;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Missing path to device");

    println!("Connecting to: {}", path);

    let mut sensor = Pms5003::open(&path, SensorConfig::default()).unwrap();

    println!("Turning off the fan for 15s");
    sensor.sleep().unwrap();
    std::thread::sleep(Duration::from_secs(15));

    println!("Waking back up. Please wait");
    sensor.wake().unwrap();
    sensor.set_mode(SamplingMode::Passive).unwrap();
    // fan needs ~30 s before readings are stable
    std::thread::sleep(Duration::from_secs(30));

    match sensor.read_in_passive(true) {
        Ok(reading) => println!("{}", reading),
        Err(e) => println!("{:?}", e),
    }
    sensor.sleep().unwrap();
}
