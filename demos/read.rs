use pms5003::*;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_SERIAL_PORT.to_string());

    println!("Connecting to: {}", path);

    let mut sensor = Pms5003::open(&path, SensorConfig::default()).unwrap();

    loop {
        match sensor.read(true) {
            Ok(reading) => println!("{}", reading),
            Err(e) => println!("{}", e),
        }
    }
}
