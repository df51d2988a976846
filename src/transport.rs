use embedded_hal::serial::{Read, Write};

///
/// Receive side that can drop input it has buffered but not yet handed out
///
pub trait ResetInput: Read<u8> {
    /// Clears already received bytes without waiting for new ones.
    fn reset_input_buffer(&mut self) -> Result<(), <Self as Read<u8>>::Error>;
}

///
/// Combines two serial traits objects into one
///
pub struct Wrapper<TX, RX>(pub(crate) TX, pub(crate) RX)
where
    TX: Write<u8>,
    RX: Read<u8>;

impl<TX, RX> Wrapper<TX, RX>
where
    TX: Write<u8>,
    RX: Read<u8>,
{
    pub fn release(self) -> (TX, RX) {
        (self.0, self.1)
    }
}

impl<TX, RX> Read<u8> for Wrapper<TX, RX>
where
    TX: Write<u8>,
    RX: Read<u8>,
{
    type Error = RX::Error;

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        self.1.read()
    }
}

impl<TX, RX> ResetInput for Wrapper<TX, RX>
where
    TX: Write<u8>,
    RX: ResetInput,
{
    fn reset_input_buffer(&mut self) -> Result<(), RX::Error> {
        self.1.reset_input_buffer()
    }
}

impl<TX, RX> Write<u8> for Wrapper<TX, RX>
where
    TX: Write<u8>,
    RX: Read<u8>,
{
    type Error = TX::Error;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        self.0.write(word)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.0.flush()
    }
}

#[cfg(feature = "linux")]
pub use self::linux::open;

#[cfg(feature = "linux")]
mod linux {
    use std::io::ErrorKind;
    use std::os::unix::io::AsRawFd;
    use std::path::Path;

    use linux_embedded_hal::Serial;
    use serial_core::{BaudRate, SerialPort, SerialPortSettings};

    use super::ResetInput;
    use crate::config::SensorConfig;
    use crate::error::Error;

    ///
    /// Opens a tty and applies the configured baud rate and per-byte timeout
    ///
    pub fn open(port: &str, config: &SensorConfig) -> Result<Serial, Error<ErrorKind>> {
        let unavailable = |reason: serial_core::Error| Error::SensorUnavailable {
            port: port.to_string(),
            reason: reason.to_string(),
        };

        let mut serial = Serial::open(Path::new(port)).map_err(unavailable)?;
        let baud_rate = BaudRate::from_speed(config.baud_rate as usize);
        serial
            .0
            .reconfigure(&|settings: &mut dyn SerialPortSettings| {
                settings.set_baud_rate(baud_rate)
            })
            .map_err(unavailable)?;
        serial
            .0
            .set_timeout(config.serial_timeout)
            .map_err(unavailable)?;

        Ok(serial)
    }

    impl ResetInput for Serial {
        fn reset_input_buffer(&mut self) -> Result<(), ErrorKind> {
            // TCIFLUSH drops data received by the tty but not yet read
            let result = unsafe { libc::tcflush(self.0.as_raw_fd(), libc::TCIFLUSH) };
            if result == 0 {
                Ok(())
            } else {
                Err(std::io::Error::last_os_error().kind())
            }
        }
    }

}
