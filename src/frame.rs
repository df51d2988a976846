use thiserror::Error;

/// Two bytes opening every frame, in both directions.
pub const SYNC: [u8; 2] = [0x42, 0x4D];

pub const OUTPUT_FRAME_SIZE: usize = 32;
pub(crate) const MEASUREMENT_OFFSET: usize = 4;
pub(crate) const CHECKSUM_OFFSET: usize = OUTPUT_FRAME_SIZE - 2;

/// Raw data frame as captured from the sensor.
pub type Frame = [u8; OUTPUT_FRAME_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("checksum mismatch: frame carries {expected:#06x}, bytes sum to {actual:#06x}")]
pub struct ChecksumMismatch {
    /// Value carried in the last two bytes of the frame.
    pub expected: u16,
    /// Sum computed over the preceding bytes.
    pub actual: u16,
}

/// Additive 16-bit checksum used by both data and command frames.
pub fn checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |sum, byte| sum.wrapping_add(u16::from(*byte)))
}

///
/// Checks the trailing big-endian checksum against the sum of bytes 0-29
///
pub fn verify(frame: &Frame) -> Result<(), ChecksumMismatch> {
    let expected = u16::from_be_bytes([frame[CHECKSUM_OFFSET], frame[CHECKSUM_OFFSET + 1]]);
    let actual = checksum(&frame[..CHECKSUM_OFFSET]);

    if expected == actual {
        Ok(())
    } else {
        Err(ChecksumMismatch { expected, actual })
    }
}
