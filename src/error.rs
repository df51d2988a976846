use crate::frame::ChecksumMismatch;

/// Failures reported by the driver. `E` is the serial transport's error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<E> {
    /// The serial port could not be opened or configured.
    #[error("sensor unavailable on {port}: {reason}")]
    SensorUnavailable { port: String, reason: String },

    /// No complete frame arrived before the read deadline.
    #[error("no message received")]
    NoMessageReceived,

    #[error(transparent)]
    ChecksumMismatch(#[from] ChecksumMismatch),

    /// Reading, writing or flushing the serial transport failed.
    #[error("serial transport error: {0:?}")]
    Transport(E),
}

impl<E> Error<E> {
    /// True for failures a caller may simply retry with a fresh read.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::NoMessageReceived | Error::ChecksumMismatch(_))
    }
}
