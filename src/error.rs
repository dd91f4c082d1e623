// src/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Error<E = ()>
where
    E: core::fmt::Debug, // Need Debug for the generic bus error
{
    /// Underlying I2C bus error from the HAL implementation.
    ///
    /// Covers open, write and read failures alike; the HAL error is
    /// carried through unchanged and never retried.
    #[error("Bus error: {0:?}")] // Format string requires Debug on E
    Bus(E),

    /// Received CRC does not match the CRC calculated over the data word.
    #[error("CRC mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    CrcMismatch { expected: u8, calculated: u8 },
}

// Allow mapping from the underlying HAL error with `?`
impl<E: core::fmt::Debug> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}

// Note: For the Bus(E) variant's #[error("...")] message to work even in
// no_std, the underlying error type `E` must implement `core::fmt::Debug`.
