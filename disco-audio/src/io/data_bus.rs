//! Data bus: blocking transfer of 16-bit PCM words to the codec.
//!
//! `embedded-hal` has no I2S trait, so the facade consumes
//! [`SampleTransmit`], implemented by the board for its I2S/SPI peripheral.
//! Errors follow the embedded-hal pattern of a HAL-specific error type that
//! can be classified into a generic [`TransferErrorKind`].

/// Generic data bus failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum TransferErrorKind {
    /// The transfer did not complete before the timeout elapsed.
    Timeout,
    /// The peripheral FIFO overflowed.
    Overrun,
    /// The peripheral ran out of data mid-frame.
    Underrun,
    /// Any other failure.
    Other,
}

/// Data bus error, classifiable into a [`TransferErrorKind`].
pub trait TransferError: core::fmt::Debug {
    /// Generic class of this error.
    fn kind(&self) -> TransferErrorKind;
}

impl TransferError for TransferErrorKind {
    fn kind(&self) -> TransferErrorKind {
        *self
    }
}

impl TransferError for core::convert::Infallible {
    fn kind(&self) -> TransferErrorKind {
        match *self {}
    }
}

/// Blocking sample sink.
pub trait SampleTransmit {
    /// Transfer failure.
    type Error: TransferError;

    /// Transmit every word of `samples` in one blocking call, giving up after
    /// `timeout_ms` milliseconds. [`MAX_DELAY_MS`](crate::constants::MAX_DELAY_MS)
    /// waits forever.
    fn transmit(&mut self, samples: &[u16], timeout_ms: u32) -> Result<(), Self::Error>;

    /// Reconfigure the bus clock for `sample_rate` Hz. Boards with a fixed
    /// I2S clock keep the default no-op.
    fn configure(&mut self, sample_rate: u32) -> Result<(), Self::Error> {
        let _ = sample_rate;
        Ok(())
    }
}

impl<T: SampleTransmit + ?Sized> SampleTransmit for &mut T {
    type Error = T::Error;

    fn transmit(&mut self, samples: &[u16], timeout_ms: u32) -> Result<(), Self::Error> {
        T::transmit(self, samples, timeout_ms)
    }

    fn configure(&mut self, sample_rate: u32) -> Result<(), Self::Error> {
        T::configure(self, sample_rate)
    }
}
