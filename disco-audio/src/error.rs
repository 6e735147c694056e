//! Error and status types shared by the facade and the codec drivers.

use core::fmt;

use crate::config::ConfigError;
use crate::io::TransferErrorKind;

/// Three-valued operation status, as reported to C-style callers.
///
/// Codes match the board support package: `0` ok, `1` error, `2` timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Operation completed.
    Ok = 0,
    /// Operation failed.
    Error = 1,
    /// The data bus did not finish within the configured timeout.
    Timeout = 2,
}

impl Status {
    /// Numeric status code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Collapse a driver result into a status.
    pub fn from_result<T, E>(result: &Result<T, Error<E>>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

/// Audio subsystem error, generic over the control bus error `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The control bus failed. The system cannot continue and the caller
    /// must halt or reset the board; nothing in this crate retries.
    Fatal(E),
    /// The identifier read from the codec matched no registered driver.
    UnknownCodec {
        /// Masked identifier that was read.
        id: u8,
    },
    /// No codec driver is bound; `init` has not succeeded yet.
    NotInitialized,
    /// The codec was powered down by a hardware stop and must be
    /// re-initialized first.
    PoweredDown,
    /// An `init` or `set_volume` argument was out of range.
    InvalidConfig(ConfigError),
    /// The byte count is zero, odd, or larger than the sample buffer.
    InvalidBuffer {
        /// Byte count requested by the caller.
        size_bytes: u32,
        /// Size of the sample buffer in bytes.
        capacity_bytes: usize,
    },
    /// The data bus reported a failure other than a timeout.
    Transfer(TransferErrorKind),
    /// The data bus did not complete within the timeout.
    Timeout,
}

impl<E> Error<E> {
    /// Whether this error must be treated as unrecoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Fatal(_))
    }

    /// Status code this error is reported as.
    pub fn status(&self) -> Status {
        match self {
            Error::Timeout => Status::Timeout,
            _ => Status::Error,
        }
    }
}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::InvalidConfig(e)
    }
}

impl<E> From<TransferErrorKind> for Error<E> {
    fn from(kind: TransferErrorKind) -> Self {
        match kind {
            TransferErrorKind::Timeout => Error::Timeout,
            kind => Error::Transfer(kind),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fatal(e) => write!(f, "control bus failure: {e:?}"),
            Error::UnknownCodec { id } => write!(f, "unknown codec id {id:#04x}"),
            Error::NotInitialized => f.write_str("audio codec not initialized"),
            Error::PoweredDown => f.write_str("audio codec is powered down"),
            Error::InvalidConfig(e) => write!(f, "invalid configuration: {e}"),
            Error::InvalidBuffer {
                size_bytes,
                capacity_bytes,
            } => write!(
                f,
                "invalid transfer of {size_bytes} bytes from a {capacity_bytes}-byte buffer"
            ),
            Error::Transfer(kind) => write!(f, "data bus transfer failed: {kind:?}"),
            Error::Timeout => f.write_str("data bus transfer timed out"),
        }
    }
}
