//! Control bus: single-byte codec register access plus reset sequencing.
//!
//! [`CodecIo`] bundles the I2C bus, the codec reset line and a delay
//! provider. It is generic over any [`embedded_hal::i2c::I2c`],
//! [`embedded_hal::digital::OutputPin`] and [`embedded_hal::delay::DelayNs`]
//! implementation.
//!
//! # Example
//!
//! ```ignore
//! let mut io = CodecIo::new(i2c, reset_pin, delay);
//! io.io_init()?;                              // reset pulse, 5 ms + 5 ms
//! let id = io.read_register(0x4A, 0x01)?;     // chip ID
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

use crate::constants::RESET_HOLD_MS;

/// Low-level I/O primitives a codec driver is built on.
///
/// Every error returned here means the control path to the codec is broken;
/// the driver layer reports it as [`Error::Fatal`](crate::Error::Fatal).
pub trait ControlBus {
    /// Bus failure.
    type Error: core::fmt::Debug;

    /// Write one byte to `register` of the device at `address`.
    fn write_register(&mut self, address: u8, register: u8, value: u8)
        -> Result<(), Self::Error>;

    /// Read one byte from `register` of the device at `address`.
    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    /// Power-up sequencing: reset low, wait, reset high, wait.
    fn io_init(&mut self) -> Result<(), Self::Error>;

    /// Counterpart of [`io_init`](Self::io_init). Nothing to undo by default.
    fn io_deinit(&mut self) {}

    /// Block for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Drive the reset line to its asserted level, powering the codec down.
    fn assert_reset(&mut self) -> Result<(), Self::Error>;
}

/// Failure on one of the control-path peripherals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError<I2cE, PinE> {
    /// I2C transaction failed.
    I2c(I2cE),
    /// Reset line could not be driven.
    Pin(PinE),
}

/// [`ControlBus`] over embedded-hal peripherals.
///
/// The reset line is active low: driving it low holds the codec in reset.
pub struct CodecIo<I2C, RST, D> {
    i2c: I2C,
    reset: RST,
    delay: D,
}

impl<I2C, RST, D> CodecIo<I2C, RST, D>
where
    I2C: I2c,
    RST: OutputPin,
    D: DelayNs,
{
    /// Wrap the I2C bus, the codec reset pin and a delay provider.
    pub fn new(i2c: I2C, reset: RST, delay: D) -> Self {
        Self { i2c, reset, delay }
    }

    /// Release the wrapped peripherals.
    pub fn release(self) -> (I2C, RST, D) {
        (self.i2c, self.reset, self.delay)
    }
}

impl<I2C, RST, D> ControlBus for CodecIo<I2C, RST, D>
where
    I2C: I2c,
    RST: OutputPin,
    D: DelayNs,
{
    type Error = IoError<I2C::Error, RST::Error>;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
    ) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, value]).map_err(|e| {
            error!("i2c write to {=u8:#x} reg {=u8:#x} failed", address, register);
            IoError::I2c(e)
        })
    }

    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(address, &[register], &mut value)
            .map_err(|e| {
                error!("i2c read from {=u8:#x} reg {=u8:#x} failed", address, register);
                IoError::I2c(e)
            })?;
        Ok(value[0])
    }

    fn io_init(&mut self) -> Result<(), Self::Error> {
        // Hold in reset long enough to clear the register file
        self.reset.set_low().map_err(IoError::Pin)?;
        self.delay.delay_ms(RESET_HOLD_MS);
        self.reset.set_high().map_err(IoError::Pin)?;
        self.delay.delay_ms(RESET_HOLD_MS);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn assert_reset(&mut self) -> Result<(), Self::Error> {
        self.reset.set_low().map_err(IoError::Pin)
    }
}
