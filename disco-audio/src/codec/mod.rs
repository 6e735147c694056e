//! Codec drivers and the registry used to pick one at init time.
//!
//! Each supported codec implements [`CodecDriver`] and gets a variant in
//! [`Codec`]. [`Codec::identify`] reads the chip identifier and returns the
//! matching driver; [`Codec`] itself implements [`CodecDriver`] by
//! delegating to the bound variant.
//!
//! | Codec | Identifier (masked) | Board |
//! |-------|---------------------|-------|
//! | [`Cs43l22`] | `0xE0` (mask `0xF8`) | STM32F4-Discovery |

pub mod registers;
mod cs43l22;

pub use cs43l22::Cs43l22;

use crate::control::{CodecDriver, OutputDevice, StopOption};
use crate::error::Error;
use crate::io::ControlBus;

/// A bound codec driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Codec {
    /// Cirrus Logic CS43L22.
    Cs43l22(Cs43l22),
}

impl Codec {
    /// Probe the device at `address` and return the driver for it.
    ///
    /// Fails with [`Error::UnknownCodec`] carrying the masked identifier when
    /// no registered driver matches.
    pub fn identify<B: ControlBus>(bus: &mut B, address: u8) -> Result<Self, Error<B::Error>> {
        let id = <Cs43l22 as CodecDriver<B>>::read_id(bus, address)?;
        if id == Cs43l22::ID {
            debug!("codec id {=u8:#x}: CS43L22", id);
            return Ok(Codec::Cs43l22(Cs43l22::new()));
        }
        Err(Error::UnknownCodec { id })
    }

    /// Human-readable part name.
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Cs43l22(_) => "CS43L22",
        }
    }
}

impl<B: ControlBus> CodecDriver<B> for Codec {
    /// Reads the identifier the way the first registered driver does.
    fn read_id(bus: &mut B, address: u8) -> Result<u8, Error<B::Error>> {
        <Cs43l22 as CodecDriver<B>>::read_id(bus, address)
    }

    fn init(
        &mut self,
        bus: &mut B,
        address: u8,
        output: OutputDevice,
        volume: u8,
        sample_rate: u32,
    ) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.init(bus, address, output, volume, sample_rate),
        }
    }

    fn play(&mut self, bus: &mut B, address: u8, samples: &[u16]) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.play(bus, address, samples),
        }
    }

    fn stop(
        &mut self,
        bus: &mut B,
        address: u8,
        option: StopOption,
    ) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.stop(bus, address, option),
        }
    }

    fn pause(&mut self, bus: &mut B, address: u8) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.pause(bus, address),
        }
    }

    fn resume(&mut self, bus: &mut B, address: u8) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.resume(bus, address),
        }
    }

    fn set_volume(&mut self, bus: &mut B, address: u8, volume: u8) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.set_volume(bus, address, volume),
        }
    }

    fn set_mute(&mut self, bus: &mut B, address: u8, mute: bool) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.set_mute(bus, address, mute),
        }
    }

    fn set_output_mode(
        &mut self,
        bus: &mut B,
        address: u8,
        output: OutputDevice,
    ) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.set_output_mode(bus, address, output),
        }
    }

    fn reset(&mut self, bus: &mut B, address: u8) -> Result<(), Error<B::Error>> {
        match self {
            Codec::Cs43l22(d) => d.reset(bus, address),
        }
    }

    fn deinit(&mut self, bus: &mut B) {
        match self {
            Codec::Cs43l22(d) => d.deinit(bus),
        }
    }
}
