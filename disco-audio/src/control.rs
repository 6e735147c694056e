use crate::error::Error;
use crate::io::ControlBus;

/// Output routing requested at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDevice {
    /// Speaker amplifier only.
    Speaker = 1,
    /// Headphone amplifier only.
    Headphone = 2,
    /// Speaker and headphone.
    Both = 3,
    /// Follow the headphone-detect pin.
    Auto = 4,
}

/// How far `stop` takes the codec down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopOption {
    /// Stop, then hold the codec in reset. A full `init` is needed afterwards.
    PowerDownHw = 1,
    /// Stop and power down the DAC through registers only.
    PowerDownSw = 2,
}

/// Register-level driver for one codec model.
///
/// The facade picks an implementation by reading the chip identifier, then
/// drives it through these entry points. `address` is the codec's 7-bit
/// control bus address. Bus failures come back as
/// [`Error::Fatal`](crate::Error::Fatal).
pub trait CodecDriver<B: ControlBus> {
    /// Reset the codec and read its masked identifier.
    fn read_id(bus: &mut B, address: u8) -> Result<u8, Error<B::Error>>;

    /// Configure the codec for playback. Leaves it powered down until `play`.
    fn init(
        &mut self,
        bus: &mut B,
        address: u8,
        output: OutputDevice,
        volume: u8,
        sample_rate: u32,
    ) -> Result<(), Error<B::Error>>;

    /// Prepare the codec for `samples`, powering it up if stopped.
    fn play(&mut self, bus: &mut B, address: u8, samples: &[u16]) -> Result<(), Error<B::Error>>;

    /// Mute and power down the DAC.
    fn stop(&mut self, bus: &mut B, address: u8, option: StopOption)
        -> Result<(), Error<B::Error>>;

    /// Mute and enter power-save, keeping the configuration.
    fn pause(&mut self, bus: &mut B, address: u8) -> Result<(), Error<B::Error>>;

    /// Leave power-save and unmute.
    fn resume(&mut self, bus: &mut B, address: u8) -> Result<(), Error<B::Error>>;

    /// Set the master volume (0 = silent, 100 = maximum).
    fn set_volume(&mut self, bus: &mut B, address: u8, volume: u8)
        -> Result<(), Error<B::Error>>;

    /// Mute or unmute the outputs.
    fn set_mute(&mut self, bus: &mut B, address: u8, mute: bool) -> Result<(), Error<B::Error>>;

    /// Change the output routing.
    fn set_output_mode(
        &mut self,
        bus: &mut B,
        address: u8,
        output: OutputDevice,
    ) -> Result<(), Error<B::Error>>;

    /// Software reset. Nothing to do by default.
    fn reset(&mut self, _bus: &mut B, _address: u8) -> Result<(), Error<B::Error>> {
        Ok(())
    }

    /// Release low-level resources.
    fn deinit(&mut self, bus: &mut B) {
        bus.io_deinit();
    }
}
