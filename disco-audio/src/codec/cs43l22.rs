//! CS43L22 audio codec driver.
//!
//! Register-level driver for the Cirrus Logic CS43L22 DAC with headphone and
//! speaker amplifiers, as fitted to the STM32F4-Discovery board. The codec is
//! run as an I2S slave with automatic clock detection, so the sample rate
//! only matters to the data bus.
//!
//! All register traffic goes through a [`ControlBus`]; the driver itself
//! only keeps the output routing (restored on unmute) and whether the DAC
//! is currently powered.
//!
//! # Example
//!
//! ```ignore
//! let mut io = CodecIo::new(i2c, reset, delay);
//! let id = Cs43l22::read_id(&mut io, AUDIO_I2C_ADDRESS)?;
//! let mut codec = Cs43l22::new();
//! codec.init(&mut io, AUDIO_I2C_ADDRESS, OutputDevice::Headphone, 70, 48_000)?;
//! codec.play(&mut io, AUDIO_I2C_ADDRESS, &samples)?;
//! ```

use super::registers as reg;
use crate::constants::MAX_VOLUME;
use crate::control::{CodecDriver, OutputDevice, StopOption};
use crate::error::Error;
use crate::io::ControlBus;

/// CS43L22 codec driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cs43l22 {
    /// POWER_CTL2 routing value restored when unmuting.
    output: u8,
    /// Whether the DAC is powered down (true until the first `play`).
    stopped: bool,
}

impl Default for Cs43l22 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cs43l22 {
    /// Masked identifier reported by a CS43L22.
    pub const ID: u8 = reg::CHIP_ID_CS43L22;

    /// Mask applied to the CHIP_ID register before comparing with [`Self::ID`].
    pub const ID_MASK: u8 = reg::CHIP_ID_MASK;

    /// Create a driver for a codec that has not been configured yet.
    pub const fn new() -> Self {
        Self {
            output: reg::OUTPUT_AUTO,
            stopped: true,
        }
    }

    /// Whether the DAC is powered down.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// POWER_CTL2 value for the current routing.
    pub fn output_code(&self) -> u8 {
        self.output
    }

    /// POWER_CTL2 value selecting `output`.
    pub const fn output_code_for(output: OutputDevice) -> u8 {
        match output {
            OutputDevice::Speaker => reg::OUTPUT_SPEAKER,
            OutputDevice::Headphone => reg::OUTPUT_HEADPHONE,
            OutputDevice::Both => reg::OUTPUT_BOTH,
            OutputDevice::Auto => reg::OUTPUT_AUTO,
        }
    }

    /// MASTER_x_VOL value for a 0–100 volume level. Levels above 100 are
    /// treated as 100 and give full scale (+12 dB). The board support
    /// package instead writes the unscaled level 100 (0x7D, about −50 dB)
    /// for them; the facade never gets that far since it rejects such
    /// levels with [`ConfigError::VolumeOutOfRange`](crate::ConfigError::VolumeOutOfRange).
    ///
    /// The level is first scaled to 0–255, then shifted so that 0 lands on
    /// the −102 dB floor (0x19) and 255 on +12 dB (0x18), wrapping through
    /// 0xFF (−0.5 dB) and 0x00 (0 dB).
    pub const fn master_volume(volume: u8) -> u8 {
        let v = if volume > MAX_VOLUME { MAX_VOLUME } else { volume };
        let converted = (v as u16 * 255 / MAX_VOLUME as u16) as u8;
        if converted > 0xE6 {
            converted - 0xE7
        } else {
            converted + 0x19
        }
    }

    fn write<B: ControlBus>(
        bus: &mut B,
        address: u8,
        register: u8,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        bus.write_register(address, register, value)
            .map_err(Error::Fatal)
    }

    fn write_master_volume<B: ControlBus>(
        bus: &mut B,
        address: u8,
        volume: u8,
    ) -> Result<(), Error<B::Error>> {
        let value = Self::master_volume(volume);
        Self::write(bus, address, reg::MASTER_A_VOL, value)?;
        Self::write(bus, address, reg::MASTER_B_VOL, value)
    }
}

impl<B: ControlBus> CodecDriver<B> for Cs43l22 {
    fn read_id(bus: &mut B, address: u8) -> Result<u8, Error<B::Error>> {
        bus.io_init().map_err(Error::Fatal)?;
        let id = bus
            .read_register(address, reg::CHIP_ID)
            .map_err(Error::Fatal)?;
        Ok(id & Self::ID_MASK)
    }

    fn init(
        &mut self,
        bus: &mut B,
        address: u8,
        output: OutputDevice,
        volume: u8,
        _sample_rate: u32,
    ) -> Result<(), Error<B::Error>> {
        bus.io_init().map_err(Error::Fatal)?;

        // Keep the codec powered off while configuring
        Self::write(bus, address, reg::POWER_CTL1, reg::POWER_CTL1_DOWN)?;

        self.output = Self::output_code_for(output);
        Self::write(bus, address, reg::POWER_CTL2, self.output)?;

        // Auto-detect speed and MCLK ratio
        Self::write(bus, address, reg::CLOCKING_CTL, reg::CLOCKING_AUTO)?;
        // Slave, I2S Philips
        Self::write(bus, address, reg::INTERFACE_CTL1, reg::INTERFACE_I2S_SLAVE)?;

        Self::write_master_volume(bus, address, volume)?;

        if output != OutputDevice::Headphone {
            // Speaker mono mode, no attenuation
            Self::write(bus, address, reg::PLAYBACK_CTL2, reg::PLAYBACK_SPEAKER_MONO)?;
            Self::write(bus, address, reg::SPEAKER_A_VOL, 0x00)?;
            Self::write(bus, address, reg::SPEAKER_B_VOL, 0x00)?;
        }

        // Ramps and limiter off so power-down is quick
        Self::write(bus, address, reg::ANALOG_ZC_SR, 0x00)?;
        Self::write(bus, address, reg::MISC_CTL, reg::MISC_SOFT_RAMP_OFF)?;
        Self::write(bus, address, reg::LIMIT_CTL1, 0x00)?;

        Self::write(bus, address, reg::TONE_CTL, reg::TONE_INIT)?;
        Self::write(bus, address, reg::PCMA_VOL, reg::PCM_VOL_INIT)?;
        Self::write(bus, address, reg::PCMB_VOL, reg::PCM_VOL_INIT)?;

        self.stopped = true;
        Ok(())
    }

    fn play(&mut self, bus: &mut B, address: u8, _samples: &[u16]) -> Result<(), Error<B::Error>> {
        if !self.stopped {
            return Ok(());
        }
        Self::write(bus, address, reg::MISC_CTL, reg::MISC_SOFT_RAMP_ON)?;
        self.set_mute(bus, address, false)?;
        Self::write(bus, address, reg::POWER_CTL1, reg::POWER_CTL1_UP)?;
        self.stopped = false;
        Ok(())
    }

    fn stop(
        &mut self,
        bus: &mut B,
        address: u8,
        _option: StopOption,
    ) -> Result<(), Error<B::Error>> {
        self.set_mute(bus, address, true)?;
        Self::write(bus, address, reg::MISC_CTL, reg::MISC_SOFT_RAMP_OFF)?;
        // Power down DAC and speaker
        Self::write(bus, address, reg::POWER_CTL1, reg::POWER_CTL1_DOWN_DAC)?;
        self.stopped = true;
        Ok(())
    }

    fn pause(&mut self, bus: &mut B, address: u8) -> Result<(), Error<B::Error>> {
        self.set_mute(bus, address, true)?;
        Self::write(bus, address, reg::POWER_CTL1, reg::POWER_CTL1_DOWN)
    }

    fn resume(&mut self, bus: &mut B, address: u8) -> Result<(), Error<B::Error>> {
        self.set_mute(bus, address, false)?;
        Self::write(bus, address, reg::POWER_CTL2, self.output)?;
        Self::write(bus, address, reg::POWER_CTL1, reg::POWER_CTL1_UP)
    }

    fn set_volume(&mut self, bus: &mut B, address: u8, volume: u8) -> Result<(), Error<B::Error>> {
        Self::write_master_volume(bus, address, volume)
    }

    fn set_mute(&mut self, bus: &mut B, address: u8, mute: bool) -> Result<(), Error<B::Error>> {
        if mute {
            Self::write(bus, address, reg::POWER_CTL2, reg::OUTPUT_OFF)?;
            Self::write(bus, address, reg::HEADPHONE_A_VOL, reg::HEADPHONE_MUTED)?;
            Self::write(bus, address, reg::HEADPHONE_B_VOL, reg::HEADPHONE_MUTED)
        } else {
            Self::write(bus, address, reg::HEADPHONE_A_VOL, 0x00)?;
            Self::write(bus, address, reg::HEADPHONE_B_VOL, 0x00)?;
            Self::write(bus, address, reg::POWER_CTL2, self.output)
        }
    }

    fn set_output_mode(
        &mut self,
        bus: &mut B,
        address: u8,
        output: OutputDevice,
    ) -> Result<(), Error<B::Error>> {
        self.output = Self::output_code_for(output);
        Self::write(bus, address, reg::POWER_CTL2, self.output)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
