//! Audio subsystem configuration.

use core::fmt;

use crate::constants::{AUDIO_I2C_ADDRESS, MAX_DELAY_MS, MAX_VOLUME};

/// What `init` reports when the codec identifier matches no driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Identification {
    /// Return [`Error::UnknownCodec`](crate::Error::UnknownCodec).
    #[default]
    Strict,
    /// Return `Ok` and leave the driver unbound, as the board support
    /// package does. Later calls then fail with `NotInitialized`.
    Lenient,
}

/// Out-of-range argument to `init` or `set_volume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Volume above [`MAX_VOLUME`].
    VolumeOutOfRange(u8),
    /// Sample rate of 0 Hz.
    ZeroSampleRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::VolumeOutOfRange(v) => {
                write!(f, "volume {v} is above {MAX_VOLUME}")
            }
            ConfigError::ZeroSampleRate => f.write_str("sample rate must be non-zero"),
        }
    }
}

/// Static configuration of an [`AudioSubsystem`](crate::AudioSubsystem).
///
/// ```ignore
/// let config = AudioConfig::default()
///     .with_transfer_timeout_ms(500)
///     .with_identification(Identification::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioConfig {
    /// 7-bit codec address on the control bus.
    pub address: u8,
    /// Timeout handed to every data bus transfer, in milliseconds.
    pub transfer_timeout_ms: u32,
    /// Reporting policy for an unrecognized codec.
    pub identification: Identification,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            address: AUDIO_I2C_ADDRESS,
            transfer_timeout_ms: MAX_DELAY_MS,
            identification: Identification::Strict,
        }
    }
}

impl AudioConfig {
    /// Use a different codec address (e.g. AD0 tied high).
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Bound each data bus transfer to `ms` milliseconds.
    pub const fn with_transfer_timeout_ms(mut self, ms: u32) -> Self {
        self.transfer_timeout_ms = ms;
        self
    }

    /// Select how an unrecognized codec is reported.
    pub const fn with_identification(mut self, identification: Identification) -> Self {
        self.identification = identification;
        self
    }
}

/// Check a volume level against the 0–100 range.
pub fn check_volume(volume: u8) -> Result<u8, ConfigError> {
    if volume > MAX_VOLUME {
        return Err(ConfigError::VolumeOutOfRange(volume));
    }
    Ok(volume)
}

/// Check that a sample rate is non-zero.
pub fn check_sample_rate(sample_rate: u32) -> Result<u32, ConfigError> {
    if sample_rate == 0 {
        return Err(ConfigError::ZeroSampleRate);
    }
    Ok(sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::registers as reg;

    #[test]
    fn defaults_match_discovery_board() {
        let c = AudioConfig::default();
        assert_eq!(c.address, 0x4A);
        assert_eq!(c.address << 1, 0x94);
        assert_eq!(c.transfer_timeout_ms, u32::MAX);
        assert_eq!(c.identification, Identification::Strict);
    }

    #[test]
    fn builder_overrides() {
        let c = AudioConfig::default()
            .with_address(reg::I2C_ADDR_AD0_HIGH)
            .with_transfer_timeout_ms(250)
            .with_identification(Identification::Lenient);
        assert_eq!(c.address, 0x4B);
        assert_eq!(c.transfer_timeout_ms, 250);
        assert_eq!(c.identification, Identification::Lenient);
    }

    #[test]
    fn volume_range() {
        assert_eq!(check_volume(0), Ok(0));
        assert_eq!(check_volume(100), Ok(100));
        assert_eq!(check_volume(101), Err(ConfigError::VolumeOutOfRange(101)));
    }

    #[test]
    fn sample_rate_must_be_positive() {
        assert_eq!(check_sample_rate(48_000), Ok(48_000));
        assert_eq!(check_sample_rate(0), Err(ConfigError::ZeroSampleRate));
    }
}
