use crate::codec::registers;

/// Codec I2C address on the STM32F4-Discovery board (7-bit form of 0x94).
pub const AUDIO_I2C_ADDRESS: u8 = registers::I2C_ADDR_AD0_LOW;

/// Reset line hold time for each edge of the power-up ritual, in milliseconds.
pub const RESET_HOLD_MS: u32 = 5;

/// Minimum wait before pulling the reset line on a hardware power-down, in milliseconds.
pub const POWER_DOWN_DELAY_MS: u32 = 1;

/// Data bus timeout meaning "block until the transfer completes".
pub const MAX_DELAY_MS: u32 = u32::MAX;

/// Highest accepted volume level (0 = mute).
pub const MAX_VOLUME: u8 = 100;
