//! CS43L22 register addresses and field values.
//!
//! Taken from the Cirrus Logic CS43L22 datasheet (DS792). Register addresses
//! are 8-bit; every register holds one byte. The map below covers the
//! registers the driver touches plus a few kept for completeness.

// Some registers are defined for completeness (passthrough, beep, status)
// but are not written by the driver.
#![allow(dead_code)]

// ── I2C address ────────────────────────────────────────────────────────────

/// 7-bit I2C address with AD0 tied low (0x94 in 8-bit write form).
pub const I2C_ADDR_AD0_LOW: u8 = 0x4A;

/// 7-bit I2C address with AD0 tied high (0x96 in 8-bit write form).
pub const I2C_ADDR_AD0_HIGH: u8 = 0x4B;

// ── Chip identification ────────────────────────────────────────────────────

/// Chip ID and revision register (read-only).
/// - Bits 7:3 — CHIPID (0b11100 for CS43L22)
/// - Bits 2:0 — REVID
pub const CHIP_ID: u8 = 0x01;

/// Mask selecting the CHIPID field of [`CHIP_ID`].
pub const CHIP_ID_MASK: u8 = 0xF8;

/// CHIPID field value identifying a CS43L22.
pub const CHIP_ID_CS43L22: u8 = 0xE0;

// ── Power control ──────────────────────────────────────────────────────────

/// Power control 1.
/// - 0x01 — powered down (default)
/// - 0x9E — powered up
/// - 0x9F — powered down, as written when playback stops
pub const POWER_CTL1: u8 = 0x02;

/// Power control 1: powered down.
pub const POWER_CTL1_DOWN: u8 = 0x01;

/// Power control 1: powered up.
pub const POWER_CTL1_UP: u8 = 0x9E;

/// Power control 1: powered down, the encoding written when playback stops.
pub const POWER_CTL1_DOWN_DAC: u8 = 0x9F;

/// Power control 2 (speaker/headphone channel power).
/// - Bits 7:6 — PDN_HPB, Bits 5:4 — PDN_HPA
/// - Bits 3:2 — PDN_SPKB, Bits 1:0 — PDN_SPKA
/// - 0b11 = always off, 0b10 = always on, 0b0x = follow SPK/HP detect pin
pub const POWER_CTL2: u8 = 0x04;

/// Power control 2: speaker channels on, headphone channels off.
pub const OUTPUT_SPEAKER: u8 = 0xFA;

/// Power control 2: headphone channels on, speaker channels off.
pub const OUTPUT_HEADPHONE: u8 = 0xAF;

/// Power control 2: all channels on.
pub const OUTPUT_BOTH: u8 = 0xAA;

/// Power control 2: channels follow the SPK/HP_SW detect pin.
pub const OUTPUT_AUTO: u8 = 0x05;

/// Power control 2: all channels off (used to mute).
pub const OUTPUT_OFF: u8 = 0xFF;

// ── Clocking and interface ─────────────────────────────────────────────────

/// Clocking control.
/// - Bit 7 — AUTO (speed and MCLK ratio auto-detect)
pub const CLOCKING_CTL: u8 = 0x05;

/// Clocking control: auto-detect.
pub const CLOCKING_AUTO: u8 = 0x80;

/// Interface control 1.
/// - Bit 7   — M/S (0 = slave)
/// - Bits 3:2 — DACDIF (0b01 = I2S up to 24-bit)
/// - Bits 1:0 — AWL (audio word length for right justified)
pub const INTERFACE_CTL1: u8 = 0x06;

/// Interface control 1: slave, I2S Philips standard.
pub const INTERFACE_I2S_SLAVE: u8 = 0x04;

/// Interface control 2.
pub const INTERFACE_CTL2: u8 = 0x07;

/// Passthrough A select.
pub const PASSTHROUGH_A_SELECT: u8 = 0x08;

/// Passthrough B select.
pub const PASSTHROUGH_B_SELECT: u8 = 0x09;

/// Analog zero-cross and soft-ramp settings.
pub const ANALOG_ZC_SR: u8 = 0x0A;

/// Playback control 1.
pub const PLAYBACK_CTL1: u8 = 0x0D;

/// Miscellaneous controls.
/// - Bit 2 — DIGDE (de-emphasis)
/// - Bit 1 — DIGSFT (digital soft ramp)
pub const MISC_CTL: u8 = 0x0E;

/// Misc control: soft ramp off, de-emphasis on.
pub const MISC_SOFT_RAMP_OFF: u8 = 0x04;

/// Misc control: soft ramp on, de-emphasis on.
pub const MISC_SOFT_RAMP_ON: u8 = 0x06;

/// Playback control 2.
/// - Bit 2 — SPKMONO
/// - Bit 1 — SPKSWAP
pub const PLAYBACK_CTL2: u8 = 0x0F;

/// Playback control 2: speaker mono, channels swapped.
pub const PLAYBACK_SPEAKER_MONO: u8 = 0x06;

// ── Volume ─────────────────────────────────────────────────────────────────

/// Passthrough A volume.
pub const PASSTHROUGH_A_VOL: u8 = 0x14;

/// Passthrough B volume.
pub const PASSTHROUGH_B_VOL: u8 = 0x15;

/// PCM A volume (0.5 dB steps, bit 7 = mute).
pub const PCMA_VOL: u8 = 0x1A;

/// PCM B volume.
pub const PCMB_VOL: u8 = 0x1B;

/// PCM volume written at init (+5 dB).
pub const PCM_VOL_INIT: u8 = 0x0A;

/// Beep frequency and on time.
pub const BEEP_FREQ_ON_TIME: u8 = 0x1C;

/// Beep volume and off time.
pub const BEEP_VOL_OFF_TIME: u8 = 0x1D;

/// Beep and tone configuration.
pub const BEEP_TONE_CFG: u8 = 0x1E;

/// Tone control (treble bits 7:4, bass bits 3:0).
pub const TONE_CTL: u8 = 0x1F;

/// Tone control written at init.
pub const TONE_INIT: u8 = 0x0F;

/// Master volume A.
/// - 0x18 = +12 dB … 0x00 = 0 dB, 0xFF = −0.5 dB … 0x34 = −102 dB
/// - 0x19..=0x33 all read as −102 dB
pub const MASTER_A_VOL: u8 = 0x20;

/// Master volume B (same encoding as [`MASTER_A_VOL`]).
pub const MASTER_B_VOL: u8 = 0x21;

/// Headphone volume A (0x01 = muted, 0x00 = 0 dB).
pub const HEADPHONE_A_VOL: u8 = 0x22;

/// Headphone volume B.
pub const HEADPHONE_B_VOL: u8 = 0x23;

/// Headphone volume value that mutes the channel.
pub const HEADPHONE_MUTED: u8 = 0x01;

/// Speaker volume A.
pub const SPEAKER_A_VOL: u8 = 0x24;

/// Speaker volume B.
pub const SPEAKER_B_VOL: u8 = 0x25;

/// Channel mixer and swap.
pub const CHANNEL_MIXER: u8 = 0x26;

/// Limiter control 1 (thresholds).
pub const LIMIT_CTL1: u8 = 0x27;

/// Limiter control 2 (release rate).
pub const LIMIT_CTL2: u8 = 0x28;

/// Limiter attack rate.
pub const LIMIT_ATTACK: u8 = 0x29;

// ── Status ─────────────────────────────────────────────────────────────────

/// Overflow and clock status (read-only).
pub const STATUS: u8 = 0x2E;

/// Battery compensation.
pub const BATTERY_COMPENSATION: u8 = 0x2F;

/// VP battery level (read-only).
pub const VP_BATTERY_LEVEL: u8 = 0x30;

/// Speaker status (read-only).
pub const SPEAKER_STATUS: u8 = 0x31;

/// Charge pump frequency.
pub const CHARGE_PUMP_FREQ: u8 = 0x34;
