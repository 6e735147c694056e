//! # disco-audio
//!
//! A `no_std`, zero-allocation control layer for the
//! [CS43L22](https://www.cirrus.com/products/cs43l22/) audio codec on the
//! STM32F4-Discovery board, written in pure Rust. It turns three high-level
//! calls (init, play, stop) into codec register writes over I2C, a blocking
//! PCM transfer over I2S, and the reset-line sequencing the codec needs.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Facade | [`audio`] | [`AudioSubsystem`]: init / play / stop and runtime control |
//! | Trait | [`control`] | [`CodecDriver`] trait, output and stop options |
//! | Codec | [`codec`] | Codec registry and the CS43L22 driver |
//! | I/O | [`io`] | I2C register access, reset sequencing, I2S sink trait |
//! | Errors | [`error`] | [`Error`] (with a fatal variant) and [`Status`] |
//!
//! ## Quick start
//!
//! ```ignore
//! use disco_audio::{AudioSubsystem, CodecIo, OutputDevice, StopOption};
//!
//! let io = CodecIo::new(i2c1, audio_reset, delay);
//! let mut audio = AudioSubsystem::new(io, i2s3);
//!
//! audio.init(OutputDevice::Headphone, 70, 48_000)?;
//! audio.play(&samples, (samples.len() * 2) as u32)?;
//! audio.stop(StopOption::PowerDownHw)?;
//! ```
//!
//! A control bus failure comes back as [`Error::Fatal`]. The codec state is
//! unknown at that point and the caller is expected to halt or reset the
//! board.
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `defmt` | no | `defmt` logging and `defmt::Format` on public types |

#![no_std]

#[macro_use]
mod fmt;

pub mod constants;
pub mod config;
pub mod error;
pub mod io;
pub mod control;
pub mod codec;
pub mod audio;

#[cfg(test)]
mod mock;


pub use audio::{AudioSubsystem, State};
pub use codec::{Codec, Cs43l22};
pub use config::{AudioConfig, ConfigError, Identification};
pub use control::{CodecDriver, OutputDevice, StopOption};
pub use error::{Error, Status};
pub use io::{CodecIo, ControlBus, IoError, SampleTransmit, TransferError, TransferErrorKind};
