//! Low-level I/O primitives the codec driver and the facade are built on.
//!
//! | Item | Bus | Description |
//! |------|-----|-------------|
//! | [`ControlBus`] / [`CodecIo`] | I2C + GPIO | Register read/write, reset sequencing |
//! | [`SampleTransmit`] | I2S | Blocking PCM transfer |
//!
//! ## Reset line timing
//!
//! ```text
//! io_init:      ‾‾‾\_____5 ms_____/‾‾‾‾5 ms‾‾‾‾ → ready
//! power-down:   stop ── ≥1 ms ──\_____________   (held in reset)
//! ```

pub mod control_bus;
pub mod data_bus;

pub use control_bus::{CodecIo, ControlBus, IoError};
pub use data_bus::{SampleTransmit, TransferError, TransferErrorKind};
