//! Audio control facade.
//!
//! [`AudioSubsystem`] owns the control bus, the data bus and the bound codec
//! driver. Build it once at startup and pass it by `&mut` to whatever plays
//! audio; there is no global state.
//!
//! ## Lifecycle
//!
//! ```text
//! Unbound ──init──► Ready ──play──► Playing ──pause──► Paused
//!                    ▲  ◄──stop(Sw)──┘  ▲  ◄───resume────┘
//!                    │                  │
//!                    └─init── PoweredDown ◄──stop(Hw)── Ready/Playing/Paused
//! ```
//!
//! `init` identifies the codec and binds its driver exactly once; calling it
//! again (for instance after a hardware power-down) re-runs identification
//! and configuration but keeps the bound driver.

use crate::codec::Codec;
use crate::config::{check_sample_rate, check_volume, AudioConfig, Identification};
use crate::constants::POWER_DOWN_DELAY_MS;
use crate::control::{CodecDriver, OutputDevice, StopOption};
use crate::error::Error;
use crate::io::{ControlBus, SampleTransmit, TransferError};

/// Where the subsystem is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No driver bound yet.
    Unbound,
    /// Configured, DAC powered down.
    Ready,
    /// At least one buffer played since the last stop.
    Playing,
    /// Muted in power-save.
    Paused,
    /// Held in reset after a hardware stop.
    PoweredDown,
}

/// Audio subsystem context: codec control plus PCM playback.
///
/// # Example
///
/// ```ignore
/// let io = CodecIo::new(i2c1, audio_reset_pin, delay);
/// let mut audio = AudioSubsystem::new(io, i2s3);
///
/// audio.init(OutputDevice::Headphone, 70, 48_000)?;
/// audio.play(&samples, (samples.len() * 2) as u32)?;
/// audio.stop(StopOption::PowerDownHw)?;
/// ```
pub struct AudioSubsystem<B, S> {
    bus: B,
    i2s: S,
    config: AudioConfig,
    codec: Option<Codec>,
    state: State,
}

impl<B, S> AudioSubsystem<B, S>
where
    B: ControlBus,
    S: SampleTransmit,
{
    /// Create a subsystem with the default configuration.
    pub fn new(bus: B, i2s: S) -> Self {
        Self::with_config(bus, i2s, AudioConfig::default())
    }

    /// Create a subsystem with an explicit configuration.
    pub fn with_config(bus: B, i2s: S, config: AudioConfig) -> Self {
        Self {
            bus,
            i2s,
            config,
            codec: None,
            state: State::Unbound,
        }
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Whether a codec driver has been bound by `init`.
    pub fn is_bound(&self) -> bool {
        self.codec.is_some()
    }

    /// The bound codec driver, if any.
    pub fn codec(&self) -> Option<&Codec> {
        self.codec.as_ref()
    }

    /// Give back the control and data buses.
    pub fn release(self) -> (B, S) {
        (self.bus, self.i2s)
    }

    // ── Init / play / stop ─────────────────────────────────────────────

    /// Identify the codec, bind its driver and configure it.
    ///
    /// `volume` is 0 (mute) to 100; `sample_rate` is in Hz. On an
    /// unrecognized codec the driver stays unbound and the outcome depends on
    /// [`AudioConfig::identification`].
    ///
    /// Identification pulses the reset line, so once the subsystem has been
    /// initialized any later failure here leaves it [`State::PoweredDown`]
    /// until an `init` succeeds.
    pub fn init(
        &mut self,
        output: OutputDevice,
        volume: u8,
        sample_rate: u32,
    ) -> Result<(), Error<B::Error>> {
        check_volume(volume)?;
        check_sample_rate(sample_rate)?;
        let was_initialized = self.state != State::Unbound;

        match self.bring_up(output, volume, sample_rate) {
            Ok(()) => {
                self.state = State::Ready;
                Ok(())
            }
            Err(e) => {
                if was_initialized {
                    self.state = State::PoweredDown;
                }
                match e {
                    Error::UnknownCodec { id } => {
                        warn!("no driver for codec id {=u8:#x}", id);
                        match self.config.identification {
                            Identification::Strict => Err(Error::UnknownCodec { id }),
                            Identification::Lenient => Ok(()),
                        }
                    }
                    e => Err(e),
                }
            }
        }
    }

    /// Reset and identify the codec, then configure the driver and the data
    /// bus, in that order.
    fn bring_up(
        &mut self,
        output: OutputDevice,
        volume: u8,
        sample_rate: u32,
    ) -> Result<(), Error<B::Error>> {
        let address = self.config.address;
        let identified = Codec::identify(&mut self.bus, address)?;

        let codec = self.codec.get_or_insert(identified);
        codec.init(&mut self.bus, address, output, volume, sample_rate)?;
        self.i2s.configure(sample_rate).map_err(|e| e.kind())?;
        info!(
            "{=str} ready: {}, volume {=u8}, {=u32} Hz",
            codec.name(),
            output,
            volume,
            sample_rate
        );
        Ok(())
    }

    /// Play `size_bytes` bytes of `buffer`, blocking until the data bus has
    /// sent them all.
    ///
    /// The codec is told to play first; if that fails nothing is sent. The
    /// transfer is all-or-nothing: any data bus failure fails the call.
    pub fn play(&mut self, buffer: &[u16], size_bytes: u32) -> Result<(), Error<B::Error>> {
        let address = self.config.address;
        let timeout_ms = self.config.transfer_timeout_ms;
        let codec = Self::bound(&mut self.codec, self.state)?;
        let samples = Self::transfer_slice(buffer, size_bytes)?;

        codec.play(&mut self.bus, address, samples)?;
        self.i2s.transmit(samples, timeout_ms).map_err(|e| {
            warn!("transfer of {=u32} bytes failed", size_bytes);
            e.kind()
        })?;

        self.state = State::Playing;
        Ok(())
    }

    /// Stop playback. [`StopOption::PowerDownHw`] then waits at least 1 ms
    /// and holds the codec in reset; a full `init` is needed to play again.
    pub fn stop(&mut self, option: StopOption) -> Result<(), Error<B::Error>> {
        let address = self.config.address;
        let codec = Self::bound(&mut self.codec, self.state)?;
        codec.stop(&mut self.bus, address, option)?;

        if option == StopOption::PowerDownHw {
            self.bus.delay_ms(POWER_DOWN_DELAY_MS);
            self.bus.assert_reset().map_err(Error::Fatal)?;
            info!("codec held in reset");
            self.state = State::PoweredDown;
        } else {
            self.state = State::Ready;
        }
        Ok(())
    }

    // ── Runtime control ────────────────────────────────────────────────

    /// Mute and put the codec in power-save without losing its setup.
    pub fn pause(&mut self) -> Result<(), Error<B::Error>> {
        let address = self.config.address;
        Self::bound(&mut self.codec, self.state)?.pause(&mut self.bus, address)?;
        self.state = State::Paused;
        Ok(())
    }

    /// Leave power-save and unmute.
    pub fn resume(&mut self) -> Result<(), Error<B::Error>> {
        let address = self.config.address;
        Self::bound(&mut self.codec, self.state)?.resume(&mut self.bus, address)?;
        self.state = State::Playing;
        Ok(())
    }

    /// Set the master volume, 0 (silent) to 100.
    pub fn set_volume(&mut self, volume: u8) -> Result<(), Error<B::Error>> {
        check_volume(volume)?;
        let address = self.config.address;
        Self::bound(&mut self.codec, self.state)?.set_volume(&mut self.bus, address, volume)
    }

    /// Mute or unmute the outputs.
    pub fn set_mute(&mut self, mute: bool) -> Result<(), Error<B::Error>> {
        let address = self.config.address;
        Self::bound(&mut self.codec, self.state)?.set_mute(&mut self.bus, address, mute)
    }

    /// Switch between speaker, headphone, both or automatic routing.
    pub fn set_output_mode(&mut self, output: OutputDevice) -> Result<(), Error<B::Error>> {
        let address = self.config.address;
        Self::bound(&mut self.codec, self.state)?.set_output_mode(&mut self.bus, address, output)
    }

    /// Reclock the data bus for `sample_rate` Hz. The codec follows on its
    /// own through clock auto-detection.
    pub fn set_frequency(&mut self, sample_rate: u32) -> Result<(), Error<B::Error>> {
        check_sample_rate(sample_rate)?;
        if self.codec.is_none() || self.state == State::Unbound {
            return Err(Error::NotInitialized);
        }
        self.i2s.configure(sample_rate).map_err(|e| e.kind().into())
    }

    /// Run the low-level deinit hook. The driver stays bound.
    pub fn deinit(&mut self) {
        match self.codec.as_mut() {
            Some(codec) => codec.deinit(&mut self.bus),
            None => self.bus.io_deinit(),
        }
    }

    // ── Helpers ────────────────────────────────────────────────────────

    /// The bound driver, if the codec can currently take commands.
    fn bound(codec: &mut Option<Codec>, state: State) -> Result<&mut Codec, Error<B::Error>> {
        match (codec.as_mut(), state) {
            (None, _) | (_, State::Unbound) => Err(Error::NotInitialized),
            (Some(_), State::PoweredDown) => Err(Error::PoweredDown),
            (Some(codec), _) => Ok(codec),
        }
    }

    /// The leading `size_bytes` of `buffer` as whole samples.
    fn transfer_slice(buffer: &[u16], size_bytes: u32) -> Result<&[u16], Error<B::Error>> {
        let capacity_bytes = core::mem::size_of_val(buffer);
        usize::try_from(size_bytes)
            .ok()
            .filter(|&n| n != 0 && n % 2 == 0 && n <= capacity_bytes)
            .and_then(|n| buffer.get(..n / 2))
            .ok_or(Error::InvalidBuffer {
                size_bytes,
                capacity_bytes,
            })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
