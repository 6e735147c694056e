//! Hardware mocks shared by the unit and integration tests.
//!
//! The reset pin and the delay share a [`Clock`], so tests can check that a
//! pin edge happened a given time after another.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, I2c, Operation};

use crate::io::{CodecIo, SampleTransmit, TransferErrorKind};

pub type MockBus<'a> = CodecIo<MockI2c, MockPin<'a>, MockDelay<'a>>;

/// Control bus over fresh mocks, with the codec answering `id` on CHIP_ID.
pub fn mock_bus(clock: &Clock, id: u8) -> MockBus<'_> {
    let mut i2c = MockI2c::new();
    i2c.set_reg(0x01, id);
    CodecIo::new(i2c, MockPin::new(clock), MockDelay::new(clock))
}

/// Control bus whose I2C mock is supplied by the caller.
pub fn mock_bus_with(clock: &Clock, i2c: MockI2c) -> MockBus<'_> {
    CodecIo::new(i2c, MockPin::new(clock), MockDelay::new(clock))
}

// ── Clock ──────────────────────────────────────────────────────────────────

/// Simulated time, advanced only by [`MockDelay`].
pub struct Clock {
    ns: Cell<u64>,
}

impl Clock {
    pub fn new() -> Self {
        Self { ns: Cell::new(0) }
    }

    pub fn now_ns(&self) -> u64 {
        self.ns.get()
    }

    fn advance(&self, ns: u64) {
        self.ns.set(self.ns.get() + ns);
    }
}

pub struct MockDelay<'a> {
    clock: &'a Clock,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a Clock) -> Self {
        Self { clock }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(u64::from(ns));
    }
}

// ── Reset pin ──────────────────────────────────────────────────────────────

/// Output pin recording every level change with its timestamp.
pub struct MockPin<'a> {
    clock: &'a Clock,
    high: bool,
    events: [(bool, u64); 32],
    event_count: usize,
}

impl<'a> MockPin<'a> {
    pub fn new(clock: &'a Clock) -> Self {
        Self {
            clock,
            high: false,
            events: [(false, 0); 32],
            event_count: 0,
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// (level, time in ns) of the nth level change.
    pub fn event_at(&self, idx: usize) -> (bool, u64) {
        self.events[idx]
    }

    pub fn last_event(&self) -> Option<(bool, u64)> {
        self.event_count.checked_sub(1).map(|i| self.events[i])
    }

    fn record(&mut self, high: bool) {
        self.high = high;
        self.events[self.event_count] = (high, self.clock.now_ns());
        self.event_count += 1;
    }
}

impl digital::ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }
}

// ── I2C with 8-bit register file ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl i2c::Error for MockError {
    fn kind(&self) -> i2c::ErrorKind {
        i2c::ErrorKind::NoAcknowledge(i2c::NoAcknowledgeSource::Address)
    }
}

/// Mock I2C that maintains a register file and records writes.
pub struct MockI2c {
    regs: [u8; 256],
    /// Write log in chronological order: (address, register, value).
    log: [(u8, u8, u8); 128],
    log_count: usize,
    transactions: usize,
    fail_after: Option<usize>,
    fail_on: Option<(u8, u8)>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            regs: [0; 256],
            log: [(0, 0, 0); 128],
            log_count: 0,
            transactions: 0,
            fail_after: None,
            fail_on: None,
        }
    }

    pub fn reg(&self, register: u8) -> u8 {
        self.regs[register as usize]
    }

    pub fn set_reg(&mut self, register: u8, value: u8) {
        self.regs[register as usize] = value;
    }

    /// Fail every transaction once `n` have succeeded.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    /// Fail any write of `value` to `register`.
    pub fn fail_on(&mut self, register: u8, value: u8) {
        self.fail_on = Some((register, value));
    }

    pub fn write_count(&self) -> usize {
        self.log_count
    }

    pub fn write_at(&self, idx: usize) -> (u8, u8, u8) {
        self.log[idx]
    }

    /// (register, value) pairs written, oldest first.
    pub fn writes(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.log[..self.log_count].iter().map(|&(_, r, v)| (r, v))
    }

    fn begin(&mut self) -> Result<(), MockError> {
        if self.fail_after.is_some_and(|n| self.transactions >= n) {
            return Err(MockError);
        }
        self.transactions += 1;
        Ok(())
    }
}

impl i2c::ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c for MockI2c {
    fn read(&mut self, _addr: u8, _buf: &mut [u8]) -> Result<(), Self::Error> {
        self.begin()
    }

    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.begin()?;
        if let &[register, value] = bytes {
            if self.fail_on == Some((register, value)) {
                return Err(MockError);
            }
            self.set_reg(register, value);
            self.log[self.log_count] = (addr, register, value);
            self.log_count += 1;
        }
        Ok(())
    }

    fn write_read(&mut self, _addr: u8, wr: &[u8], rd: &mut [u8]) -> Result<(), Self::Error> {
        self.begin()?;
        if let (Some(&register), Some(out)) = (wr.first(), rd.first_mut()) {
            *out = self.reg(register);
        }
        Ok(())
    }

    fn transaction(
        &mut self,
        _addr: u8,
        _ops: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.begin()
    }
}

// ── I2S sink ───────────────────────────────────────────────────────────────

/// Data bus that counts what it was asked to send.
pub struct MockI2s {
    transfers: usize,
    samples_sent: usize,
    last_timeout_ms: Option<u32>,
    sample_rate: Option<u32>,
    fail_with: Option<TransferErrorKind>,
}

impl MockI2s {
    pub fn new() -> Self {
        Self {
            transfers: 0,
            samples_sent: 0,
            last_timeout_ms: None,
            sample_rate: None,
            fail_with: None,
        }
    }

    /// Make every transfer fail with `kind`.
    pub fn failing(kind: TransferErrorKind) -> Self {
        let mut i2s = Self::new();
        i2s.fail_with = Some(kind);
        i2s
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers
    }

    pub fn samples_sent(&self) -> usize {
        self.samples_sent
    }

    pub fn bytes_sent(&self) -> usize {
        self.samples_sent * 2
    }

    pub fn last_timeout_ms(&self) -> Option<u32> {
        self.last_timeout_ms
    }

    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }
}

impl SampleTransmit for MockI2s {
    type Error = TransferErrorKind;

    fn transmit(&mut self, samples: &[u16], timeout_ms: u32) -> Result<(), Self::Error> {
        self.transfers += 1;
        self.last_timeout_ms = Some(timeout_ms);
        if let Some(kind) = self.fail_with {
            return Err(kind);
        }
        self.samples_sent += samples.len();
        Ok(())
    }

    fn configure(&mut self, sample_rate: u32) -> Result<(), Self::Error> {
        self.sample_rate = Some(sample_rate);
        Ok(())
    }
}
