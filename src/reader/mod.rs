// src/reader/mod.rs

use crate::common::{
    error::RangeError,
    hal_traits::{MillisClock, SensorRegisters},
    registers::{self, RESULT__RANGE_RETURN_RATE, RESULT__RANGE_VAL, START_COMMAND, SYSRANGE__START},
    timing::IoTimeout,
};
use log::debug;
use nb::Result as NbResult;

mod poll;

#[cfg(test)]
pub(crate) mod mock;

/// Reader settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ReaderConfig {
    /// Poll timeout. The default (0 ms) disables it.
    pub io_timeout: IoTimeout,
}

/// Blocking range reads on a sensor the caller has already configured.
///
/// Every read busy-waits on the interrupt status register until the ready
/// bit is set. With a non-zero `io_timeout` the wait gives up once more than
/// that many milliseconds have passed on the interface's 16-bit clock,
/// returning `RangeError::Timeout` and latching the timeout flag until
/// [`timeout_occurred`](Self::timeout_occurred) is called.
///
/// `IF` may be an owned interface or `&mut` to one that lives elsewhere.
#[derive(Debug)]
pub struct RangeReader<IF>
where
    IF: SensorRegisters + MillisClock,
{
    interface: IF,
    io_timeout: IoTimeout,
    did_timeout: bool,
}

impl<IF> RangeReader<IF>
where
    IF: SensorRegisters + MillisClock,
{
    pub fn new(interface: IF) -> Self {
        Self::with_config(interface, ReaderConfig::default())
    }

    pub fn with_config(interface: IF, config: ReaderConfig) -> Self {
        RangeReader {
            interface,
            io_timeout: config.io_timeout,
            did_timeout: false,
        }
    }

    /// Gives back the underlying interface.
    pub fn release(self) -> IF {
        self.interface
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    pub fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    pub fn set_timeout(&mut self, timeout: IoTimeout) {
        self.io_timeout = timeout;
    }

    pub fn timeout(&self) -> IoTimeout {
        self.io_timeout
    }

    /// Returns whether a read has timed out since the last call, and clears the flag.
    pub fn timeout_occurred(&mut self) -> bool {
        core::mem::replace(&mut self.did_timeout, false)
    }

    /// Peeks at the timeout flag without clearing it.
    pub fn has_timed_out(&self) -> bool {
        self.did_timeout
    }

    // --- Public Blocking Methods ---

    /// Waits for the current measurement and returns the raw 16-bit reading
    /// (`RESULT__RANGE_RETURN_RATE`), then clears the range interrupt.
    ///
    /// Use this while the sensor is ranging continuously. On timeout nothing
    /// is read or cleared.
    pub fn read_range_continuous_raw(&mut self) -> Result<u16, RangeError<IF::Error>> {
        let raw = self.wait_for_result(|iface| iface.read_reg16(RESULT__RANGE_RETURN_RATE))?;
        debug!("raw range reading: {}", raw);
        Ok(raw)
    }

    /// Triggers one measurement and waits for its raw reading.
    pub fn read_range_single_raw(&mut self) -> Result<u16, RangeError<IF::Error>> {
        self.start_single()?;
        self.read_range_continuous_raw()
    }

    /// Like [`read_range_continuous_raw`](Self::read_range_continuous_raw),
    /// but reads the 8-bit `RESULT__RANGE_VAL` register (millimetres, unscaled).
    pub fn read_range_continuous_mm(&mut self) -> Result<u8, RangeError<IF::Error>> {
        let mm = self.wait_for_result(|iface| iface.read_reg(RESULT__RANGE_VAL))?;
        debug!("range: {} mm", mm);
        Ok(mm)
    }

    /// Triggers one measurement and waits for its millimetre reading.
    pub fn read_range_single_mm(&mut self) -> Result<u8, RangeError<IF::Error>> {
        self.start_single()?;
        self.read_range_continuous_mm()
    }

    // --- Sentinel compatibility ---

    /// Returns `TIMEOUT_SENTINEL` (255) instead of `Err(Timeout)`.
    ///
    /// 255 is also a valid raw reading; check
    /// [`timeout_occurred`](Self::timeout_occurred) right after the call to
    /// tell them apart.
    pub fn read_range_continuous_raw_or_sentinel(&mut self) -> Result<u16, IF::Error> {
        Self::sentinel_on_timeout(self.read_range_continuous_raw())
    }

    /// Single-shot counterpart of
    /// [`read_range_continuous_raw_or_sentinel`](Self::read_range_continuous_raw_or_sentinel).
    pub fn read_range_single_raw_or_sentinel(&mut self) -> Result<u16, IF::Error> {
        Self::sentinel_on_timeout(self.read_range_single_raw())
    }

    // --- Non-blocking ---

    /// Checks the ready bit once and, if set, reads and clears like
    /// [`read_range_continuous_raw`](Self::read_range_continuous_raw).
    ///
    /// Returns `WouldBlock` while the measurement is pending. The timeout is
    /// not applied here, so drive it with your own deadline (or `nb::block!`).
    pub fn poll_range_raw(&mut self) -> NbResult<u16, RangeError<IF::Error>> {
        self.poll_result(|iface| iface.read_reg16(RESULT__RANGE_RETURN_RATE))
    }

    fn start_single(&mut self) -> Result<(), RangeError<IF::Error>> {
        self.interface
            .write_reg(SYSRANGE__START, START_COMMAND)
            .map_err(RangeError::Io)
    }

    fn sentinel_on_timeout(res: Result<u16, RangeError<IF::Error>>) -> Result<u16, IF::Error> {
        match res {
            Ok(raw) => Ok(raw),
            Err(RangeError::Timeout) => Ok(registers::TIMEOUT_SENTINEL),
            Err(RangeError::Io(e)) => Err(e),
        }
    }
}
