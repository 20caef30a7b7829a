// src/reader/poll.rs

use super::RangeReader;
use crate::common::{
    error::RangeError,
    hal_traits::{MillisClock, SensorRegisters},
    registers::{self, CLEAR_RANGE_INTERRUPT, RESULT__INTERRUPT_STATUS_GPIO, SYSTEM__INTERRUPT_CLEAR},
    timing::elapsed_ms,
};
use log::{trace, warn};
use nb::Result as NbResult;

// Implementation block for the ready-bit poll helpers
impl<IF> RangeReader<IF>
where
    IF: SensorRegisters + MillisClock,
{
    /// Checks the ready bit once. If set, reads the result with `read` and
    /// clears the range interrupt.
    pub(super) fn poll_result<T, FN>(&mut self, read: FN) -> NbResult<T, RangeError<IF::Error>>
    where
        FN: FnOnce(&mut IF) -> Result<T, IF::Error>,
    {
        let status = self
            .interface
            .read_reg(RESULT__INTERRUPT_STATUS_GPIO)
            .map_err(|e| nb::Error::Other(RangeError::Io(e)))?;

        if !registers::range_ready(status) {
            return Err(nb::Error::WouldBlock);
        }

        let value = read(&mut self.interface).map_err(|e| nb::Error::Other(RangeError::Io(e)))?;
        self.interface
            .write_reg(SYSTEM__INTERRUPT_CLEAR, CLEAR_RANGE_INTERRUPT)
            .map_err(|e| nb::Error::Other(RangeError::Io(e)))?;

        Ok(value)
    }

    /// Busy-waits on `poll_result` until it completes or the I/O timeout
    /// elapses. A timeout sets `did_timeout`.
    ///
    /// The clock is only consulted while the timeout is enabled.
    pub(super) fn wait_for_result<T, FN>(&mut self, mut read: FN) -> Result<T, RangeError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> Result<T, IF::Error>,
    {
        let start = self.interface.millis();
        trace!("waiting for range result (timeout {} ms)", self.io_timeout.as_millis());

        loop {
            match self.poll_result(&mut read) {
                Ok(value) => return Ok(value),
                Err(nb::Error::Other(e)) => return Err(e),
                Err(nb::Error::WouldBlock) => {
                    if self.io_timeout.is_disabled() {
                        continue;
                    }
                    let elapsed = elapsed_ms(start, self.interface.millis());
                    if self.io_timeout.is_exceeded(elapsed) {
                        self.did_timeout = true;
                        warn!("range measurement timed out after {} ms", elapsed);
                        return Err(RangeError::Timeout);
                    }
                }
            }
        }
    }
}
