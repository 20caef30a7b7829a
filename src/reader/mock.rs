// src/reader/mock.rs

// Simulated VL6180X shared by the reader tests. Time only moves when the
// interrupt status register is read, so a poll loop advances the clock by
// `step_ms` per iteration whether or not it consults the clock.

use crate::common::{
    hal_traits::{MillisClock, SensorRegisters},
    registers::*,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Op {
    Read8(u16),
    Read16(u16),
    Write(u16, u8),
}

pub const OP_LOG_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct MockSensor {
    /// Current value of the 16-bit millisecond counter.
    pub now: u16,
    /// Total simulated milliseconds since construction (does not wrap).
    pub elapsed_total: u32,
    pub step_ms: u16,
    /// Status reports ready once `elapsed_total` reaches this.
    pub ready_after_ms: Option<u32>,
    pub return_rate: u16,
    pub range_val: u8,
    /// Any access to this register fails.
    pub fail_on: Option<u16>,
    pub status_reads: u32,
    pub millis_calls: u32,
    /// First `OP_LOG_LEN` operations; later ones are dropped.
    pub ops: heapless::Vec<Op, OP_LOG_LEN>,
}

impl MockSensor {
    pub fn new() -> Self {
        MockSensor {
            now: 0,
            elapsed_total: 0,
            step_ms: 1,
            ready_after_ms: None,
            return_rate: 0,
            range_val: 0,
            fail_on: None,
            status_reads: 0,
            millis_calls: 0,
            ops: heapless::Vec::new(),
        }
    }

    pub fn starting_at(mut self, now: u16) -> Self {
        self.now = now;
        self
    }

    pub fn ready_after(mut self, ms: u32) -> Self {
        self.ready_after_ms = Some(ms);
        self
    }

    pub fn with_return_rate(mut self, value: u16) -> Self {
        self.return_rate = value;
        self
    }

    pub fn with_range_val(mut self, value: u8) -> Self {
        self.range_val = value;
        self
    }

    pub fn failing_on(mut self, reg: u16) -> Self {
        self.fail_on = Some(reg);
        self
    }

    pub fn was_read16(&self, reg: u16) -> bool {
        self.ops.iter().any(|op| *op == Op::Read16(reg))
    }

    pub fn was_written(&self, reg: u16) -> bool {
        self.ops.iter().any(|op| matches!(op, Op::Write(r, _) if *r == reg))
    }

    fn log(&mut self, op: Op) {
        let _ = self.ops.push(op);
    }

    fn check_fail(&self, reg: u16) -> Result<(), MockBusError> {
        if self.fail_on == Some(reg) {
            Err(MockBusError)
        } else {
            Ok(())
        }
    }

    fn advance(&mut self, ms: u16) {
        self.now = self.now.wrapping_add(ms);
        self.elapsed_total = self.elapsed_total.saturating_add(ms as u32);
    }
}

impl SensorRegisters for MockSensor {
    type Error = MockBusError;

    fn read_reg(&mut self, reg: u16) -> Result<u8, Self::Error> {
        self.log(Op::Read8(reg));
        self.check_fail(reg)?;
        match reg {
            RESULT__INTERRUPT_STATUS_GPIO => {
                self.status_reads += 1;
                let ready = self
                    .ready_after_ms
                    .map_or(false, |t| self.elapsed_total >= t);
                let step = self.step_ms;
                self.advance(step);
                // Low bits carry the (unrelated) ALS status; only bit 2 matters.
                Ok(if ready { 0x04 | 0x03 } else { 0x03 })
            }
            RESULT__RANGE_VAL => Ok(self.range_val),
            _ => Ok(0),
        }
    }

    fn read_reg16(&mut self, reg: u16) -> Result<u16, Self::Error> {
        self.log(Op::Read16(reg));
        self.check_fail(reg)?;
        match reg {
            RESULT__RANGE_RETURN_RATE => Ok(self.return_rate),
            _ => Ok(0),
        }
    }

    fn write_reg(&mut self, reg: u16, value: u8) -> Result<(), Self::Error> {
        self.log(Op::Write(reg, value));
        self.check_fail(reg)
    }
}

impl MillisClock for MockSensor {
    fn millis(&mut self) -> u16 {
        self.millis_calls += 1;
        self.now
    }
}
