// src/common/registers.rs

// Register indices are 16 bits on the VL6180X. Only the ones the range
// reader touches live here; the rest of the map belongs to whatever driver
// configured the sensor.

// === Range control ===

/// Writing `START_COMMAND` here triggers a single-shot range measurement.
pub const SYSRANGE__START: u16 = 0x018;
/// Writing `CLEAR_RANGE_INTERRUPT` here acknowledges a completed measurement.
pub const SYSTEM__INTERRUPT_CLEAR: u16 = 0x015;

// === Results ===

/// Interrupt status; bit 2 is set once a range measurement is ready.
pub const RESULT__INTERRUPT_STATUS_GPIO: u16 = 0x04F;
/// 8-bit range value in millimetres (before any scaling).
pub const RESULT__RANGE_VAL: u16 = 0x062;
/// 16-bit return rate, the raw reading returned by the `*_raw` reads.
pub const RESULT__RANGE_RETURN_RATE: u16 = 0x066;

// === Values ===

/// Mask of the "new sample ready" bit in `RESULT__INTERRUPT_STATUS_GPIO`.
pub const RANGE_READY_MASK: u8 = 0x04;
/// Value written to `SYSRANGE__START` to start a measurement.
pub const START_COMMAND: u8 = 0x01;
/// Value written to `SYSTEM__INTERRUPT_CLEAR` to clear the range interrupt.
pub const CLEAR_RANGE_INTERRUPT: u8 = 0x01;

/// Factory default 7-bit I2C address.
pub const DEFAULT_ADDRESS: u8 = 0x29;

/// Value legacy callers receive in place of a reading when the poll times out.
/// It is also a valid raw reading, so prefer the `Result` API.
pub const TIMEOUT_SENTINEL: u16 = 255;

/// True if the interrupt status byte reports a completed range measurement.
#[inline]
pub const fn range_ready(status: u8) -> bool {
    status & RANGE_READY_MASK != 0
}
