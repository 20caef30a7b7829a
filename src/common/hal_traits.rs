// src/common/hal_traits.rs

use core::fmt::Debug;

/// Register-level access to a VL6180X.
///
/// Register indices are the sensor's 16-bit addresses. How they travel over
/// the bus is up to the implementation (see `adapter::I2cRegisters` for the
/// embedded-hal one).
pub trait SensorRegisters {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Reads a single 8-bit register.
    fn read_reg(&mut self, reg: u16) -> Result<u8, Self::Error>;

    /// Reads a 16-bit register (two consecutive bytes, high byte first).
    fn read_reg16(&mut self, reg: u16) -> Result<u16, Self::Error>;

    /// Writes a single 8-bit register.
    fn write_reg(&mut self, reg: u16, value: u8) -> Result<(), Self::Error>;
}

/// Millisecond clock used for the poll timeout.
///
/// The counter is 16 bits wide and is expected to wrap; consumers must only
/// ever compare values with wrapping subtraction.
pub trait MillisClock {
    /// Current value of the free-running millisecond counter.
    fn millis(&mut self) -> u16;
}

impl<T: SensorRegisters + ?Sized> SensorRegisters for &mut T {
    type Error = T::Error;

    #[inline]
    fn read_reg(&mut self, reg: u16) -> Result<u8, Self::Error> {
        T::read_reg(self, reg)
    }

    #[inline]
    fn read_reg16(&mut self, reg: u16) -> Result<u16, Self::Error> {
        T::read_reg16(self, reg)
    }

    #[inline]
    fn write_reg(&mut self, reg: u16, value: u8) -> Result<(), Self::Error> {
        T::write_reg(self, reg, value)
    }
}

impl<T: MillisClock + ?Sized> MillisClock for &mut T {
    #[inline]
    fn millis(&mut self) -> u16 {
        T::millis(self)
    }
}

/// Wraps a closure returning the current milliseconds as a `MillisClock`.
///
/// Handy when the platform exposes its tick counter as a free function,
/// e.g. `FnClock(|| (systick_ms() & 0xFFFF) as u16)`.
#[derive(Debug, Clone, Copy)]
pub struct FnClock<F>(pub F);

impl<F: FnMut() -> u16> MillisClock for FnClock<F> {
    #[inline]
    fn millis(&mut self) -> u16 {
        (self.0)()
    }
}
