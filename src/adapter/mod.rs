// src/adapter/mod.rs

// Transport adapter over embedded-hal 1.0 I2C (requires the "impl-i2c" feature).

use crate::common::{
    hal_traits::{MillisClock, SensorRegisters},
    registers::DEFAULT_ADDRESS,
};
use embedded_hal::i2c::I2c;

/// Register access to a VL6180X on an embedded-hal I2C bus.
///
/// Register indices go out big-endian ahead of the data. The clock rides
/// along so the whole thing satisfies `SensorRegisters + MillisClock` and can
/// be handed straight to a `RangeReader`.
#[derive(Debug)]
pub struct I2cRegisters<I2C, C> {
    i2c: I2C,
    address: u8,
    clock: C,
}

impl<I2C, C> I2cRegisters<I2C, C>
where
    I2C: I2c,
    C: MillisClock,
{
    /// Creates the adapter for the device at the 7-bit `address`
    /// (usually `DEFAULT_ADDRESS`).
    pub fn new(i2c: I2C, address: u8, clock: C) -> Self {
        I2cRegisters { i2c, address, clock }
    }

    /// Adapter for a sensor at the factory default address.
    pub fn with_default_address(i2c: I2C, clock: C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS, clock)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Releases the bus and the clock.
    pub fn release(self) -> (I2C, C) {
        (self.i2c, self.clock)
    }
}

impl<I2C, C> SensorRegisters for I2cRegisters<I2C, C>
where
    I2C: I2c,
    C: MillisClock,
{
    type Error = I2C::Error;

    fn read_reg(&mut self, reg: u16) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &reg.to_be_bytes(), &mut buf)?;
        Ok(buf[0])
    }

    fn read_reg16(&mut self, reg: u16) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.address, &reg.to_be_bytes(), &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write_reg(&mut self, reg: u16, value: u8) -> Result<(), Self::Error> {
        let [hi, lo] = reg.to_be_bytes();
        self.i2c.write(self.address, &[hi, lo, value])
    }
}

impl<I2C, C> MillisClock for I2cRegisters<I2C, C>
where
    C: MillisClock,
{
    #[inline]
    fn millis(&mut self) -> u16 {
        self.clock.millis()
    }
}
