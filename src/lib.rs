// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod reader;

#[cfg(feature = "impl-i2c")]
pub mod adapter;

// Re-export key types for convenience
pub use common::RangeError;
pub use reader::{RangeReader, ReaderConfig};

#[cfg(feature = "impl-i2c")]
pub use adapter::I2cRegisters;
