// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod hal_traits;
pub mod registers;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From error.rs
pub use error::RangeError;

// From hal_traits.rs
pub use hal_traits::{FnClock, MillisClock, SensorRegisters};

// From timing.rs
pub use timing::{elapsed_ms, IoTimeout};

// From registers.rs (constants - users can access via common::registers::*)
// Only the sentinel is re-exported since legacy callers compare against it.
pub use registers::TIMEOUT_SENTINEL;
