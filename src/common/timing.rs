// src/common/timing.rs

use core::time::Duration;

// All timing here is in milliseconds on a 16-bit counter that wraps every
// 65.536 s. Elapsed time is only meaningful for intervals shorter than that.

/// Milliseconds between `start` and `now`, correct across counter wraparound.
#[inline]
pub const fn elapsed_ms(start: u16, now: u16) -> u16 {
    now.wrapping_sub(start)
}

/// I/O timeout for the ready-bit poll. Zero disables it (poll forever).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IoTimeout(u16);

impl IoTimeout {
    /// Never time out.
    pub const DISABLED: IoTimeout = IoTimeout(0);

    #[inline]
    pub const fn from_millis(ms: u16) -> Self {
        IoTimeout(ms)
    }

    #[inline]
    pub const fn as_millis(&self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_disabled(&self) -> bool {
        self.0 == 0
    }

    /// True once `elapsed` is strictly past an enabled timeout.
    #[inline]
    pub const fn is_exceeded(&self, elapsed: u16) -> bool {
        !self.is_disabled() && elapsed > self.0
    }
}

impl From<u16> for IoTimeout {
    fn from(ms: u16) -> Self {
        IoTimeout(ms)
    }
}

impl From<IoTimeout> for Duration {
    fn from(t: IoTimeout) -> Self {
        Duration::from_millis(t.0 as u64)
    }
}

impl TryFrom<Duration> for IoTimeout {
    type Error = Duration;

    /// Fails (returning the input) if the duration does not fit in 16 bits of milliseconds.
    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        u16::try_from(d.as_millis()).map(IoTimeout).map_err(|_| d)
    }
}
